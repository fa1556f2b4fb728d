//! Guided lead-capture conversation: state machine, validators, and the
//! event/effect reducer at the core of the chat widget.

pub mod engine;
pub mod lead;
pub mod message;
pub mod prompts;
pub mod responses;
pub mod state;
pub mod validate;

pub use engine::{Effect, Engine, Event};
pub use lead::{LeadDraft, QuestionLog};
pub use message::{Message, MessageLog, Sender};
pub use state::ConversationState;
