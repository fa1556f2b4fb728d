//! Conversation reducer — the pure event-to-effects core of the chat widget.
//!
//! The engine owns the conversation state, the accumulating lead draft, and
//! the question log. It never performs I/O: timers, HTTP, and transcript
//! fan-out are described as [`Effect`]s and executed by the runtime shell,
//! so everything here runs synchronously under test.

use std::time::Duration;

use crate::config::{ChatConfig, SiteSettings};

use super::lead::{LeadDraft, QuestionLog};
use super::prompts;
use super::responses;
use super::state::ConversationState;
use super::validate;

/// An input to the conversation.
#[derive(Debug, Clone)]
pub enum Event {
    /// The visitor pressed the start button.
    Start,
    /// The visitor submitted free text.
    UserInput(String),
}

/// A side effect requested by the reducer, executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append the visitor's message to the transcript immediately.
    AppendUser { text: String },
    /// Append a bot message after a typing-simulation delay. The delay is
    /// cosmetic pacing and must never block further input.
    ScheduleBot { delay: Duration, text: String },
    /// Persist the completed lead draft (first save, no questions yet).
    CreateLead { draft: LeadDraft },
    /// Re-send the lead with the full joined question log (full replace).
    UpdateLead { draft: LeadDraft, questions: String },
}

/// The guided lead-capture conversation engine.
pub struct Engine {
    state: ConversationState,
    draft: LeadDraft,
    questions: QuestionLog,
    settings: SiteSettings,
    config: ChatConfig,
}

impl Engine {
    pub fn new(settings: SiteSettings, config: ChatConfig) -> Self {
        Self {
            state: ConversationState::Intro,
            draft: LeadDraft::default(),
            questions: QuestionLog::default(),
            settings,
            config,
        }
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn questions(&self) -> &QuestionLog {
        &self.questions
    }

    /// Apply one event and return the effects the runtime must execute.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Start => self.handle_start(),
            Event::UserInput(text) => self.handle_input(&text),
        }
    }

    fn handle_start(&mut self) -> Vec<Effect> {
        if self.state != ConversationState::Intro {
            tracing::debug!(state = %self.state, "ignoring start event outside intro");
            return Vec::new();
        }
        self.state = ConversationState::Privacy;
        vec![self.prompt(prompts::consent_prompt())]
    }

    fn handle_input(&mut self, text: &str) -> Vec<Effect> {
        let input = text.trim();
        if input.is_empty() {
            return Vec::new();
        }

        // Every submission lands in the transcript first, unconditionally.
        let mut effects = vec![Effect::AppendUser {
            text: input.to_string(),
        }];

        match self.state {
            ConversationState::Intro => {
                // The intro step is button-driven; stray text is logged but
                // gets no reply.
                tracing::debug!("text input before start; no reply");
            }
            ConversationState::Privacy => {
                if validate::is_affirmative(input) {
                    self.state = ConversationState::Email;
                    effects.push(self.prompt(prompts::email_prompt()));
                } else {
                    // Declined: stay in privacy. A later affirmative still
                    // proceeds, so changing one's mind works.
                    effects.push(self.prompt(prompts::decline_reply(&self.settings)));
                }
            }
            ConversationState::Email => {
                if validate::is_valid_email(input) {
                    self.draft.email = input.to_string();
                    self.state = ConversationState::Name;
                    effects.push(self.prompt(prompts::name_prompt()));
                } else {
                    effects.push(self.prompt(prompts::email_reprompt()));
                }
            }
            ConversationState::Name => {
                if validate::is_valid_name(input) {
                    self.draft.name = input.to_string();
                    self.state = ConversationState::Phone;
                    effects.push(self.prompt(prompts::phone_prompt()));
                } else {
                    effects.push(self.prompt(prompts::name_reprompt()));
                }
            }
            ConversationState::Phone => {
                if validate::is_valid_phone(input) {
                    self.draft.phone = input.to_string();
                    self.state = ConversationState::Chat;
                    effects.push(Effect::CreateLead {
                        draft: self.draft.clone(),
                    });
                    effects.push(self.prompt(prompts::chat_welcome(&self.draft.name)));
                } else {
                    effects.push(self.prompt(prompts::phone_reprompt()));
                }
            }
            ConversationState::Chat => {
                self.questions.push(input);
                effects.push(Effect::UpdateLead {
                    draft: self.draft.clone(),
                    questions: self.questions.joined(),
                });
                let reply = responses::canned_reply(input, &self.settings);
                effects.push(Effect::ScheduleBot {
                    delay: self.config.reply_delay,
                    text: reply,
                });
            }
        }

        effects
    }

    fn prompt(&self, text: impl Into<String>) -> Effect {
        Effect::ScheduleBot {
            delay: self.config.prompt_delay,
            text: text.into(),
        }
    }
}
