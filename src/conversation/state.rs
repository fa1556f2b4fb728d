//! Conversation state machine — tracks which step of the guided flow is active.

use serde::{Deserialize, Serialize};

/// The steps of the lead-capture conversation.
///
/// Progresses linearly: Intro → Privacy → Email → Name → Phone → Chat.
/// `Chat` is a steady state that accepts unbounded further input; there is
/// no terminal state and no backward transition. Invalid input keeps the
/// machine in place and re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    Intro,
    Privacy,
    Email,
    Name,
    Phone,
    Chat,
}

impl ConversationState {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: ConversationState) -> bool {
        use ConversationState::*;
        matches!(
            (self, target),
            (Intro, Privacy) | (Privacy, Email) | (Email, Name) | (Name, Phone) | (Phone, Chat)
        )
    }

    /// Get the next state in the linear progression, if any.
    pub fn next(&self) -> Option<ConversationState> {
        use ConversationState::*;
        match self {
            Intro => Some(Privacy),
            Privacy => Some(Email),
            Email => Some(Name),
            Name => Some(Phone),
            Phone => Some(Chat),
            Chat => None,
        }
    }

    /// Whether the guided portion is over and free-form chat is active.
    pub fn is_chat(&self) -> bool {
        matches!(self, Self::Chat)
    }

    /// Input placeholder hint for the active step.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Intro => "Press start to begin",
            Self::Privacy => "Type yes to continue",
            Self::Email => "you@example.com",
            Self::Name => "Your full name",
            Self::Phone => "Your phone number",
            Self::Chat => "Ask us anything...",
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::Intro
    }
}

impl std::fmt::Display for ConversationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Intro => "intro",
            Self::Privacy => "privacy",
            Self::Email => "email",
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Chat => "chat",
        };
        write!(f, "{s}")
    }
}
