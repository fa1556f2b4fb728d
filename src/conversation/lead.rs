//! Lead data accumulated across the guided flow.

use serde::{Deserialize, Serialize};

/// Contact details collected field-by-field during the guided flow.
///
/// Each field is requested exactly once; once the draft is persisted the
/// only thing that still changes server-side is the question log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadDraft {
    pub email: String,
    pub name: String,
    pub phone: String,
}

impl LeadDraft {
    /// All guided-flow fields collected.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.name.is_empty() && !self.phone.is_empty()
    }
}

/// Delimiter between logged questions on the wire.
pub const QUESTION_DELIMITER: &str = " | ";

/// Questions submitted after the guided flow, in submission order.
///
/// The full joined log is re-sent to the backend on every new question:
/// full-replace semantics, not an incremental append.
#[derive(Debug, Clone, Default)]
pub struct QuestionLog {
    questions: Vec<String>,
}

impl QuestionLog {
    pub fn push(&mut self, question: impl Into<String>) {
        self.questions.push(question.into());
    }

    /// Join all questions with [`QUESTION_DELIMITER`].
    pub fn joined(&self) -> String {
        self.questions.join(QUESTION_DELIMITER)
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
