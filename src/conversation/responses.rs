//! Canned response resolver for free-form chat.
//!
//! Deterministic keyword matching: case-insensitive substring checks in a
//! fixed priority order, first match wins. No LLM, no templating beyond
//! interpolating site contact details.

use crate::config::SiteSettings;

/// Which canned branch matched. Exposed for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseBranch {
    Program,
    Schedule,
    Pricing,
    Contact,
    Fallback,
}

/// Resolve a free-text question to a canned branch.
pub fn resolve_branch(question: &str) -> ResponseBranch {
    let q = question.to_lowercase();
    if q.contains("pmp") || q.contains("certification") {
        ResponseBranch::Program
    } else if q.contains("schedule") || q.contains("class") {
        ResponseBranch::Schedule
    } else if q.contains("price") || q.contains("cost") {
        ResponseBranch::Pricing
    } else if q.contains("contact") || q.contains("phone") {
        ResponseBranch::Contact
    } else {
        ResponseBranch::Fallback
    }
}

/// Produce the canned reply for a question.
pub fn canned_reply(question: &str, settings: &SiteSettings) -> String {
    let branch = resolve_branch(question);
    tracing::debug!(?branch, "canned response branch selected");
    match branch {
        ResponseBranch::Program => "Our PMP Exam Prep program covers all 35 contact hours \
             required by PMI, with live instructor-led sessions, full-length \
             practice exams, and one-on-one application support."
            .to_string(),
        ResponseBranch::Schedule => "We start new cohorts every month, with weekday-evening and \
             weekend options. Most students complete the program in four weeks."
            .to_string(),
        ResponseBranch::Pricing => "The PMP Exam Prep bundle starts at $1,495, and flexible \
             payment plans are available. Ask us about group and corporate rates."
            .to_string(),
        ResponseBranch::Contact => format!(
            "You can reach our enrollment team at {} or {} — we're happy to help.",
            settings.phone, settings.contact_email
        ),
        ResponseBranch::Fallback => format!(
            "Great question! An enrollment advisor will follow up with you \
             shortly — or call us at {} for an immediate answer.",
            settings.phone
        ),
    }
}
