//! Bot copy for the guided flow.
//!
//! Everything the bot says during the guided portion lives here so the
//! engine stays free of string literals and the copy is easy to review.

use crate::config::SiteSettings;

/// First bot message shown when the widget opens.
pub fn greeting() -> &'static str {
    "Hi there! 👋 I'm the enrollment assistant. I can answer questions about \
     our certification programs — tap start and we'll get going."
}

/// Consent request emitted when the visitor presses start.
pub fn consent_prompt() -> &'static str {
    "Before we chat, is it okay if we save your contact details so an \
     enrollment advisor can follow up? (yes/no)"
}

/// Reply when consent is declined. The guided flow idles afterwards.
pub fn decline_reply(settings: &SiteSettings) -> String {
    format!(
        "No problem — we won't save anything. If you change your mind, you can \
         always call us at {} or email {}.",
        settings.phone, settings.contact_email
    )
}

pub fn email_prompt() -> &'static str {
    "Great! What's the best email address to reach you at?"
}

pub fn email_reprompt() -> &'static str {
    "Hmm, that doesn't look like a valid email address. Could you re-enter it? \
     (e.g. name@example.com)"
}

pub fn name_prompt() -> &'static str {
    "Thanks! And what's your full name?"
}

pub fn name_reprompt() -> &'static str {
    "Could you give me your full name?"
}

pub fn phone_prompt() -> &'static str {
    "Almost done — what's a good phone number for you?"
}

pub fn phone_reprompt() -> &'static str {
    "That phone number doesn't look right. Please enter a number with at \
     least 7 digits."
}

/// Welcome into free-form chat once the lead is captured.
pub fn chat_welcome(name: &str) -> String {
    format!(
        "You're all set, {name}! How can I help you today? Ask me about our \
         programs, schedules, or pricing."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decline_reply_includes_contact_details() {
        let settings = SiteSettings {
            phone: "(800) 555-0100".into(),
            contact_email: "hello@example.com".into(),
        };
        let reply = decline_reply(&settings);
        assert!(reply.contains("(800) 555-0100"));
        assert!(reply.contains("hello@example.com"));
    }

    #[test]
    fn chat_welcome_addresses_visitor() {
        assert!(chat_welcome("Jane Doe").contains("Jane Doe"));
    }
}
