//! Configuration types.

use std::time::Duration;

/// Site-wide contact details consumed by canned replies.
///
/// Constructed explicitly (from env in the binary, literals in tests) and
/// passed down to the engine — no ambient global lookup.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Phone number interpolated into contact/fallback replies.
    pub phone: String,
    /// Email address interpolated into contact replies.
    pub contact_email: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            phone: "(800) 555-0148".to_string(),
            contact_email: "enroll@summitcert.com".to_string(),
        }
    }
}

impl SiteSettings {
    /// Read settings from `SITE_PHONE` / `SITE_CONTACT_EMAIL`, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            phone: std::env::var("SITE_PHONE").unwrap_or(defaults.phone),
            contact_email: std::env::var("SITE_CONTACT_EMAIL").unwrap_or(defaults.contact_email),
        }
    }
}

/// Pacing knobs for the conversation engine.
///
/// The delays simulate typing before a bot message appears. They are purely
/// cosmetic; tests run with [`ChatConfig::immediate`].
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Delay before a guided-flow prompt is shown.
    pub prompt_delay: Duration,
    /// Delay before a free-form chat reply is shown.
    pub reply_delay: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            prompt_delay: Duration::from_millis(500),
            reply_delay: Duration::from_millis(1000),
        }
    }
}

impl ChatConfig {
    /// Zero-delay pacing.
    pub fn immediate() -> Self {
        Self {
            prompt_delay: Duration::ZERO,
            reply_delay: Duration::ZERO,
        }
    }
}
