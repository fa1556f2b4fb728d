//! HTTP client for the chat-leads endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::conversation::LeadDraft;
use crate::error::LeadApiError;

/// Wire payload for `POST /api/chat-leads`.
///
/// `id` is present on update calls so the backend can correlate the question
/// log with the originally created lead. `messages` is the full question log
/// joined with `" | "` — full replace on every call, not an append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<String>,
}

impl LeadPayload {
    /// Payload for the first save, fired when the phone step completes.
    pub fn create(draft: &LeadDraft) -> Self {
        Self {
            id: None,
            email: draft.email.clone(),
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            messages: None,
        }
    }

    /// Payload for a question-log update against an existing lead.
    pub fn update(id: &str, draft: &LeadDraft, questions: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            email: draft.email.clone(),
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            messages: Some(questions.to_string()),
        }
    }
}

/// Response envelope from the chat-leads endpoint.
#[derive(Debug, Deserialize)]
struct LeadResponse {
    success: bool,
    #[serde(default)]
    data: Option<LeadData>,
}

#[derive(Debug, Deserialize)]
struct LeadData {
    id: String,
}

/// Persistence collaborator for captured leads.
///
/// Implementations must be callable fire-and-forget: the runtime never
/// awaits a save on the input-handling path and swallows failures.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Create the lead or replace its question log.
    ///
    /// Returns the lead id when the backend provides one (it does on the
    /// first call; update responses may omit it).
    async fn create_or_update(&self, payload: &LeadPayload)
    -> Result<Option<String>, LeadApiError>;
}

/// [`LeadStore`] backed by the site's REST API.
pub struct HttpLeadClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpLeadClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/chat-leads", self.base_url)
    }
}

#[async_trait]
impl LeadStore for HttpLeadClient {
    async fn create_or_update(
        &self,
        payload: &LeadPayload,
    ) -> Result<Option<String>, LeadApiError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(payload)
            .send()
            .await
            .map_err(|e| LeadApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LeadApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: LeadResponse = response
            .json()
            .await
            .map_err(|e| LeadApiError::InvalidResponse(e.to_string()))?;

        if !parsed.success {
            return Err(LeadApiError::Rejected);
        }

        Ok(parsed.data.map(|d| d.id))
    }
}
