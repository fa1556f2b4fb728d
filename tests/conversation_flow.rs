//! End-to-end conversation flow tests against a mock lead store.

use std::sync::Arc;

use async_trait::async_trait;
use lead_chat::config::{ChatConfig, SiteSettings};
use lead_chat::conversation::{ConversationState, Engine, Sender};
use lead_chat::error::LeadApiError;
use lead_chat::leads::{LeadPayload, LeadStore};
use lead_chat::runtime::ConversationRuntime;
use tokio::sync::Mutex;

/// Records every payload it receives; optionally fails every call.
struct RecordingStore {
    calls: Mutex<Vec<LeadPayload>>,
    fail: bool,
}

impl RecordingStore {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    async fn calls(&self) -> Vec<LeadPayload> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl LeadStore for RecordingStore {
    async fn create_or_update(
        &self,
        payload: &LeadPayload,
    ) -> Result<Option<String>, LeadApiError> {
        self.calls.lock().await.push(payload.clone());
        if self.fail {
            return Err(LeadApiError::Request("connection refused".into()));
        }
        Ok(Some("lead-1".into()))
    }
}

fn runtime_with(store: Arc<RecordingStore>) -> ConversationRuntime {
    let engine = Engine::new(SiteSettings::default(), ChatConfig::immediate());
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    ConversationRuntime::new(engine, store, tx)
}

/// Drive the guided flow through the phone step, settling after each
/// submission so transcript ordering is deterministic.
async fn capture_lead(runtime: &mut ConversationRuntime) {
    runtime.start().await;
    runtime.settle().await;
    for input in ["yes", "a@b.com", "Jane Doe", "123-456-7890"] {
        runtime.submit(input).await;
        runtime.settle().await;
    }
}

#[tokio::test]
async fn full_flow_persists_lead_once() {
    let store = RecordingStore::new();
    let mut runtime = runtime_with(Arc::clone(&store));

    capture_lead(&mut runtime).await;

    assert_eq!(runtime.state(), ConversationState::Chat);
    assert_eq!(runtime.lead_id().await.as_deref(), Some("lead-1"));

    let calls = store.calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], LeadPayload {
        id: None,
        email: "a@b.com".into(),
        name: "Jane Doe".into(),
        phone: "123-456-7890".into(),
        messages: None,
    });

    // Welcome message closes the guided flow.
    let transcript = runtime.transcript().await;
    let last = transcript.last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert!(last.text.contains("Jane Doe"));
}

#[tokio::test]
async fn transcript_interleaves_user_and_bot_messages() {
    let store = RecordingStore::new();
    let mut runtime = runtime_with(store);

    runtime.greet().await;
    runtime.start().await;
    runtime.settle().await;
    runtime.submit("yes").await;
    runtime.settle().await;

    let transcript = runtime.transcript().await;
    let senders: Vec<Sender> = transcript.iter().map(|m| m.sender).collect();
    // greeting, consent prompt, "yes", email prompt
    assert_eq!(senders, [Sender::Bot, Sender::Bot, Sender::User, Sender::Bot]);
    assert!(transcript[3].text.contains("email"));
}

#[tokio::test]
async fn chat_question_updates_question_log() {
    let store = RecordingStore::new();
    let mut runtime = runtime_with(Arc::clone(&store));

    capture_lead(&mut runtime).await;
    runtime.submit("What is the price?").await;
    runtime.settle().await;

    let calls = store.calls().await;
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].id.as_deref(), Some("lead-1"));
    assert_eq!(calls[1].messages.as_deref(), Some("What is the price?"));

    // Pricing branch reply reaches the transcript.
    let transcript = runtime.transcript().await;
    assert!(transcript.last().unwrap().text.contains("$1,495"));
}

#[tokio::test]
async fn question_log_is_full_replace() {
    let store = RecordingStore::new();
    let mut runtime = runtime_with(Arc::clone(&store));

    capture_lead(&mut runtime).await;
    runtime.submit("What is the price?").await;
    runtime.settle().await;
    runtime.submit("When is the next class?").await;
    runtime.settle().await;

    let calls = store.calls().await;
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[2].messages.as_deref(),
        Some("What is the price? | When is the next class?")
    );
}

#[tokio::test]
async fn persistence_failure_is_swallowed() {
    let store = RecordingStore::failing();
    let mut runtime = runtime_with(Arc::clone(&store));

    capture_lead(&mut runtime).await;

    // The conversation reaches chat and greets the visitor regardless.
    assert_eq!(runtime.state(), ConversationState::Chat);
    assert!(runtime.lead_id().await.is_none());
    let transcript = runtime.transcript().await;
    assert!(transcript.last().unwrap().text.contains("How can I help"));

    // Without a lead id, question log updates are skipped entirely.
    runtime.submit("What is the price?").await;
    runtime.settle().await;
    assert_eq!(store.calls().await.len(), 1);

    // The canned reply still arrives.
    let transcript = runtime.transcript().await;
    assert!(transcript.last().unwrap().text.contains("$1,495"));
}

#[tokio::test]
async fn decline_never_persists_anything() {
    let store = RecordingStore::new();
    let mut runtime = runtime_with(Arc::clone(&store));

    runtime.start().await;
    runtime.submit("no").await;
    runtime.submit("still no").await;
    runtime.settle().await;

    assert_eq!(runtime.state(), ConversationState::Privacy);
    assert!(store.calls().await.is_empty());
    assert!(runtime.lead_id().await.is_none());
}
