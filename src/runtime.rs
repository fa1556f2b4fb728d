//! Runtime shell — executes reducer effects.
//!
//! Owns one visitor's conversation: applies events to the [`Engine`] and
//! interprets the resulting effects. Bot messages land after their pacing
//! delay on spawned tasks, and persistence calls are fire-and-forget, so
//! input handling never blocks on a timer or the network.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinSet;
use uuid::Uuid;

use crate::conversation::{
    ConversationState, Effect, Engine, Event, Message, MessageLog, prompts,
};
use crate::leads::{LeadPayload, LeadStore};

/// Drives one conversation end to end.
///
/// Each widget instance owns an independent runtime; there is no cross-
/// conversation state to coordinate.
pub struct ConversationRuntime {
    engine: Engine,
    log: Arc<Mutex<MessageLog>>,
    store: Arc<dyn LeadStore>,
    lead_id: Arc<RwLock<Option<String>>>,
    outbound: UnboundedSender<Message>,
    tasks: JoinSet<()>,
    conversation_id: Uuid,
}

impl ConversationRuntime {
    /// Create a runtime. Appended messages are mirrored to `outbound` for
    /// rendering; a closed receiver is tolerated (the transcript is still
    /// kept).
    pub fn new(engine: Engine, store: Arc<dyn LeadStore>, outbound: UnboundedSender<Message>) -> Self {
        Self {
            engine,
            log: Arc::new(Mutex::new(MessageLog::new())),
            store,
            lead_id: Arc::new(RwLock::new(None)),
            outbound,
            tasks: JoinSet::new(),
            conversation_id: Uuid::new_v4(),
        }
    }

    pub fn state(&self) -> ConversationState {
        self.engine.state()
    }

    /// Snapshot of the transcript so far.
    pub async fn transcript(&self) -> Vec<Message> {
        self.log.lock().await.messages().to_vec()
    }

    /// The lead id returned by the backend, once the create call resolves.
    pub async fn lead_id(&self) -> Option<String> {
        self.lead_id.read().await.clone()
    }

    /// Show the opening greeting. Appends immediately, no typing delay.
    pub async fn greet(&mut self) {
        let message = Message::bot(prompts::greeting());
        self.log.lock().await.append(message.clone());
        let _ = self.outbound.send(message);
    }

    /// The visitor pressed the start button.
    pub async fn start(&mut self) {
        self.apply(Event::Start).await;
    }

    /// The visitor submitted free text.
    pub async fn submit(&mut self, text: &str) {
        self.apply(Event::UserInput(text.to_string())).await;
    }

    /// Wait for all in-flight bot messages and persistence calls to finish.
    /// Used by tests and by the CLI shell between prompts.
    pub async fn settle(&mut self) {
        while self.tasks.join_next().await.is_some() {}
    }

    async fn apply(&mut self, event: Event) {
        for effect in self.engine.handle(event) {
            self.execute(effect).await;
        }
    }

    async fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::AppendUser { text } => {
                let message = Message::user(text);
                self.log.lock().await.append(message.clone());
                let _ = self.outbound.send(message);
            }
            Effect::ScheduleBot { delay, text } => {
                let log = Arc::clone(&self.log);
                let outbound = self.outbound.clone();
                self.tasks.spawn(async move {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    let message = Message::bot(text);
                    log.lock().await.append(message.clone());
                    let _ = outbound.send(message);
                });
            }
            Effect::CreateLead { draft } => {
                let store = Arc::clone(&self.store);
                let lead_id = Arc::clone(&self.lead_id);
                let conversation_id = self.conversation_id;
                self.tasks.spawn(async move {
                    let payload = LeadPayload::create(&draft);
                    match store.create_or_update(&payload).await {
                        Ok(Some(id)) => {
                            tracing::debug!(%conversation_id, lead_id = %id, "lead created");
                            *lead_id.write().await = Some(id);
                        }
                        Ok(None) => {
                            tracing::warn!(
                                %conversation_id,
                                "lead saved but no id returned; question log updates will be skipped"
                            );
                        }
                        Err(e) => {
                            // Swallowed: the conversation must not block on
                            // persistence failures.
                            tracing::warn!(%conversation_id, error = %e, "failed to save lead");
                        }
                    }
                });
            }
            Effect::UpdateLead { draft, questions } => {
                let store = Arc::clone(&self.store);
                let lead_id = Arc::clone(&self.lead_id);
                let conversation_id = self.conversation_id;
                self.tasks.spawn(async move {
                    let id = lead_id.read().await.clone();
                    let Some(id) = id else {
                        // The create call never produced an id; skip quietly.
                        tracing::debug!(%conversation_id, "no lead id; skipping question log update");
                        return;
                    };
                    let payload = LeadPayload::update(&id, &draft, &questions);
                    if let Err(e) = store.create_or_update(&payload).await {
                        tracing::warn!(%conversation_id, error = %e, "failed to update question log");
                    }
                });
            }
        }
    }
}
