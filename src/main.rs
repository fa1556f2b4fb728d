use std::sync::Arc;

use lead_chat::config::{ChatConfig, SiteSettings};
use lead_chat::conversation::{Engine, Message, Sender};
use lead_chat::leads::HttpLeadClient;
use lead_chat::runtime::ConversationRuntime;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let api_base = std::env::var("LEAD_API_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:1337".to_string());
    let settings = SiteSettings::from_env();

    eprintln!("💬 lead-chat v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Lead API: {}/api/chat-leads", api_base);
    eprintln!("   Site phone: {}", settings.phone);
    eprintln!("   Press Enter to start. /quit to exit.\n");

    let store = Arc::new(HttpLeadClient::new(api_base));
    let engine = Engine::new(settings, ChatConfig::default());

    // Printer task renders appended messages; user messages are already
    // visible as typed input, so only bot messages are echoed.
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Message>();
    let printer = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            if matches!(message.sender, Sender::Bot) {
                println!("🤖 {}\n", message.text);
            }
        }
    });

    let mut runtime = ConversationRuntime::new(engine, store, tx);
    runtime.greet().await;

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    // The first line stands in for the widget's start button.
    if lines.next_line().await?.is_some() {
        runtime.start().await;
        runtime.settle().await;
    }

    eprint!("[{}] > ", runtime.state().placeholder());
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == "/quit" {
            break;
        }
        if !line.is_empty() {
            runtime.submit(line).await;
            // Let the scheduled reply land before re-prompting.
            runtime.settle().await;
        }
        eprint!("[{}] > ", runtime.state().placeholder());
    }

    runtime.settle().await;
    drop(runtime);
    let _ = printer.await;
    Ok(())
}
