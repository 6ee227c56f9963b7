use std::io::Write;
use std::sync::Arc;

use tokio::io::AsyncBufReadExt;

use aegis::assess::engine::QuestionnaireEngine;
use aegis::assess::log::JsonlProfileLog;
use aegis::assess::question::default_questions;
use aegis::config::Config;
use aegis::dialogue::reply::DisplayHint;
use aegis::dialogue::router::DialogueRouter;
use aegis::dialogue::session::SessionState;
use aegis::intent::classifier::IntentClassifier;
use aegis::recommend::advisor::Advisor;
use aegis::recommend::catalog::CATALOG;
use aegis::retrieval::answerer::ProductAnswerer;
use aegis::retrieval::index::{KeywordIndex, Passage};
use aegis::services::llm::{LlmClient, TextGenerator};

const GREETING: &str = "Hello! I'm your Life Insurance AI Agent. How can I help you today?";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging/tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    tracing::info!(url = %config.llm_base_url, "dialogue core booting");

    let generator: Arc<dyn TextGenerator> =
        Arc::new(LlmClient::new(&config.llm_base_url, config.request_timeout));

    // The passage index is seeded from the product catalog; a production
    // deployment would ingest the plan documents upstream instead.
    let passages = CATALOG
        .iter()
        .map(|entry| Passage {
            source: entry.name.to_string(),
            text: entry.render(),
        })
        .collect();
    let index = Arc::new(KeywordIndex::new(passages));

    let router = DialogueRouter::new(
        IntentClassifier::new(generator.clone()),
        QuestionnaireEngine::new(
            default_questions(),
            Advisor::new(generator.clone()),
            Arc::new(JsonlProfileLog::new(&config.profile_log)),
        ),
        ProductAnswerer::new(index, generator.clone(), config.retrieval_top_k),
        generator,
    );

    let mut session = SessionState::new();
    println!("{}", GREETING);

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        let reply = router.route(&mut session, input).await;

        for hint in &reply.hints {
            if let DisplayHint::Progress { current, total } = hint {
                println!("[question {}/{}]", current, total);
            }
        }
        println!("{}", reply.text);
        if reply.hints.contains(&DisplayHint::ShowSchedulingForm) {
            println!("(We can schedule a consultation with an advisor whenever you are ready.)");
        }
    }

    tracing::info!(session = %session.id, "session ended");
    Ok(())
}
