//! Headless mode: one generation driven through the engine, no terminal UI

use brandcraft_app::{Engine, FormState, Message, Settings, View};
use brandcraft_core::prelude::*;
use brandcraft_core::{BrandBrief, BrandIdentity};
use brandcraft_genai::IdentityGenerator;

/// How a headless run ended
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessOutcome {
    Generated(BrandIdentity),
    /// Generation failed; carries the underlying error text
    Failed(String),
    /// Idea or industry was empty, nothing was sent
    NotSubmittable,
}

impl HeadlessOutcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            HeadlessOutcome::Generated(_) => 0,
            HeadlessOutcome::Failed(_) => 1,
            HeadlessOutcome::NotSubmittable => 2,
        }
    }
}

/// Submit `brief` once and wait for the result
pub async fn run_headless<G>(settings: Settings, generator: G, brief: &BrandBrief) -> HeadlessOutcome
where
    G: IdentityGenerator + Send + Sync + 'static,
{
    info!("BrandCraft starting in HEADLESS mode");

    let mut engine = Engine::new(settings, generator);
    engine.state.form = FormState::from_brief(brief);
    engine.process_message(Message::Submit);

    if engine.state.pending_ticket().is_none() {
        warn!("Brief is missing an idea or an industry; nothing submitted");
        return HeadlessOutcome::NotSubmittable;
    }

    let outcome = wait_for_outcome(&mut engine).await;
    engine.shutdown().await;
    outcome
}

async fn wait_for_outcome<G>(engine: &mut Engine<G>) -> HeadlessOutcome
where
    G: IdentityGenerator + Send + Sync + 'static,
{
    loop {
        if !engine.process_next().await {
            return HeadlessOutcome::Failed(Error::ChannelClosed.to_string());
        }

        if let View::Result(board) = &engine.state.view {
            return HeadlessOutcome::Generated(board.identity.clone());
        }

        if let Some(alert) = &engine.state.alert {
            let reason = engine
                .state
                .last_failure
                .clone()
                .unwrap_or_else(|| alert.message.clone());
            return HeadlessOutcome::Failed(reason);
        }

        if engine.should_quit() {
            return HeadlessOutcome::Failed("interrupted".to_string());
        }
    }
}

/// Print the outcome: JSON on stdout for success, a message on stderr otherwise
pub fn report(outcome: &HeadlessOutcome) -> Result<()> {
    match outcome {
        HeadlessOutcome::Generated(identity) => {
            println!("{}", serde_json::to_string_pretty(identity)?);
        }
        HeadlessOutcome::Failed(reason) => {
            eprintln!("{}", brandcraft_app::state::GENERATION_FAILED_MESSAGE);
            eprintln!("  cause: {}", reason);
        }
        HeadlessOutcome::NotSubmittable => {
            eprintln!("Both --idea and --industry are required.");
        }
    }
    Ok(())
}
