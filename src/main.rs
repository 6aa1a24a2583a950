//! agentchat binary entry point.

use std::sync::Arc;

use agentchat::cli::{errors, repl, Cli, Commands};
use agentchat::config::ChatConfig;
use agentchat::error::Result;
use agentchat::gateway::{AgentGateway, BedrockAgentRuntime};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut cli = Cli::parse();
    init_tracing(cli.log_directive());

    if let Err(e) = run(&mut cli).await {
        eprintln!("Error: {}", errors::format_error_help(&e));
        std::process::exit(1);
    }
}

async fn run(cli: &mut Cli) -> Result<()> {
    let config = match &cli.agent.env_file {
        Some(path) => ChatConfig::from_env_file(path)?,
        None => ChatConfig::from_env(),
    }
    .with_overrides(cli.agent.overrides());

    let gateway = build_gateway(&config).await;

    match cli.take_command() {
        Commands::Chat => repl::run(gateway, config.agent).await,
        Commands::Ask(args) => repl::ask(gateway, config.agent, &args.prompt).await,
    }
}

/// Build the Bedrock-backed gateway. Client failures are deferred to the first turn.
async fn build_gateway(config: &ChatConfig) -> AgentGateway {
    let runtime =
        BedrockAgentRuntime::from_env(config.region.as_deref(), config.profile.as_deref()).await;
    match runtime {
        Ok(runtime) => AgentGateway::new(Arc::new(runtime)),
        Err(err) => {
            tracing::warn!(error = %err, "bedrock agent client unavailable");
            AgentGateway::unavailable(err)
        }
    }
}

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
