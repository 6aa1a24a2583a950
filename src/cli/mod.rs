//! CLI entry point for agentchat.

pub mod command;
pub mod errors;
pub mod render;
pub mod repl;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ConfigOverrides;

/// Chat with an Amazon Bedrock Agent from the terminal
#[derive(Parser, Debug)]
#[command(name = "agentchat", version, about = "Chat with an Amazon Bedrock Agent")]
pub struct Cli {
    #[command(flatten)]
    pub agent: AgentArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level CLI commands. Defaults to `chat`.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat session
    Chat,
    /// Send a single prompt and print the reply
    Ask(AskArgs),
}

/// Agent and AWS settings shared by all commands.
#[derive(Args, Debug, Default)]
pub struct AgentArgs {
    /// Bedrock Agent ID (env: BEDROCK_AGENT_ID)
    #[arg(long, global = true)]
    pub agent_id: Option<String>,

    /// Bedrock Agent Alias ID (env: BEDROCK_AGENT_ALIAS_ID)
    #[arg(long, global = true)]
    pub agent_alias_id: Option<String>,

    /// AWS region override
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// AWS shared-config profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Load variables from this file instead of ./.env
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,
}

impl AgentArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            agent_id: self.agent_id.clone(),
            agent_alias_id: self.agent_alias_id.clone(),
            region: self.region.clone(),
            profile: self.profile.clone(),
        }
    }
}

/// Arguments for `agentchat ask`.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// User prompt (positional)
    pub prompt: String,
}

impl Cli {
    /// Take the command to run, `chat` when none was given.
    pub fn take_command(&mut self) -> Commands {
        self.command.take().unwrap_or(Commands::Chat)
    }

    /// Default `tracing` filter directive for the requested verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
