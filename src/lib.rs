//! agentchat — terminal chat client for Amazon Bedrock Agents.
//!
//! Each user turn is sent to a remote agent together with a session id; the
//! streamed reply is assembled into one string and appended to the chat log.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use agentchat::prelude::*;
//! use agentchat::gateway::BedrockAgentRuntime;
//!
//! # async fn example() -> agentchat::error::Result<()> {
//! let config = ChatConfig::from_env();
//! let runtime = BedrockAgentRuntime::from_env(None, None).await?;
//! let gateway = AgentGateway::new(Arc::new(runtime));
//!
//! let mut ctx = SessionContext::new();
//! let reply = handle_turn(&mut ctx, &gateway, &config.agent, "Hello!").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod config;
pub mod error;
pub mod gateway;
pub mod prelude;
pub mod session;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
