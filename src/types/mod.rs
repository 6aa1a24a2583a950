//! Core types for agentchat.

pub mod agent;
pub mod message;

pub use agent::*;
pub use message::*;
