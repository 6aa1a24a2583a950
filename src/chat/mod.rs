//! Turn and reset handlers.
//!
//! These are the only two places that mutate a [`SessionContext`].

use crate::error::GatewayError;
use crate::gateway::AgentGateway;
use crate::session::SessionContext;
use crate::types::{AgentReference, Message};

/// Run one user turn.
///
/// Appends the user message, waits for the agent, then appends exactly one
/// assistant message: the reply, or an `Error:` entry if the turn failed.
/// The returned result mirrors what was logged.
pub async fn handle_turn(
    ctx: &mut SessionContext,
    gateway: &AgentGateway,
    agent: &AgentReference,
    input: &str,
) -> Result<String, GatewayError> {
    let state = ctx.initialize();
    state.push(Message::user(input));

    let result = gateway.send(input, agent, state.session_id()).await;
    match &result {
        Ok(reply) => state.push(Message::assistant(reply.clone())),
        Err(err) => {
            tracing::warn!(error = %err, session_id = state.session_id(), "agent turn failed");
            state.push(Message::error(err));
        }
    }
    result
}

/// Clear the conversation and start a new remote session.
pub fn handle_reset(ctx: &mut SessionContext) {
    let state = ctx.reset();
    tracing::info!(session_id = state.session_id(), "conversation cleared");
}
