//! Agent gateway: one user input in, one assembled reply out.
//!
//! The transport sits behind [`AgentRuntime`], which hands back the reply as
//! a stream of byte fragments. [`AgentGateway::send`] checks preconditions,
//! drives one invocation and folds the fragments into a single string.

pub mod bedrock;

pub use bedrock::BedrockAgentRuntime;

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use bon::Builder;
use futures::stream::BoxStream;
use futures::StreamExt;

use crate::error::GatewayError;
use crate::types::AgentReference;

/// Reply fragments in arrival order. Finite and not restartable.
pub type FragmentStream = BoxStream<'static, Result<Vec<u8>, GatewayError>>;

/// One invocation of a remote agent.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct InvokeRequest {
    #[builder(into)]
    pub agent_id: String,
    #[builder(into)]
    pub agent_alias_id: String,
    #[builder(into)]
    pub session_id: String,
    #[builder(into)]
    pub input_text: String,
}

/// Transport that can invoke a remote agent.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    /// Runtime name used in logs (e.g. "bedrock").
    fn runtime_name(&self) -> &str;

    /// Issue one call and return its reply fragments.
    async fn invoke(&self, request: &InvokeRequest) -> Result<FragmentStream, GatewayError>;
}

/// Adapter between the chat loop and an [`AgentRuntime`].
///
/// Holds either a ready runtime or the error that prevented building one, so
/// a missing client surfaces as a turn error rather than a startup failure.
#[derive(Clone)]
pub struct AgentGateway {
    runtime: Result<Arc<dyn AgentRuntime>, GatewayError>,
}

impl std::fmt::Debug for AgentGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let runtime = match &self.runtime {
            Ok(runtime) => runtime.runtime_name().to_string(),
            Err(err) => format!("unavailable: {err}"),
        };
        f.debug_struct("AgentGateway")
            .field("runtime", &runtime)
            .finish()
    }
}

impl AgentGateway {
    pub fn new(runtime: Arc<dyn AgentRuntime>) -> Self {
        Self {
            runtime: Ok(runtime),
        }
    }

    /// A gateway whose client failed to initialize. Every `send` reports `err`.
    pub fn unavailable(err: GatewayError) -> Self {
        Self { runtime: Err(err) }
    }

    pub fn is_available(&self) -> bool {
        self.runtime.is_ok()
    }

    /// Send one user input to `agent` within `session_id` and return the full reply.
    ///
    /// Fails with [`GatewayError::Configuration`] before any I/O if the agent
    /// reference is incomplete or there is no client. A failure mid-stream
    /// discards whatever text had arrived.
    pub async fn send(
        &self,
        user_input: &str,
        agent: &AgentReference,
        session_id: &str,
    ) -> Result<String, GatewayError> {
        agent.validate()?;
        let runtime = self.runtime.as_ref().map_err(|err| err.clone())?;

        let request = InvokeRequest::builder()
            .agent_id(agent.agent_id.trim())
            .agent_alias_id(agent.agent_alias_id.trim())
            .session_id(session_id)
            .input_text(user_input)
            .build();

        let started = Instant::now();
        tracing::debug!(
            runtime = runtime.runtime_name(),
            agent = %agent,
            session_id,
            input_len = user_input.len(),
            "invoking agent"
        );

        let fragments = runtime.invoke(&request).await?;
        let text = collect_fragments(fragments).await?;

        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            reply_len = text.len(),
            "agent reply assembled"
        );
        Ok(text)
    }
}

/// Decode each fragment as UTF-8 and concatenate them in arrival order.
///
/// Fragments are decoded individually, so a fragment that is not valid UTF-8
/// on its own fails the whole reply.
pub async fn collect_fragments(mut fragments: FragmentStream) -> Result<String, GatewayError> {
    let mut text = String::new();
    let mut count = 0usize;

    while let Some(fragment) = fragments.next().await {
        let bytes = fragment?;
        let chunk = String::from_utf8(bytes).map_err(|e| {
            GatewayError::gateway(format!("fragment {count} is not valid UTF-8: {e}"))
        })?;
        text.push_str(&chunk);
        count += 1;
    }

    tracing::trace!(fragments = count, "fragment stream drained");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn fragments(parts: Vec<Result<Vec<u8>, GatewayError>>) -> FragmentStream {
        stream::iter(parts).boxed()
    }

    #[tokio::test]
    async fn concatenates_fragments_in_order() {
        let text = collect_fragments(fragments(vec![
            Ok(b"Hel".to_vec()),
            Ok(b"lo ".to_vec()),
            Ok(b"world".to_vec()),
        ]))
        .await
        .unwrap();
        assert_eq!(text, "Hello world");
    }

    #[tokio::test]
    async fn empty_stream_yields_empty_reply() {
        let text = collect_fragments(fragments(vec![])).await.unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn invalid_utf8_fails_without_partial_text() {
        let err = collect_fragments(fragments(vec![
            Ok(b"partial ".to_vec()),
            Ok(vec![0xff, 0xfe]),
        ]))
        .await
        .unwrap_err();
        assert!(matches!(err, GatewayError::Gateway(_)));
        assert!(err.to_string().contains("fragment 1"));
    }

    #[tokio::test]
    async fn transport_error_mid_stream_is_propagated() {
        let err = collect_fragments(fragments(vec![
            Ok(b"Hel".to_vec()),
            Err(GatewayError::gateway("stream closed")),
            Ok(b"lo".to_vec()),
        ]))
        .await
        .unwrap_err();
        assert_eq!(err, GatewayError::gateway("stream closed"));
    }

    #[tokio::test]
    async fn unavailable_gateway_reports_reason() {
        let gateway =
            AgentGateway::unavailable(GatewayError::client_unavailable("no region configured"));
        let err = gateway
            .send("hi", &AgentReference::new("A", "B"), "session")
            .await
            .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("no region configured"));
    }

    #[tokio::test]
    async fn agent_fields_are_checked_before_client() {
        let gateway =
            AgentGateway::unavailable(GatewayError::client_unavailable("no region configured"));
        let err = gateway
            .send("hi", &AgentReference::new("", "B"), "session")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("agent id"));
        assert!(!err.to_string().contains("no region"));
    }

    #[test]
    fn request_builder_accepts_str() {
        let request = InvokeRequest::builder()
            .agent_id("A")
            .agent_alias_id("B")
            .session_id("S")
            .input_text("hello")
            .build();
        assert_eq!(request.agent_id, "A");
        assert_eq!(request.input_text, "hello");
    }
}
