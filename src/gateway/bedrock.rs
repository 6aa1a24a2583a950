//! Amazon Bedrock Agents runtime (`InvokeAgent`).

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_bedrockagentruntime::config::Region;
use aws_sdk_bedrockagentruntime::error::DisplayErrorContext;
use aws_sdk_bedrockagentruntime::types::ResponseStream;
use aws_sdk_bedrockagentruntime::Client;
use futures::{Stream, StreamExt};

use super::{AgentRuntime, FragmentStream, InvokeRequest};
use crate::error::GatewayError;

/// [`AgentRuntime`] backed by the Bedrock Agent Runtime API.
///
/// Credentials and region come from the ambient AWS environment; the
/// optional overrides only steer the default provider chain.
#[derive(Debug, Clone)]
pub struct BedrockAgentRuntime {
    client: Client,
}

impl BedrockAgentRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Resolve AWS configuration from the environment and build a client.
    ///
    /// Credentials are resolved once here, so a missing region or missing
    /// credentials fail now instead of on the first turn.
    pub async fn from_env(
        region: Option<&str>,
        profile: Option<&str>,
    ) -> Result<Self, GatewayError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;

        let Some(region) = sdk_config.region() else {
            return Err(GatewayError::client_unavailable("no AWS region configured"));
        };
        let Some(provider) = sdk_config.credentials_provider() else {
            return Err(GatewayError::client_unavailable(
                "no AWS credentials provider available",
            ));
        };
        if let Err(e) = provider.provide_credentials().await {
            return Err(GatewayError::client_unavailable(format!(
                "no AWS credentials found: {}",
                DisplayErrorContext(&e)
            )));
        }

        tracing::info!(region = %region, "bedrock agent client ready");
        Ok(Self::new(Client::new(&sdk_config)))
    }
}

#[async_trait]
impl AgentRuntime for BedrockAgentRuntime {
    fn runtime_name(&self) -> &str {
        "bedrock"
    }

    async fn invoke(&self, request: &InvokeRequest) -> Result<FragmentStream, GatewayError> {
        let output = self
            .client
            .invoke_agent()
            .agent_id(&request.agent_id)
            .agent_alias_id(&request.agent_alias_id)
            .session_id(&request.session_id)
            .input_text(&request.input_text)
            .send()
            .await
            .map_err(|e| GatewayError::gateway(DisplayErrorContext(&e).to_string()))?;

        let mut completion = output.completion;
        let events = async_stream::stream! {
            loop {
                match completion.recv().await {
                    Ok(Some(event)) => yield Ok(event),
                    Ok(None) => break,
                    Err(e) => {
                        yield Err(GatewayError::gateway(DisplayErrorContext(&e).to_string()));
                        break;
                    }
                }
            }
        };

        Ok(completion_fragments(events))
    }
}

/// Keep the byte payloads of chunk events and drop every other event kind.
///
/// The first error ends the stream.
fn completion_fragments<S>(events: S) -> FragmentStream
where
    S: Stream<Item = Result<ResponseStream, GatewayError>> + Send + 'static,
{
    let stream = async_stream::stream! {
        futures::pin_mut!(events);
        while let Some(event) = events.next().await {
            match event {
                Ok(ResponseStream::Chunk(part)) => {
                    if let Some(blob) = part.bytes {
                        yield Ok(blob.into_inner());
                    }
                }
                Ok(_) => {
                    tracing::debug!("skipping non-chunk completion event");
                }
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
    };
    Box::pin(stream)
}
