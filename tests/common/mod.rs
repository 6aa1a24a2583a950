//! Shared test helpers and mock runtime.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use agentchat::error::GatewayError;
use agentchat::gateway::{AgentGateway, AgentRuntime, FragmentStream, InvokeRequest};

/// Scripted outcome of one invocation.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Stream these fragments, then end.
    Fragments(Vec<Vec<u8>>),
    /// Fail the call itself.
    CallFails(String),
    /// Stream these fragments, then fail.
    StreamFails(Vec<Vec<u8>>, String),
}

impl Reply {
    pub fn text(parts: &[&str]) -> Self {
        Self::Fragments(parts.iter().map(|p| p.as_bytes().to_vec()).collect())
    }
}

/// A mock runtime that returns queued replies and records every request.
#[derive(Default)]
pub struct MockRuntime {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<InvokeRequest>>,
}

impl MockRuntime {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn queue(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<InvokeRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn gateway(self: &Arc<Self>) -> AgentGateway {
        AgentGateway::new(self.clone())
    }
}

#[async_trait]
impl AgentRuntime for MockRuntime {
    fn runtime_name(&self) -> &str {
        "mock"
    }

    async fn invoke(&self, request: &InvokeRequest) -> Result<FragmentStream, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Reply::text(&["Mock response"]));

        match reply {
            Reply::Fragments(parts) => Ok(stream::iter(parts.into_iter().map(Ok)).boxed()),
            Reply::CallFails(message) => Err(GatewayError::gateway(message)),
            Reply::StreamFails(parts, message) => {
                let items = parts
                    .into_iter()
                    .map(Ok)
                    .chain(std::iter::once(Err(GatewayError::gateway(message))));
                Ok(stream::iter(items).boxed())
            }
        }
    }
}
