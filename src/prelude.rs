//! Convenience re-exports for common use.

pub use crate::chat::{handle_reset, handle_turn};
pub use crate::config::ChatConfig;
pub use crate::error::{ChatError, GatewayError, Result};
pub use crate::gateway::{AgentGateway, AgentRuntime, FragmentStream, InvokeRequest};
pub use crate::session::{ConversationState, SessionContext};
pub use crate::types::{AgentReference, Message, Role};
