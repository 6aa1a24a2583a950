//! Conversation session state.
//!
//! A [`SessionContext`] owns at most one [`ConversationState`]: the chat log
//! plus the two identifiers that scope it. The remote agent only ever sees
//! the session id; the conversation id is local bookkeeping.

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::types::Message;

/// Number of session-id characters shown in the session summary.
const SHORT_ID_LEN: usize = 8;

/// The state of one conversation. Replaced as a whole on reset.
#[derive(Debug, Clone)]
pub struct ConversationState {
    conversation_id: String,
    session_id: String,
    messages: Vec<Message>,
    started_at: DateTime<Local>,
}

impl ConversationState {
    /// Start a fresh conversation with newly generated identifiers.
    pub fn new() -> Self {
        Self {
            conversation_id: Uuid::new_v4().to_string(),
            session_id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
            started_at: Local::now(),
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    /// Token sent with every agent call of this conversation.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Session id cut down for display, e.g. `1b4e28ba...`.
    pub fn short_session_id(&self) -> String {
        let prefix: String = self.session_id.chars().take(SHORT_ID_LEN).collect();
        format!("{prefix}...")
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Append to the log. The log is append-only until reset.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicit session context handed to every turn and reset handler.
#[derive(Debug, Default)]
pub struct SessionContext {
    state: Option<ConversationState>,
}

impl SessionContext {
    /// An uninitialized context. Call [`initialize`](Self::initialize) before use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current conversation, if one has been started.
    pub fn get(&self) -> Option<&ConversationState> {
        self.state.as_ref()
    }

    /// Start a conversation unless one is already running, and return it.
    pub fn initialize(&mut self) -> &mut ConversationState {
        self.state.get_or_insert_with(ConversationState::new)
    }

    /// Drop the log and both identifiers in one step and start over.
    pub fn reset(&mut self) -> &mut ConversationState {
        if let Some(previous) = &self.state {
            tracing::debug!(
                conversation_id = %previous.conversation_id,
                messages = previous.messages.len(),
                "resetting conversation"
            );
        }
        self.state.insert(ConversationState::new())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }
}
