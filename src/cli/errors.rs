//! CLI-specific error formatting for user-facing messages.

use crate::error::{ChatError, GatewayError};

/// Map a [`ChatError`] to a user-facing string with actionable guidance.
pub fn format_error_help(err: &ChatError) -> String {
    match err {
        ChatError::Gateway(GatewayError::MissingField(_)) => format!(
            "{err}. Pass --agent-id/--agent-alias-id or set BEDROCK_AGENT_ID/BEDROCK_AGENT_ALIAS_ID"
        ),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_points_at_agent_flags() {
        let err = ChatError::from(GatewayError::missing_field("agent id"));
        let help = format_error_help(&err);
        assert!(help.contains("missing agent id"));
        assert!(help.contains("--agent-id"));
    }

    #[test]
    fn unavailable_client_gets_no_agent_hint() {
        let err = ChatError::from(GatewayError::client_unavailable("no AWS region configured"));
        let help = format_error_help(&err);
        assert!(help.contains("no AWS region configured"));
        assert!(!help.contains("--agent-id"));
        assert!(!help.contains("BEDROCK_AGENT_ID"));
    }

    #[test]
    fn other_errors_fall_through_to_display() {
        let err = ChatError::Readline("terminal closed".into());
        assert_eq!(format_error_help(&err), "Line editor error: terminal closed");
    }
}
