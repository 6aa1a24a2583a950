//! Slash commands accepted by the interactive chat.

/// Commands offered for completion, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/agent", "Show or set the agent id"),
    ("/alias", "Show or set the agent alias id"),
    ("/reset", "Clear the conversation and start a new session (alias /clear)"),
    ("/session", "Show session info"),
    ("/history", "Print the conversation so far"),
    ("/help", "List commands"),
    ("/quit", "Exit (alias /exit)"),
];

/// One line of REPL input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// Text to send to the agent.
    Message(String),
    /// `/agent` with an optional new id.
    SetAgentId(Option<String>),
    /// `/alias` with an optional new alias id.
    SetAgentAliasId(Option<String>),
    Reset,
    Session,
    History,
    Help,
    Quit,
    /// A slash command nobody recognises.
    Unknown(String),
    /// Blank line.
    Empty,
}

impl ReplInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if !trimmed.starts_with('/') {
            return Self::Message(trimmed.to_string());
        }

        let (name, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (trimmed, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        match name {
            "/agent" => Self::SetAgentId(arg),
            "/alias" => Self::SetAgentAliasId(arg),
            "/reset" | "/clear" => Self::Reset,
            "/session" => Self::Session,
            "/history" => Self::History,
            "/help" | "/?" => Self::Help,
            "/quit" | "/exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}
