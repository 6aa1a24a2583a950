//! Interactive chat loop.
//!
//! One line is read, handled to completion, and only then is the next line
//! read, so at most one agent call is ever in flight.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use super::command::{ReplInput, COMMANDS};
use super::render;
use crate::chat::{handle_reset, handle_turn};
use crate::error::{ChatError, Result};
use crate::gateway::AgentGateway;
use crate::session::SessionContext;
use crate::types::AgentReference;

/// Slash-command completion, hints and highlighting.
#[derive(Clone, Default)]
struct ChatHelper;

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return Ok((0, vec![]));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|(name, _)| name.starts_with(line))
            .map(|(name, _)| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|(name, _)| name.starts_with(line) && name.len() > line.len())
            .map(|(name, _)| name[line.len()..].to_string())
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }
}

impl Validator for ChatHelper {}

/// What the read loop does after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle one parsed line: run a turn, edit the agent reference, or act on
/// the session. Agent edits apply from the next turn on.
pub async fn dispatch(
    ctx: &mut SessionContext,
    agent: &mut AgentReference,
    gateway: &AgentGateway,
    input: ReplInput,
) -> Flow {
    match input {
        ReplInput::Empty => {}
        ReplInput::Quit => return Flow::Quit,
        ReplInput::Message(text) => {
            render::thinking();
            let _ = handle_turn(ctx, gateway, agent, &text).await;
            render::clear_thinking();
            if let Some(reply) = ctx.get().and_then(|state| state.last_message()) {
                render::message(reply);
            }
        }
        ReplInput::SetAgentId(Some(id)) => {
            agent.agent_id = id;
            render::notice(&format!("Agent: {agent}"));
        }
        ReplInput::SetAgentAliasId(Some(alias)) => {
            agent.agent_alias_id = alias;
            render::notice(&format!("Agent: {agent}"));
        }
        ReplInput::SetAgentId(None) | ReplInput::SetAgentAliasId(None) => {
            render::notice(&format!("Agent: {agent}"));
        }
        ReplInput::Reset => {
            handle_reset(ctx);
            render::notice("Conversation cleared.");
        }
        ReplInput::Session => render::session(ctx.initialize(), agent),
        ReplInput::History => render::history(ctx.initialize()),
        ReplInput::Help => render::help(),
        ReplInput::Unknown(name) => {
            render::warning(&format!("Unknown command {name}. Type /help for commands."));
        }
    }
    Flow::Continue
}

/// Run the interactive chat until `/quit` or end of input.
pub async fn run(gateway: AgentGateway, mut agent: AgentReference) -> Result<()> {
    let mut editor: Editor<ChatHelper, DefaultHistory> =
        Editor::new().map_err(|e| ChatError::Readline(e.to_string()))?;
    editor.set_helper(Some(ChatHelper));

    let mut ctx = SessionContext::new();
    ctx.initialize();

    render::banner();
    if let Err(err) = agent.validate() {
        render::warning(&format!("{err}. Use /agent and /alias to fill it in."));
    }
    if !gateway.is_available() {
        render::warning("Agent client is not available; turns will report the cause.");
    }

    loop {
        let line = match editor.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                render::notice("Interrupted. Type /quit to exit.");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(ChatError::Readline(err.to_string())),
        };

        let input = ReplInput::parse(&line);
        if input != ReplInput::Empty {
            let _ = editor.add_history_entry(line.as_str());
        }

        if dispatch(&mut ctx, &mut agent, &gateway, input).await == Flow::Quit {
            break;
        }
    }

    render::notice("Goodbye!");
    Ok(())
}

/// Run a single turn and print the reply. A failed turn is returned as an error.
pub async fn ask(gateway: AgentGateway, agent: AgentReference, prompt: &str) -> Result<()> {
    let mut ctx = SessionContext::new();
    let reply = handle_turn(&mut ctx, &gateway, &agent, prompt).await?;
    println!("{reply}");
    Ok(())
}
