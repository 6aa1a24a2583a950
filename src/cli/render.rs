//! Terminal rendering of the chat log and session summary.

use std::io::{self, Write};

use colored::Colorize;

use super::command::COMMANDS;
use crate::session::ConversationState;
use crate::types::{AgentReference, Message, Role};

const THINKING: &str = "Thinking...";

pub fn banner() {
    println!("{}", "=== Bedrock Agent Chatbot ===".bright_magenta().bold());
    println!(
        "{}",
        "Chat with your Amazon Bedrock Agent. Type /help for commands, /quit to exit."
            .bright_black()
    );
    println!();
}

pub fn message(message: &Message) {
    match message.role {
        Role::User => println!("{}", format!("> {}", message.content).green()),
        Role::Assistant if message.is_error() => println!("{}", message.content.red()),
        Role::Assistant => {
            for line in message.content.lines() {
                println!("{}", line.bright_blue());
            }
        }
    }
}

pub fn history(state: &ConversationState) {
    if state.messages().is_empty() {
        println!("{}", "(no messages yet)".bright_black());
        return;
    }
    for entry in state.messages() {
        let stamp = entry.timestamp.with_timezone(&chrono::Local).format("%H:%M");
        println!("{}", format!("[{stamp}] {}", entry.role).bright_magenta());
        message(entry);
    }
}

/// Show the placeholder while a turn is in flight.
pub fn thinking() {
    print!("{}", THINKING.bright_black());
    let _ = io::stdout().flush();
}

/// Erase the placeholder written by [`thinking`].
pub fn clear_thinking() {
    print!("\r{}\r", " ".repeat(THINKING.len()));
    let _ = io::stdout().flush();
}

pub fn session(state: &ConversationState, agent: &AgentReference) {
    println!("{}", "Session Info".bright_magenta().bold());
    println!("  Session ID: {}", state.short_session_id());
    println!("  Started:    {}", state.started_at().format("%Y-%m-%d %H:%M"));
    println!("  Messages:   {}", state.messages().len());
    println!("  Agent:      {agent}");
}

pub fn help() {
    for (name, description) in COMMANDS {
        println!("  {:<10} {}", name.bright_cyan(), description);
    }
    println!(
        "{}",
        "AWS credentials are taken from the environment, shared config files, or an instance role."
            .bright_black()
    );
}

pub fn notice(text: &str) {
    println!("{}", text.bright_black());
}

pub fn warning(text: &str) {
    println!("{}", text.yellow());
}
