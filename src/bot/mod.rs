// src/bot/mod.rs - Command handling and its transports
//
// - command: transport-independent `servers` command flow
// - discord: serenity gateway client and follow-up replies
// - terminal: stdout preview used by --once

pub mod command;
pub mod discord;
pub mod terminal;

pub use command::{CommandReply, Responder, handle_servers_command};
pub use discord::{DiscordResponder, Handler, build_embed, run};
pub use terminal::{TerminalResponder, write_document};
