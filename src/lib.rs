//! SF Servers Discord bot library
//!
//! Fetches live HL2DM server telemetry, resolves player names through the
//! Steam Web API and packs everything into a single size-bounded Discord
//! embed.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sf_servers_bot::bot::{TerminalResponder, handle_servers_command};
//! use sf_servers_bot::data_fetcher::api::create_http_client_with_timeout;
//! use sf_servers_bot::data_fetcher::{HttpServerSource, SteamNameResolver};
//! use sf_servers_bot::embed_ui::LayoutLimits;
//! use sf_servers_bot::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = create_http_client_with_timeout(10)?;
//!     let source = HttpServerSource::new(client.clone(), "https://example.com/servers");
//!     let resolver = SteamNameResolver::new(client, "https://api.steampowered.com", None);
//!
//!     // Fetch, resolve and print the embed to the terminal
//!     handle_servers_command(&source, &resolver, &TerminalResponder, &LayoutLimits::default())
//!         .await;
//!     Ok(())
//! }
//! ```

pub mod bot;
pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod embed_ui;
pub mod error;
pub mod logging;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use bot::{CommandReply, Responder, handle_servers_command};
pub use config::Config;
pub use data_fetcher::{NameResolver, ServerSource};
pub use embed_ui::{LayoutLimits, RenderOutcome, RenderedDocument, render_document};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
