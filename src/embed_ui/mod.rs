// src/embed_ui/mod.rs - Embed rendering for the server list

pub mod document;
pub mod formatting;
pub mod layout;

pub use document::{LayoutBlock, RenderOutcome, RenderedDocument};
pub use formatting::{format_player_line, team_label};
pub use layout::{LayoutLimits, build_block, pack_blocks, render_document};
