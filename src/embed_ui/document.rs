// src/embed_ui/document.rs - Rendered embed document types

use crate::constants::embed_limits::FIELD_NAME_MAX;

/// Counts characters the way the embed limits are defined.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// One embed field: a server (or the notice) and its rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutBlock {
    /// Full server name. Only the emitted field name is cut to the name limit.
    pub header: String,
    pub body: String,
    pub was_truncated: bool,
}

impl LayoutBlock {
    pub fn new(header: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
            was_truncated: false,
        }
    }

    /// Field name as sent to Discord.
    pub fn field_name(&self) -> String {
        truncate_chars(&self.header, FIELD_NAME_MAX)
    }
}

/// A fully packed embed, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub title: String,
    pub description: String,
    /// Included server blocks in fetch order.
    pub blocks: Vec<LayoutBlock>,
    /// Present when at least one server was left out.
    pub notice: Option<LayoutBlock>,
    pub omitted: usize,
    pub total_servers: usize,
    pub footer: String,
}

impl RenderedDocument {
    /// All emitted fields, server blocks first and the notice last.
    pub fn fields(&self) -> impl Iterator<Item = &LayoutBlock> {
        self.blocks.iter().chain(self.notice.iter())
    }

    pub fn field_count(&self) -> usize {
        self.blocks.len() + usize::from(self.notice.is_some())
    }

    /// Embed size as Discord counts it for the total limit check:
    /// title, description and every field name and value.
    pub fn total_len(&self) -> usize {
        char_len(&self.title)
            + char_len(&self.description)
            + self
                .fields()
                .map(|field| char_len(&field.field_name()) + char_len(&field.body))
                .sum::<usize>()
    }
}

/// Result of laying out one command's worth of servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Document(RenderedDocument),
    /// The packed document still exceeds the total embed limit.
    TooLarge,
}
