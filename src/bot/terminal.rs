// src/bot/terminal.rs - Terminal preview of the command reply (--once mode)

use std::io::{Write, stdout};

use chrono::Local;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use super::command::Responder;
use crate::embed_ui::RenderedDocument;
use crate::error::AppError;

const ACCENT: Color = Color::Red;
const HEADER: Color = Color::Cyan;
const DIM: Color = Color::DarkGrey;

/// Writes a document as colored text, roughly the way the embed reads.
pub fn write_document<W: Write>(
    out: &mut W,
    document: &RenderedDocument,
    timestamp: &str,
) -> std::io::Result<()> {
    queue!(
        out,
        SetForegroundColor(ACCENT),
        SetAttribute(Attribute::Bold),
        Print(&document.title),
        SetAttribute(Attribute::Reset),
        Print("\n"),
        Print(&document.description),
        Print("\n\n"),
        ResetColor
    )?;

    for field in document.fields() {
        queue!(
            out,
            SetForegroundColor(HEADER),
            SetAttribute(Attribute::Bold),
            Print(field.field_name()),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\n"),
            Print(&field.body),
            Print("\n\n")
        )?;
    }

    queue!(
        out,
        SetForegroundColor(DIM),
        Print(format!("{} • {timestamp}", document.footer)),
        ResetColor,
        Print("\n")
    )?;
    out.flush()
}

/// Prints replies to stdout instead of sending them to Discord.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalResponder;

impl Responder for TerminalResponder {
    async fn acknowledge(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn send_document(&self, document: &RenderedDocument) -> Result<(), AppError> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        write_document(&mut stdout().lock(), document, &timestamp)?;
        Ok(())
    }

    async fn send_text(&self, text: &str) -> Result<(), AppError> {
        let mut out = stdout().lock();
        writeln!(out, "{text}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed_ui::LayoutBlock;

    #[test]
    fn test_write_document_contains_all_parts() {
        let document = RenderedDocument {
            title: "SF Servers".to_string(),
            description: "Live stats for SF HL2DM servers.".to_string(),
            blocks: vec![LayoutBlock::new("SF #1", "Players: 0 • version `1.0`")],
            notice: Some(LayoutBlock::new("Notice", "Truncated: 2 server(s) omitted.")),
            omitted: 2,
            total_servers: 3,
            footer: "Server list • 3 total (showing 2).".to_string(),
        };

        let mut out = Vec::new();
        write_document(&mut out, &document, "2026-01-01 12:00:00").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("SF Servers"));
        assert!(text.contains("SF #1"));
        assert!(text.contains("Players: 0 • version `1.0`"));
        assert!(text.contains("Truncated: 2 server(s) omitted."));
        assert!(text.contains("Server list • 3 total (showing 2). • 2026-01-01 12:00:00"));
        assert!(text.find("SF #1").unwrap() < text.find("Notice").unwrap());
    }
}
