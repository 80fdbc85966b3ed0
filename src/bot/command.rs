// src/bot/command.rs - The `servers` command flow, independent of any transport

use std::future::Future;

use tracing::{error, info, instrument, warn};

use crate::constants::texts::{NO_DATA_REPLY, SEND_FAILED_REPLY, TOO_LARGE_REPLY};
use crate::data_fetcher::{NameResolver, ServerSource, collect_identifiers};
use crate::embed_ui::{LayoutLimits, RenderOutcome, RenderedDocument, render_document};
use crate::error::AppError;

/// Reply channel for one command invocation.
///
/// `acknowledge` is called once before any slow work. After that exactly one
/// of the send methods is expected to succeed.
pub trait Responder {
    fn acknowledge(&self) -> impl Future<Output = Result<(), AppError>> + Send;

    fn send_document(
        &self,
        document: &RenderedDocument,
    ) -> impl Future<Output = Result<(), AppError>> + Send;

    fn send_text(&self, text: &str) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// What the handler decided to reply with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    Document(RenderedDocument),
    Text(String),
    /// The invocation could not be acknowledged, nothing was sent.
    NotAcknowledged,
}

/// Runs the `servers` command: fetch, resolve names, render and reply.
///
/// Errors never escape; each failure maps to a plain text reply or is logged.
#[instrument(skip_all)]
pub async fn handle_servers_command<S, N, R>(
    source: &S,
    resolver: &N,
    responder: &R,
    limits: &LayoutLimits,
) -> CommandReply
where
    S: ServerSource + Sync,
    N: NameResolver + Sync,
    R: Responder + Sync,
{
    if let Err(e) = responder.acknowledge().await {
        error!("Failed to acknowledge command: {e}");
        return CommandReply::NotAcknowledged;
    }

    let snapshots = source.fetch_servers().await;
    if snapshots.is_empty() {
        return reply_text(responder, NO_DATA_REPLY).await;
    }

    let identifiers = collect_identifiers(&snapshots);
    let names = resolver.resolve(&identifiers).await;

    let document = match render_document(&snapshots, &names, limits) {
        RenderOutcome::Document(document) => document,
        RenderOutcome::TooLarge => return reply_text(responder, TOO_LARGE_REPLY).await,
    };

    match responder.send_document(&document).await {
        Ok(()) => {
            info!(
                "Sent server list with {} of {} servers",
                document.blocks.len(),
                document.total_servers
            );
            CommandReply::Document(document)
        }
        Err(e) => {
            error!("Failed to send server list: {e}");
            reply_text(responder, SEND_FAILED_REPLY).await
        }
    }
}

async fn reply_text<R: Responder>(responder: &R, text: &str) -> CommandReply {
    if let Err(e) = responder.send_text(text).await {
        warn!("Failed to send reply '{text}': {e}");
    }
    CommandReply::Text(text.to_string())
}
