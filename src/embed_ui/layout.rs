// src/embed_ui/layout.rs - Size-bounded packing of server blocks into one embed

use tracing::{debug, warn};

use super::document::{LayoutBlock, RenderOutcome, RenderedDocument, char_len, truncate_chars};
use super::formatting::format_player_line;
use crate::constants::embed_limits::{
    EMBED_TOTAL_MAX, FIELD_PADDING, FIELD_VALUE_MAX, TRUNCATION_MARGIN,
};
use crate::constants::texts::{EMBED_DESCRIPTION, EMBED_TITLE, NOTICE_HEADER, TRUNCATION_MARKER};
use crate::data_fetcher::models::{NameMap, ServerSnapshot};
use crate::data_fetcher::player_names::select_name;

/// Size budgets used while laying out the embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutLimits {
    /// Maximum characters in one block body.
    pub block_cap: usize,
    /// Characters cut from a too-long body before the marker is appended.
    pub truncation_margin: usize,
    /// Maximum characters in the whole embed.
    pub total_cap: usize,
    /// Extra characters assumed per block during packing.
    pub padding: usize,
}

impl Default for LayoutLimits {
    fn default() -> Self {
        Self {
            block_cap: FIELD_VALUE_MAX,
            truncation_margin: TRUNCATION_MARGIN,
            total_cap: EMBED_TOTAL_MAX,
            padding: FIELD_PADDING,
        }
    }
}

/// First line of every server block.
pub fn summary_line(snapshot: &ServerSnapshot) -> String {
    format!(
        "Players: {} • version `{}`",
        snapshot.players.len(),
        snapshot.version
    )
}

/// Builds the block for one server, truncating the body to the block cap.
pub fn build_block(snapshot: &ServerSnapshot, names: &NameMap, limits: &LayoutLimits) -> LayoutBlock {
    let mut lines = Vec::with_capacity(snapshot.players.len() + 1);
    lines.push(summary_line(snapshot));
    lines.extend(
        snapshot
            .players
            .iter()
            .map(|player| format_player_line(player, &select_name(player, names))),
    );
    let body = lines.join("\n");

    if char_len(&body) <= limits.block_cap {
        return LayoutBlock::new(snapshot.name.clone(), body);
    }

    let kept = limits.block_cap.saturating_sub(limits.truncation_margin);
    debug!(
        "Truncating block for '{}' from {} to {} characters",
        snapshot.name,
        char_len(&body),
        kept
    );
    LayoutBlock {
        header: snapshot.name.clone(),
        body: format!("{}{TRUNCATION_MARKER}", truncate_chars(&body, kept)),
        was_truncated: true,
    }
}

/// Greedily packs blocks in order, skipping any block that would push the
/// running total over the cap. Later, smaller blocks may still fit.
///
/// Returns the included blocks and the number of omitted ones.
pub fn pack_blocks(
    blocks: Vec<LayoutBlock>,
    base_len: usize,
    limits: &LayoutLimits,
) -> (Vec<LayoutBlock>, usize) {
    let (included, omitted, _) = blocks.into_iter().fold(
        (Vec::new(), 0usize, base_len),
        |(mut included, omitted, total), block| {
            let block_len = char_len(&block.header) + char_len(&block.body);
            if total + block_len + limits.padding > limits.total_cap {
                return (included, omitted + 1, total);
            }
            included.push(block);
            (included, omitted, total + block_len)
        },
    );
    (included, omitted)
}

fn notice_block(omitted: usize) -> LayoutBlock {
    LayoutBlock::new(
        NOTICE_HEADER,
        format!("Truncated: {omitted} server(s) omitted."),
    )
}

fn footer_text(total_servers: usize, field_count: usize) -> String {
    format!("Server list • {total_servers} total (showing {field_count}).")
}

/// Lays out all snapshots into one embed document.
///
/// The output depends only on the inputs, so repeated calls produce
/// identical documents.
pub fn render_document(
    snapshots: &[ServerSnapshot],
    names: &NameMap,
    limits: &LayoutLimits,
) -> RenderOutcome {
    let title = EMBED_TITLE.to_string();
    let description = EMBED_DESCRIPTION.to_string();

    let blocks = snapshots
        .iter()
        .map(|snapshot| build_block(snapshot, names, limits))
        .collect();
    let base_len = char_len(&title) + char_len(&description);
    let (blocks, omitted) = pack_blocks(blocks, base_len, limits);

    let notice = (omitted > 0).then(|| notice_block(omitted));
    let field_count = blocks.len() + usize::from(notice.is_some());

    let document = RenderedDocument {
        title,
        description,
        blocks,
        notice,
        omitted,
        total_servers: snapshots.len(),
        footer: footer_text(snapshots.len(), field_count),
    };

    let total = document.total_len();
    if total > limits.total_cap {
        warn!(
            "Packed embed is {total} characters, above the {} limit",
            limits.total_cap
        );
        return RenderOutcome::TooLarge;
    }

    debug!(
        "Rendered {} of {} servers ({} omitted, {total} characters)",
        document.blocks.len(),
        document.total_servers,
        omitted
    );
    RenderOutcome::Document(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{PlayerRecord, Scalar};

    fn snapshot(name: &str, version: &str, players: Vec<PlayerRecord>) -> ServerSnapshot {
        ServerSnapshot {
            name: name.to_string(),
            version: version.to_string(),
            players,
        }
    }

    fn named_player(name: &str) -> PlayerRecord {
        PlayerRecord {
            name: Some(Scalar::from(name)),
            kills: Some(Scalar::Int(1)),
            ..Default::default()
        }
    }

    fn expect_document(outcome: RenderOutcome) -> RenderedDocument {
        match outcome {
            RenderOutcome::Document(document) => document,
            RenderOutcome::TooLarge => panic!("expected a document"),
        }
    }

    #[test]
    fn test_empty_server_body_is_summary_only() {
        let block = build_block(
            &snapshot("SF #1", "1.2", vec![]),
            &NameMap::new(),
            &LayoutLimits::default(),
        );
        assert_eq!(block.header, "SF #1");
        assert_eq!(block.body, "Players: 0 • version `1.2`");
        assert!(!block.was_truncated);
    }

    #[test]
    fn test_block_lists_players_in_order() {
        let block = build_block(
            &snapshot("SF #1", "1.2", vec![named_player("Alyx"), named_player("Eli")]),
            &NameMap::new(),
            &LayoutLimits::default(),
        );
        let lines: Vec<_> = block.body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Players: 2 • version `1.2`");
        assert!(lines[1].starts_with("**Alyx**"));
        assert!(lines[2].starts_with("**Eli**"));
    }

    #[test]
    fn test_long_body_is_truncated_with_marker() {
        let players = (0..60).map(|i| named_player(&format!("Player{i:02}"))).collect();
        let block = build_block(
            &snapshot("Busy", "1", players),
            &NameMap::new(),
            &LayoutLimits::default(),
        );

        assert!(block.was_truncated);
        assert!(block.body.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            char_len(&block.body),
            FIELD_VALUE_MAX - TRUNCATION_MARGIN + char_len(TRUNCATION_MARKER)
        );
        assert!(char_len(&block.body) <= FIELD_VALUE_MAX);
    }

    #[test]
    fn test_body_exactly_at_cap_is_kept() {
        let limits = LayoutLimits::default();
        let summary_len = char_len(&summary_line(&snapshot("s", "", vec![])));
        let version = "v".repeat(limits.block_cap - summary_len);
        let block = build_block(&snapshot("s", &version, vec![]), &NameMap::new(), &limits);

        assert_eq!(char_len(&block.body), limits.block_cap);
        assert!(!block.was_truncated);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let players = (0..40).map(|_| named_player("ÄÖÜäöüßéèê")).collect();
        let block = build_block(
            &snapshot("Umlauts", "1", players),
            &NameMap::new(),
            &LayoutLimits::default(),
        );
        assert!(block.was_truncated);
        assert!(char_len(&block.body) <= FIELD_VALUE_MAX);
    }

    #[test]
    fn test_pack_blocks_skips_and_continues() {
        let limits = LayoutLimits {
            total_cap: 100,
            padding: 10,
            ..Default::default()
        };
        let blocks = vec![
            LayoutBlock::new("a", "x".repeat(40)),
            LayoutBlock::new("b", "x".repeat(60)),
            LayoutBlock::new("c", "x".repeat(20)),
        ];

        let (included, omitted) = pack_blocks(blocks, 10, &limits);

        let headers: Vec<_> = included.iter().map(|b| b.header.as_str()).collect();
        assert_eq!(headers, vec!["a", "c"]);
        assert_eq!(omitted, 1);
    }

    #[test]
    fn test_pack_blocks_padding_applies_to_check_only() {
        let limits = LayoutLimits {
            total_cap: 50,
            padding: 10,
            ..Default::default()
        };
        // 0 + 20 + 10 <= 50, then 20 + 20 + 10 <= 50
        let blocks = vec![
            LayoutBlock::new("a", "x".repeat(19)),
            LayoutBlock::new("b", "x".repeat(19)),
        ];
        let (included, omitted) = pack_blocks(blocks, 0, &limits);
        assert_eq!(included.len(), 2);
        assert_eq!(omitted, 0);
    }

    #[test]
    fn test_single_server_no_players_document() {
        let document = expect_document(render_document(
            &[snapshot("SF #1", "2.0", vec![])],
            &NameMap::new(),
            &LayoutLimits::default(),
        ));

        assert_eq!(document.title, "SF Servers");
        assert_eq!(document.blocks.len(), 1);
        assert_eq!(document.blocks[0].body, "Players: 0 • version `2.0`");
        assert!(document.notice.is_none());
        assert_eq!(document.footer, "Server list • 1 total (showing 1).");
    }

    #[test]
    fn test_many_long_servers_get_notice() {
        let snapshots: Vec<_> = (0..200)
            .map(|i| {
                let players = (0..30).map(|p| named_player(&format!("S{i}P{p}"))).collect();
                snapshot(&format!("Server {i:03}"), "1.0", players)
            })
            .collect();

        let document = expect_document(render_document(
            &snapshots,
            &NameMap::new(),
            &LayoutLimits::default(),
        ));

        assert!(document.omitted > 0);
        assert_eq!(document.blocks.len() + document.omitted, 200);
        let notice = document.notice.as_ref().expect("notice block");
        assert_eq!(notice.header, "Notice");
        assert_eq!(
            notice.body,
            format!("Truncated: {} server(s) omitted.", document.omitted)
        );
        assert_eq!(
            document.footer,
            format!(
                "Server list • 200 total (showing {}).",
                document.blocks.len() + 1
            )
        );
        assert!(document.total_len() <= EMBED_TOTAL_MAX);
        assert!(document.fields().all(|f| char_len(&f.body) <= FIELD_VALUE_MAX));
    }

    #[test]
    fn test_long_server_name_is_kept_in_header() {
        let name = "N".repeat(400);
        let document = expect_document(render_document(
            &[snapshot(&name, "1", vec![])],
            &NameMap::new(),
            &LayoutLimits::default(),
        ));
        assert_eq!(char_len(&document.blocks[0].header), 400);
        assert_eq!(char_len(&document.blocks[0].field_name()), 256);
    }

    #[test]
    fn test_render_is_idempotent() {
        let snapshots = vec![
            snapshot("A", "1", vec![named_player("Gordon")]),
            snapshot("B", "2", vec![PlayerRecord {
                steam_id: Some(Scalar::from("76561198000000042")),
                ..Default::default()
            }]),
        ];
        let mut names = NameMap::new();
        names.insert("76561198000000042".to_string(), "Barney".to_string());

        let first = render_document(&snapshots, &names, &LayoutLimits::default());
        let second = render_document(&snapshots, &names, &LayoutLimits::default());
        assert_eq!(first, second);
    }

    /// Server with a one-character name whose block is `block_len` characters long.
    fn server_with_block_len(block_len: usize) -> ServerSnapshot {
        let summary_len = char_len(&summary_line(&snapshot("A", "", vec![])));
        let version = "v".repeat(block_len - 1 - summary_len);
        snapshot("A", &version, vec![])
    }

    #[test]
    fn test_notice_can_push_packed_blocks_over_total_cap() {
        // 42 + 5 * 1001 + 936 = 5983 after packing, the notice adds 37
        let mut snapshots: Vec<_> = (0..5).map(|_| server_with_block_len(1001)).collect();
        snapshots.push(server_with_block_len(936));
        snapshots.push(server_with_block_len(1001));

        let limits = LayoutLimits::default();
        let blocks: Vec<_> = snapshots
            .iter()
            .map(|s| build_block(s, &NameMap::new(), &limits))
            .collect();
        assert!(blocks.iter().all(|b| !b.was_truncated));
        let base_len = char_len(EMBED_TITLE) + char_len(EMBED_DESCRIPTION);
        let (included, omitted) = pack_blocks(blocks, base_len, &limits);
        assert_eq!((included.len(), omitted), (6, 1));

        let outcome = render_document(&snapshots, &NameMap::new(), &limits);
        assert_eq!(outcome, RenderOutcome::TooLarge);
    }

    #[test]
    fn test_post_check_reports_too_large() {
        // Title and description alone are over this cap
        let limits = LayoutLimits {
            total_cap: 20,
            padding: 0,
            ..Default::default()
        };
        let outcome = render_document(&[snapshot("A", "1", vec![])], &NameMap::new(), &limits);
        assert_eq!(outcome, RenderOutcome::TooLarge);
    }
}
