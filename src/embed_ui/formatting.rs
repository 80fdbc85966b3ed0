// src/embed_ui/formatting.rs - One-line player stat formatting

use crate::constants::texts::{MISSING_VALUE, NO_WEAPON};
use crate::data_fetcher::models::{PlayerRecord, Scalar};

/// Maps a team code to its HL2DM team label.
///
/// Codes are compared by their text form, so `2` and `"2"` both map to
/// `Rebel`. Unknown codes are returned unchanged.
pub fn team_label(team_code: &str) -> &str {
    match team_code {
        "0" | "1" => "Free For All",
        "2" => "Rebel",
        "3" => "Combine",
        other => other,
    }
}

fn stat_text(value: &Option<Scalar>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Renders one player's stats as a single markdown line:
///
/// `**name** — team — 100HP/50AR — 3K/1D — 40ms — weapon`
///
/// Missing stats render as `n/a` and a missing or empty weapon as `none`.
pub fn format_player_line(record: &PlayerRecord, name: &str) -> String {
    let team = stat_text(&record.team_idx);
    let team = team_label(&team);
    let hp = stat_text(&record.health);
    let armor = stat_text(&record.armor);
    let kills = stat_text(&record.kills);
    let deaths = stat_text(&record.deaths);
    let ping = stat_text(&record.ping);
    let weapon = record
        .weapon
        .as_ref()
        .filter(|weapon| weapon.is_truthy())
        .map(ToString::to_string)
        .unwrap_or_else(|| NO_WEAPON.to_string());

    format!("**{name}** — {team} — {hp}HP/{armor}AR — {kills}K/{deaths}D — {ping}ms — {weapon}")
}
