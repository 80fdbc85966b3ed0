//! Display name selection for a single player record.
//!
//! Names are picked by an ordered chain of rules, first match wins:
//! 1. a name the server reported for the player
//! 2. the Steam persona name resolved for the player's Steam id
//! 3. a `steam:` placeholder built from the unresolved Steam id
//! 4. a `#` placeholder built from the in-game user id
//! 5. `Unknown`

use crate::constants::steam::PLACEHOLDER_SUFFIX_LEN;
use crate::constants::texts::UNKNOWN_PLAYER;
use crate::data_fetcher::models::{NameMap, PlayerRecord};

/// One step of the name fallback chain.
pub type NameRule = fn(&PlayerRecord, &NameMap) -> Option<String>;

/// The fallback chain in precedence order.
pub const NAME_RULES: [NameRule; 4] = [
    local_name,
    resolved_steam_name,
    steam_placeholder,
    user_id_placeholder,
];

/// Picks the best available display name for `record`.
///
/// Always returns a non-empty string.
///
/// # Example
/// ```
/// use sf_servers_bot::data_fetcher::models::{NameMap, PlayerRecord, Scalar};
/// use sf_servers_bot::data_fetcher::player_names::select_name;
///
/// let record = PlayerRecord {
///     steam_id: Some(Scalar::from("76561198012345678")),
///     ..Default::default()
/// };
/// assert_eq!(select_name(&record, &NameMap::new()), "steam:12345678");
/// ```
pub fn select_name(record: &PlayerRecord, names: &NameMap) -> String {
    NAME_RULES
        .iter()
        .find_map(|rule| rule(record, names))
        .unwrap_or_else(|| UNKNOWN_PLAYER.to_string())
}

/// Rule 1: first non-empty name field reported by the server.
pub fn local_name(record: &PlayerRecord, _names: &NameMap) -> Option<String> {
    record.local_name()
}

/// Rule 2: Steam persona name from the lookup results.
pub fn resolved_steam_name(record: &PlayerRecord, names: &NameMap) -> Option<String> {
    let steam_id = record.steam_id()?;
    names
        .get(&steam_id)
        .filter(|name| !name.is_empty())
        .cloned()
}

/// Rule 3: `steam:` followed by the last characters of an unresolved Steam id.
pub fn steam_placeholder(record: &PlayerRecord, _names: &NameMap) -> Option<String> {
    record
        .steam_id()
        .map(|steam_id| format!("steam:{}", last_chars(&steam_id, PLACEHOLDER_SUFFIX_LEN)))
}

/// Rule 4: `#` followed by the in-game user id, whatever its value.
pub fn user_id_placeholder(record: &PlayerRecord, _names: &NameMap) -> Option<String> {
    record.user_id.as_ref().map(|user_id| format!("#{user_id}"))
}

fn last_chars(value: &str, count: usize) -> String {
    let total = value.chars().count();
    value.chars().skip(total.saturating_sub(count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::Scalar;

    const STEAM_ID: &str = "76561198012345678";

    fn names_with(id: &str, name: &str) -> NameMap {
        let mut names = NameMap::new();
        names.insert(id.to_string(), name.to_string());
        names
    }

    #[test]
    fn test_local_name_beats_resolved_name() {
        let record = PlayerRecord {
            nick: Some(Scalar::from("LocalNick")),
            steam_id: Some(Scalar::from(STEAM_ID)),
            ..Default::default()
        };
        assert_eq!(
            select_name(&record, &names_with(STEAM_ID, "SteamName")),
            "LocalNick"
        );
    }

    #[test]
    fn test_local_name_field_precedence() {
        let record = PlayerRecord {
            personaname: Some(Scalar::from("persona-last")),
            username: Some(Scalar::from("user")),
            player_name: Some(Scalar::from("")),
            ..Default::default()
        };
        assert_eq!(select_name(&record, &NameMap::new()), "user");
    }

    #[test]
    fn test_numeric_local_name_is_rendered() {
        let record = PlayerRecord {
            name: Some(Scalar::Int(1337)),
            ..Default::default()
        };
        assert_eq!(select_name(&record, &NameMap::new()), "1337");
    }

    #[test]
    fn test_resolved_name_used_without_local_name() {
        let record = PlayerRecord {
            steam_id_legacy: Some(Scalar::from(STEAM_ID)),
            user_id: Some(Scalar::Int(4)),
            ..Default::default()
        };
        assert_eq!(
            select_name(&record, &names_with(STEAM_ID, "SteamName")),
            "SteamName"
        );
    }

    #[test]
    fn test_unresolved_steam_id_placeholder() {
        let record = PlayerRecord {
            steam_id: Some(Scalar::from(STEAM_ID)),
            user_id: Some(Scalar::Int(4)),
            ..Default::default()
        };
        assert_eq!(select_name(&record, &NameMap::new()), "steam:12345678");
    }

    #[test]
    fn test_short_steam_id_placeholder_uses_whole_id() {
        let record = PlayerRecord {
            steam_id: Some(Scalar::from("123")),
            ..Default::default()
        };
        assert_eq!(select_name(&record, &NameMap::new()), "steam:123");
    }

    #[test]
    fn test_empty_resolved_name_falls_through() {
        let record = PlayerRecord {
            steam_id: Some(Scalar::from(STEAM_ID)),
            ..Default::default()
        };
        assert_eq!(
            select_name(&record, &names_with(STEAM_ID, "")),
            "steam:12345678"
        );
    }

    #[test]
    fn test_user_id_placeholder() {
        let record = PlayerRecord {
            user_id: Some(Scalar::Int(0)),
            ..Default::default()
        };
        assert_eq!(select_name(&record, &NameMap::new()), "#0");
    }

    #[test]
    fn test_unknown_when_nothing_is_known() {
        assert_eq!(
            select_name(&PlayerRecord::default(), &NameMap::new()),
            "Unknown"
        );
    }

    #[test]
    fn test_select_name_is_never_empty() {
        let records = vec![
            PlayerRecord::default(),
            PlayerRecord {
                name: Some(Scalar::from("")),
                steam_id: Some(Scalar::from("")),
                ..Default::default()
            },
            PlayerRecord {
                display_name: Some(Scalar::Bool(false)),
                user_id: Some(Scalar::from("")),
                ..Default::default()
            },
        ];

        for record in &records {
            let first = select_name(record, &NameMap::new());
            let second = select_name(record, &NameMap::new());
            assert!(!first.is_empty(), "empty name for {record:?}");
            assert_eq!(first, second);
        }
    }
}
