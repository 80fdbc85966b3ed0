use super::scalar::{Scalar, first_truthy};
use crate::constants::texts::{UNKNOWN_VERSION, UNNAMED_SERVER};
use serde::{Deserialize, Serialize};

/// One player as reported by the server API.
///
/// Every field is optional; servers running different plugin versions report
/// different subsets and absence is a normal state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Scalar>,
    #[serde(rename = "playerName", default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Scalar>,
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personaname: Option<Scalar>,

    #[serde(rename = "steamId", default, skip_serializing_if = "Option::is_none")]
    pub steam_id: Option<Scalar>,
    /// Older server plugins report the Steam id in snake case.
    #[serde(rename = "steam_id", default, skip_serializing_if = "Option::is_none")]
    pub steam_id_legacy: Option<Scalar>,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Scalar>,

    #[serde(rename = "teamIdx", default, skip_serializing_if = "Option::is_none")]
    pub team_idx: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kills: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaths: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ping: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon: Option<Scalar>,
}

impl PlayerRecord {
    /// Local name fields in display precedence order.
    pub fn name_fields(&self) -> [&Option<Scalar>; 7] {
        [
            &self.name,
            &self.player_name,
            &self.nick,
            &self.username,
            &self.display_name,
            &self.persona,
            &self.personaname,
        ]
    }

    /// First non-empty local name, if the record carries one.
    pub fn local_name(&self) -> Option<String> {
        first_truthy(self.name_fields())
    }

    /// Steam identifier, preferring `steamId` over `steam_id`.
    pub fn steam_id(&self) -> Option<String> {
        first_truthy([&self.steam_id, &self.steam_id_legacy])
    }
}

/// Server identity block of a server list entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(default)]
    pub name: Option<Scalar>,
    #[serde(default)]
    pub version: Option<Scalar>,
}

/// One element of the server list API response, as sent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerEntry {
    #[serde(rename = "serverInfo", default)]
    pub server_info: Option<ServerInfo>,
    #[serde(default)]
    pub players: Option<Vec<PlayerRecord>>,
}

/// A server and its roster at fetch time.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSnapshot {
    pub name: String,
    pub version: String,
    pub players: Vec<PlayerRecord>,
}

impl From<ServerEntry> for ServerSnapshot {
    fn from(entry: ServerEntry) -> Self {
        let info = entry.server_info.unwrap_or_default();
        ServerSnapshot {
            name: info
                .name
                .map(|name| name.to_string())
                .unwrap_or_else(|| UNNAMED_SERVER.to_string()),
            version: info
                .version
                .map(|version| version.to_string())
                .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
            players: entry.players.unwrap_or_default(),
        }
    }
}
