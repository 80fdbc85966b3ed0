use serde::{Deserialize, Serialize};

/// Response of `ISteamUser/GetPlayerSummaries/v2`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSummariesResponse {
    #[serde(default)]
    pub response: PlayerSummariesBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSummariesBody {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

/// The subset of a Steam player summary the bot uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSummary {
    #[serde(default)]
    pub steamid: Option<String>,
    #[serde(default)]
    pub personaname: Option<String>,
}

impl PlayerSummary {
    /// Returns `(steam id, persona name)` when both are present and non-empty.
    pub fn into_name_pair(self) -> Option<(String, String)> {
        match (self.steamid, self.personaname) {
            (Some(id), Some(name)) if !id.is_empty() && !name.is_empty() => Some((id, name)),
            _ => None,
        }
    }
}
