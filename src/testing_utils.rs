use crate::data_fetcher::models::{PlayerRecord, Scalar, ServerSnapshot};

/// Test utilities for creating players, servers and wire payloads
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a player with a local name and a full set of stats
    pub fn create_named_player(name: &str) -> PlayerRecord {
        PlayerRecord {
            name: Some(Scalar::from(name)),
            team_idx: Some(Scalar::Int(2)),
            health: Some(Scalar::Int(100)),
            armor: Some(Scalar::Int(50)),
            kills: Some(Scalar::Int(3)),
            deaths: Some(Scalar::Int(1)),
            ping: Some(Scalar::Int(40)),
            weapon: Some(Scalar::from("weapon_smg1")),
            ..Default::default()
        }
    }

    /// Creates a player known only by Steam id, so its name must be resolved
    pub fn create_steam_player(steam_id: &str, team: &str) -> PlayerRecord {
        PlayerRecord {
            steam_id: Some(Scalar::from(steam_id)),
            team_idx: Some(Scalar::from(team)),
            health: Some(Scalar::Int(75)),
            armor: Some(Scalar::Int(0)),
            kills: Some(Scalar::Int(0)),
            deaths: Some(Scalar::Int(2)),
            ping: Some(Scalar::Int(60)),
            ..Default::default()
        }
    }

    /// Creates a server snapshot with the given players
    pub fn create_server(name: &str, version: &str, players: Vec<PlayerRecord>) -> ServerSnapshot {
        ServerSnapshot {
            name: name.to_string(),
            version: version.to_string(),
            players,
        }
    }

    /// Creates a server with `player_count` named players whose block body
    /// always exceeds the field value limit once there are 30 or more
    pub fn create_crowded_server(index: usize, player_count: usize) -> ServerSnapshot {
        let players = (0..player_count)
            .map(|p| Self::create_named_player(&format!("Server{index}Player{p}")))
            .collect();
        Self::create_server(&format!("SF Server {index:03}"), "1.0", players)
    }

    /// Creates the server list API payload for the given snapshots
    pub fn server_list_json(snapshots: &[ServerSnapshot]) -> serde_json::Value {
        serde_json::Value::Array(
            snapshots
                .iter()
                .map(|snapshot| {
                    serde_json::json!({
                        "serverInfo": {"name": snapshot.name, "version": snapshot.version},
                        "players": snapshot.players,
                    })
                })
                .collect(),
        )
    }

    /// Creates a Steam player summaries payload
    pub fn steam_summaries_json(pairs: &[(&str, &str)]) -> serde_json::Value {
        let players: Vec<_> = pairs
            .iter()
            .map(|(steam_id, name)| serde_json::json!({"steamid": steam_id, "personaname": name}))
            .collect();
        serde_json::json!({"response": {"players": players}})
    }
}
