pub mod api;
pub mod models;
pub mod player_names;

pub use api::{HttpServerSource, ServerSource};
pub use models::{IdentifierSet, NameMap, PlayerRecord, ServerSnapshot, collect_identifiers};
pub use player_names::{NameResolver, SteamNameResolver, select_name};
