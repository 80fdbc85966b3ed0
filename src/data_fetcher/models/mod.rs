pub mod scalar;
pub mod servers;
pub mod steam;

pub use scalar::Scalar;
pub use servers::{PlayerRecord, ServerEntry, ServerInfo, ServerSnapshot};
pub use steam::{PlayerSummariesResponse, PlayerSummary};

use std::collections::{BTreeSet, HashMap};

/// Unique Steam identifiers referenced by a fetch, in sorted order.
pub type IdentifierSet = BTreeSet<String>;

/// Steam identifier to display name. Partial coverage is normal.
pub type NameMap = HashMap<String, String>;

/// Collects every Steam identifier referenced by the snapshots.
pub fn collect_identifiers(snapshots: &[ServerSnapshot]) -> IdentifierSet {
    snapshots
        .iter()
        .flat_map(|snapshot| snapshot.players.iter())
        .filter_map(PlayerRecord::steam_id)
        .collect()
}
