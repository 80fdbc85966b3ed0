//! Player name resolution and selection.
//!
//! - `resolver`: batched Steam persona name lookup
//! - `selection`: the per-record fallback chain that picks the display name

mod resolver;
mod selection;

pub use resolver::{NameResolver, SteamNameResolver, batch_identifiers};
pub use selection::{
    NAME_RULES, NameRule, local_name, resolved_steam_name, select_name, steam_placeholder,
    user_id_placeholder,
};
