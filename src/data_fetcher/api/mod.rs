pub mod fetch_utils;
pub mod http_client;
pub mod servers;

pub use fetch_utils::fetch_json;
pub use http_client::create_http_client_with_timeout;
pub use servers::{HttpServerSource, ServerSource};
