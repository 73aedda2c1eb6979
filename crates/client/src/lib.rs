//! Headless engine behind the admin console: resource contracts, the remote
//! paginated table, the HTTP client and the live metrics feed.

pub mod api;
pub mod auth;
pub mod config;
pub mod metrics;
pub mod resources;
pub mod table;

pub use api::{ApiClient, RemoteSource, DRIVER_DECISIONS};
pub use auth::AuthContext;
pub use config::{config, load_config};
pub use metrics::LiveBoard;
pub use resources::*;
pub use table::*;
