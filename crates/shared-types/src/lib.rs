pub mod common;
pub mod config;
pub mod error;
pub mod listing;
pub mod query;
pub mod session;

// Fleet domain view-models
pub mod agent;
pub mod blog;
pub mod catalog;
pub mod driver;
pub mod issue;
pub mod metrics;
pub mod ride;
pub mod user;

pub use common::*;
pub use config::*;
pub use error::*;
pub use listing::*;
pub use query::*;
pub use session::*;

pub use agent::*;
pub use blog::*;
pub use catalog::*;
pub use driver::*;
pub use issue::*;
pub use metrics::*;
pub use ride::*;
pub use user::*;
