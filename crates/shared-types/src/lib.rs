pub mod config;
pub mod error;
pub mod login;
pub mod models;

// Dashboard sample data and the logic the views run over it.
pub mod metrics;
pub mod support;
pub mod ticket;

pub use config::*;
pub use error::*;
pub use login::*;
pub use models::*;
pub use metrics::*;
pub use support::*;
pub use ticket::*;
