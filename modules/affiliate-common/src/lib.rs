pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::*;
pub use config::Config;
pub use error::{AffiliateError, Result};
pub use types::*;
