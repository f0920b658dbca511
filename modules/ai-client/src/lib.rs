pub mod claude;
pub mod error;
pub mod traits;

pub use claude::{Claude, DEFAULT_MODEL};
pub use error::{AiError, Result};
pub use traits::TextCompleter;
