//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod analytics;
pub mod error;
pub mod error_ext;
pub mod preprocess;
pub mod services;

pub use analytics::{SentenceLetterCounts, VowelSet};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use preprocess::ExpressionConverter;
