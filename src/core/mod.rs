pub mod check;
pub mod expect;
pub mod format;
pub mod map_subject;
pub mod matching;
pub mod ordered;
pub mod strategy;
pub mod subject;

pub use crate::domain::model::{AssertionFailure, Fact, FailureKind};
pub use crate::domain::ports::{FailureStrategy, Ordered};
pub use crate::utils::error::Result;
