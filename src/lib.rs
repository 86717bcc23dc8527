pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::TomlConfig;
pub use crate::core::check::{assert_that, assert_that_map, Check};
pub use crate::core::expect::{Expect, ExpectFailures};
pub use crate::core::format::FormatConfig;
pub use crate::core::map_subject::MapSubject;
pub use crate::core::strategy::{Collector, PanicStrategy};
pub use crate::core::subject::IterableSubject;
pub use crate::domain::model::{AssertionFailure, Fact, FailureKind};
pub use crate::domain::ports::{FailureStrategy, Ordered};
pub use crate::utils::error::{Result, SeqAssertError};
