// Application layer: use cases composed from the core assertions.

pub mod compare;
#[cfg(feature = "cli")]
pub mod run;
