// particle/mod.rs
// Re-exports for the particle module

mod types;

pub use types::*;
