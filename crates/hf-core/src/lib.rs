//! hf-core: stable foundation for hoseflow.
//!
//! Contains:
//! - numeric (Real + figure comparison + float helpers)
//! - error (shared error taxonomy for catalog, chain and scenario layers)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HfError, HfResult};
pub use numeric::*;
