//! Configuration utilities re-exported at the crate root.
//!
//! This exposes [`BuilderOptions`] so applications can load builder settings
//! from `config/config.toml` or environment variables using
//! `BuilderOptions::load()`.

pub use crate::migration::options::*;
