//! # callsite-migrations
//!
//! Derive a migration's identifier and description from the file it is
//! declared in, and hand the resulting records to an execution engine.
//!
//! A file named `m20240120120000_create_users_table.rs` declares the migration
//! with id `m20240120120000` and description `create users table`.

pub mod config;

mod macros;
pub mod migration;

pub use migration::{
    BuilderOptions, DeclarationSite, Migration, MigrationContext, MigrationError, MigrationRecord,
};
