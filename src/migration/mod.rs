//! Migration declarations keyed by their source file
//!
//! This module provides:
//! - File name parsing into an identifier and description
//! - Declaration site resolution (call stack or injected)
//! - Builders producing [`MigrationRecord`]s for an execution engine
//! - The [`Migration`] trait and [`MigrationContext`] the engine runs them with
//!
//! Running, ordering and persisting migrations is the engine's job, not this crate's.
//!
//! # Example
//!
//! ```rust,no_run
//! // migrations/m20240120120000_create_users_table.rs
//! use callsite_migrations::migration::{migration, BuilderOptions, Migration, MigrationRecord};
//!
//! pub fn create_users_table() -> MigrationRecord {
//!     migration(
//!         "create users table",
//!         |ctx| {
//!             ctx.check()?;
//!             // CREATE TABLE users ...
//!             Ok(())
//!         },
//!         BuilderOptions::default(),
//!     )
//! }
//!
//! let record = create_users_table();
//! assert_eq!(record.id(), "m20240120120000");
//! assert_eq!(record.description(), "create users table");
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod file;
#[allow(clippy::module_inception)]
pub mod migration;
pub mod options;
pub mod record;
pub mod site;

pub use builder::{migration, migration2, new_migration, try_migration, try_migration2};
pub use context::{ContextError, MigrationContext};
pub use error::{ErrorKind, MigrationError};
pub use file::{parse_migration_info, MigrationInfo};
pub use migration::{Action, ActionError, ActionResult, Migration};
pub use options::BuilderOptions;
pub use record::MigrationRecord;
pub use site::DeclarationSite;
