//! Build migration records from the file they are declared in
//!
//! Put each migration in its own file named `{id}_{description}.rs` and call
//! one of the builders from that file:
//!
//! ```rust,no_run
//! // migrations/m20240120120000_create_users_table.rs
//! use callsite_migrations::migration::{migration2, BuilderOptions, MigrationRecord};
//!
//! pub fn create_users_table() -> MigrationRecord {
//!     migration2(
//!         "create users table",
//!         |_ctx| Ok(()),
//!         |_ctx| Ok(()),
//!         BuilderOptions::default(),
//!     )
//! }
//! ```
//!
//! The record gets id `m20240120120000` and description `create users table`.
//! The `description` argument is never stored: identity always comes from the
//! file name.
//!
//! `migration` and `migration2` panic on a malformed file name, since they run
//! while migrations are registered at startup. `try_migration`, `try_migration2`
//! and `new_migration` return the error instead.

use super::context::MigrationContext;
use super::file::parse_migration_info;
use super::migration::{Action, ActionResult};
use super::site;
use crate::migration::{BuilderOptions, MigrationError, MigrationRecord};
use std::panic::Location;

/// Build a migration with forward and reverse actions
///
/// # Panics
///
/// Panics with a [`MigrationError::Fatal`] message if the declaration site
/// cannot be resolved or its file name has no description.
#[track_caller]
pub fn migration2<U, D>(description: &str, up: U, down: D, options: BuilderOptions) -> MigrationRecord
where
    U: Fn(&MigrationContext) -> ActionResult + Send + Sync + 'static,
    D: Fn(&MigrationContext) -> ActionResult + Send + Sync + 'static,
{
    let caller = Location::caller();
    match build(description, Action::new(up), Some(Action::new(down)), &options, caller) {
        Ok(record) => record,
        Err(e) => abort(e),
    }
}

/// Build a forward-only migration
///
/// The record's `down()` is a no-op.
///
/// # Panics
///
/// Panics with a [`MigrationError::Fatal`] message if the declaration site
/// cannot be resolved or its file name has no description.
#[track_caller]
pub fn migration<U>(description: &str, up: U, options: BuilderOptions) -> MigrationRecord
where
    U: Fn(&MigrationContext) -> ActionResult + Send + Sync + 'static,
{
    let caller = Location::caller();
    match build(description, Action::new(up), None, &options, caller) {
        Ok(record) => record,
        Err(e) => abort(e),
    }
}

/// Result-returning variant of [`migration2`]
///
/// # Errors
///
/// Returns `MigrationError::InvalidCallSite` or `MigrationError::MissingDescription`.
#[track_caller]
pub fn try_migration2<U, D>(
    description: &str,
    up: U,
    down: D,
    options: BuilderOptions,
) -> Result<MigrationRecord, MigrationError>
where
    U: Fn(&MigrationContext) -> ActionResult + Send + Sync + 'static,
    D: Fn(&MigrationContext) -> ActionResult + Send + Sync + 'static,
{
    build(
        description,
        Action::new(up),
        Some(Action::new(down)),
        &options,
        Location::caller(),
    )
}

/// Result-returning variant of [`migration`]
///
/// # Errors
///
/// Returns `MigrationError::InvalidCallSite` or `MigrationError::MissingDescription`.
#[track_caller]
pub fn try_migration<U>(description: &str, up: U, options: BuilderOptions) -> Result<MigrationRecord, MigrationError>
where
    U: Fn(&MigrationContext) -> ActionResult + Send + Sync + 'static,
{
    build(description, Action::new(up), None, &options, Location::caller())
}

/// Build a migration declared by the direct caller, returning errors to it
///
/// The reverse action is optional. Uses default [`BuilderOptions`].
///
/// # Errors
///
/// Returns `MigrationError::MissingDescription` if the caller's file name has no description.
#[track_caller]
pub fn new_migration<U>(description: &str, up: U, down: Option<Action>) -> Result<MigrationRecord, MigrationError>
where
    U: Fn(&MigrationContext) -> ActionResult + Send + Sync + 'static,
{
    build(
        description,
        Action::new(up),
        down,
        &BuilderOptions::default(),
        Location::caller(),
    )
}

fn build(
    description: &str,
    up: Action,
    down: Option<Action>,
    options: &BuilderOptions,
    caller: &Location<'_>,
) -> Result<MigrationRecord, MigrationError> {
    let site = match &options.site {
        Some(site) => site.clone(),
        None => site::resolve(options.skip, caller)?,
    };

    let info = parse_migration_info(site.file())?;

    if !description.is_empty() && description != info.description {
        log::warn!(
            "Migration {} at {}: ignoring description argument {:?}, using {:?} from the file name",
            info.id,
            site,
            description,
            info.description
        );
    }
    log::debug!("Declared migration {} ({}) at {}", info.id, info.description, site);

    Ok(MigrationRecord::new(info.id, info.description, site, up, down))
}

#[track_caller]
fn abort(error: MigrationError) -> ! {
    let error = error.into_fatal();
    log::error!("{error}");
    panic!("{error}");
}
