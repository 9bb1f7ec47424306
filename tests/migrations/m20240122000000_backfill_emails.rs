//! Migration: Backfill emails, declared through the error-returning entry point

use callsite_migrations::migration::{new_migration, Action, MigrationError, MigrationRecord};

pub fn migration() -> Result<MigrationRecord, MigrationError> {
    new_migration(
        "backfill emails",
        |_ctx| Ok(()),
        Some(Action::new(|_ctx| Ok(()))),
    )
}
