//! Deliberately misnamed: no `_description` part

use callsite_migrations::migration::{migration as forward_only, new_migration, BuilderOptions, MigrationError, MigrationRecord};

pub fn migration() -> MigrationRecord {
    forward_only("", |_ctx| Ok(()), BuilderOptions::default())
}

pub fn try_migration() -> Result<MigrationRecord, MigrationError> {
    new_migration("", |_ctx| Ok(()), None)
}
