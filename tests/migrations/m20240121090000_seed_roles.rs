//! Migration: Seed roles (forward only)

use callsite_migrations::migration::{migration as forward_only, BuilderOptions, MigrationRecord};

pub fn migration() -> MigrationRecord {
    forward_only("seed roles", |_ctx| Ok(()), BuilderOptions::default())
}
