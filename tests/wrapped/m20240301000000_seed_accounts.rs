//! Migration: Seed accounts through a helper one frame away

use super::seed_helper;
use callsite_migrations::migration::MigrationRecord;

#[inline(never)]
pub fn migration() -> MigrationRecord {
    seed_helper::seed(3)
}
