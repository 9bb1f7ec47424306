//! Shared helper for seed migrations. Not `#[track_caller]`, so the builder
//! has to skip this frame to find the declaring file.

use callsite_migrations::migration::{migration, BuilderOptions, MigrationRecord};
use std::sync::atomic::{AtomicUsize, Ordering};

pub static SEEDED_ROWS: AtomicUsize = AtomicUsize::new(0);

#[inline(never)]
pub fn seed(rows: usize) -> MigrationRecord {
    migration(
        "seed",
        move |_ctx| {
            SEEDED_ROWS.fetch_add(rows, Ordering::SeqCst);
            Ok(())
        },
        BuilderOptions::default().with_skip(2),
    )
}
