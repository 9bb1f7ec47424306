//! Migration: Create users table
//! Declared through the default call-site resolution

use callsite_migrations::migration::{migration2, BuilderOptions, MigrationRecord};
use std::sync::atomic::{AtomicBool, Ordering};

pub static CREATED: AtomicBool = AtomicBool::new(false);

pub fn migration() -> MigrationRecord {
    migration2(
        "create users table",
        |ctx| {
            ctx.check()?;
            CREATED.store(true, Ordering::SeqCst);
            Ok(())
        },
        |_ctx| {
            CREATED.store(false, Ordering::SeqCst);
            Ok(())
        },
        BuilderOptions::default(),
    )
}
