//! Migration: Create Chart of Accounts

use super::Journal;
use callsite_migrations::migration::{migration2, BuilderOptions, MigrationRecord};

pub fn migration(journal: &Journal) -> MigrationRecord {
    let up = journal.clone();
    let down = journal.clone();
    migration2(
        "create chart of accounts",
        move |ctx| {
            ctx.check()?;
            up.push("CREATE TABLE chart_of_accounts");
            Ok(())
        },
        move |_ctx| {
            down.push("DROP TABLE chart_of_accounts");
            Ok(())
        },
        BuilderOptions::default(),
    )
}
