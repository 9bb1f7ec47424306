//! Migration: Add account type index

use super::Journal;
use callsite_migrations::migration::{migration2, BuilderOptions, MigrationRecord};

pub fn migration(journal: &Journal) -> MigrationRecord {
    let up = journal.clone();
    let down = journal.clone();
    migration2(
        "",
        move |_ctx| {
            up.push("CREATE INDEX idx_chart_of_accounts_account_type");
            Ok(())
        },
        move |_ctx| {
            down.push("DROP INDEX idx_chart_of_accounts_account_type");
            Ok(())
        },
        BuilderOptions::default(),
    )
}
