//! Migration: Seed default accounts (forward only)

use super::Journal;
use callsite_migrations::migration::MigrationRecord;

pub fn migration(journal: &Journal) -> MigrationRecord {
    let up = journal.clone();
    callsite_migrations::migration!(move |ctx| {
        for account in ["cash", "receivables", "payables"] {
            ctx.check()?;
            up.push(&format!("INSERT INTO accounts ({account})"));
        }
        Ok(())
    })
}
