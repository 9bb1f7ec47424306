use callsite_migrations::migration::MigrationRecord;

pub fn migration() -> MigrationRecord {
    callsite_migrations::migration!(|_ctx| Ok(()), |_ctx| Ok(()))
}
