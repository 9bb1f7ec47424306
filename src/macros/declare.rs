/// The [`DeclarationSite`](crate::migration::DeclarationSite) of the macro invocation.
///
/// Uses `file!()`/`line!()`, so it works without debug info and through any
/// number of helper functions.
#[macro_export]
macro_rules! declaration_site {
    () => {
        $crate::migration::DeclarationSite::new(file!()).at_line(line!())
    };
}

/// Declare a migration from the file the macro is invoked in.
///
/// The site is injected at compile time instead of being read from the call
/// stack. Panics like [`migration`](crate::migration::migration) when the file
/// name has no description.
///
/// # Example
/// ```ignore
/// // migrations/m20240120120000_create_users_table.rs
/// pub fn create_users_table() -> MigrationRecord {
///     callsite_migrations::migration!(|_ctx| Ok(()), |_ctx| Ok(()))
/// }
/// ```
#[macro_export]
macro_rules! migration {
    ($up:expr $(,)?) => {
        $crate::migration::migration(
            "",
            $up,
            $crate::migration::BuilderOptions::default().with_site($crate::declaration_site!()),
        )
    };
    ($up:expr, $down:expr $(,)?) => {
        $crate::migration::migration2(
            "",
            $up,
            $down,
            $crate::migration::BuilderOptions::default().with_site($crate::declaration_site!()),
        )
    };
}
