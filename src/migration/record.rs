//! `MigrationRecord` - the value handed to an execution engine

use super::context::MigrationContext;
use super::migration::{Action, ActionResult, Migration};
use super::site::DeclarationSite;
use std::fmt;

/// A migration whose identity was derived from its declaration site
///
/// Records are immutable once built. Cloning shares the underlying actions.
#[derive(Clone)]
pub struct MigrationRecord {
    id: String,
    description: String,
    site: DeclarationSite,
    up: Action,
    down: Option<Action>,
}

impl MigrationRecord {
    pub(crate) fn new(
        id: String,
        description: String,
        site: DeclarationSite,
        up: Action,
        down: Option<Action>,
    ) -> Self {
        Self {
            id,
            description,
            site,
            up,
            down,
        }
    }

    /// Where the migration was declared
    #[must_use]
    pub fn site(&self) -> &DeclarationSite {
        &self.site
    }

    /// Whether a reverse action was supplied
    #[must_use]
    pub fn is_reversible(&self) -> bool {
        self.down.is_some()
    }
}

impl Migration for MigrationRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn up(&self, ctx: &MigrationContext) -> ActionResult {
        self.up.run(ctx)
    }

    fn down(&self, ctx: &MigrationContext) -> ActionResult {
        match &self.down {
            Some(down) => down.run(ctx),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for MigrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MigrationRecord")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("site", &self.site)
            .field("reversible", &self.is_reversible())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn record(down: Option<Action>) -> MigrationRecord {
        MigrationRecord::new(
            "m20240120120000".to_string(),
            "create users table".to_string(),
            DeclarationSite::new("migrations/m20240120120000_create_users_table.rs"),
            Action::new(|_| Ok(())),
            down,
        )
    }

    #[test]
    fn test_forward_only_down_is_noop() {
        let record = record(None);
        assert!(!record.is_reversible());
        assert!(record.down(&MigrationContext::new()).is_ok());
    }

    #[test]
    fn test_down_runs_reverse_action() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let record = record(Some(Action::new(move |_| {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        })));

        assert!(record.is_reversible());
        assert!(record.down(&MigrationContext::new()).is_ok());
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_accessors_and_debug() {
        let record = record(None);
        assert_eq!(record.id(), "m20240120120000");
        assert_eq!(record.description(), "create users table");
        assert_eq!(
            record.site().file(),
            "migrations/m20240120120000_create_users_table.rs"
        );

        let debug = format!("{record:?}");
        assert!(debug.contains("m20240120120000"));
        assert!(debug.contains("reversible: false"));
    }
}
