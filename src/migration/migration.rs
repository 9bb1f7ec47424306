//! Migration trait definition and the action type it runs

use super::context::MigrationContext;
use std::fmt;
use std::sync::Arc;

/// Error type returned by migration actions
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// Result of running a migration action
pub type ActionResult = Result<(), ActionError>;

/// A forward or reverse migration step
///
/// Reference counted, so records holding actions are cheap to clone.
/// Any `Fn(&MigrationContext) -> ActionResult` closure converts into an `Action`.
#[derive(Clone)]
pub struct Action(Arc<dyn Fn(&MigrationContext) -> ActionResult + Send + Sync>);

impl Action {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&MigrationContext) -> ActionResult + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Run the action with the given context
    ///
    /// # Errors
    ///
    /// Returns whatever error the action reports.
    pub fn run(&self, ctx: &MigrationContext) -> ActionResult {
        (self.0)(ctx)
    }
}

impl<F> From<F> for Action
where
    F: Fn(&MigrationContext) -> ActionResult + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// Trait an execution engine consumes
///
/// [`MigrationRecord`](super::MigrationRecord) is the implementation this crate
/// produces. The engine orders migrations by [`id`](Migration::id), tracks which
/// ids were applied, and calls `up()`/`down()` with its own context.
pub trait Migration: Send + Sync {
    /// Ordering and uniqueness token
    fn id(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str;

    /// Apply the migration (forward migration)
    ///
    /// # Errors
    ///
    /// Returns the action's error.
    fn up(&self, ctx: &MigrationContext) -> ActionResult;

    /// Rollback the migration (reverse migration)
    ///
    /// Migrations declared without a reverse action succeed here without
    /// doing anything.
    ///
    /// # Errors
    ///
    /// Returns the action's error.
    fn down(&self, ctx: &MigrationContext) -> ActionResult;
}
