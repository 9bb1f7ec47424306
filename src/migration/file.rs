//! Migration identifier and description parsing from file names

use crate::migration::MigrationError;

/// Identifier and description parsed from a migration's file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationInfo {
    /// Ordering token: the first `_`-separated segment, verbatim
    pub id: String,

    /// Remaining segments joined with single spaces
    pub description: String,
}

impl MigrationInfo {
    /// Create a new `MigrationInfo`
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

/// Parse a migration file path into its identifier and description
///
/// Expected format: `{id}_{word}[_{word}...].{ext}`. The directory and the
/// extension are ignored. The identifier is not validated: any first segment
/// is accepted as-is, so `m20240120120000` and `4829481231293` are both fine.
///
/// # Example
/// - `4829481231293_some_description.rs` → id: `4829481231293`, description: `"some description"`
/// - `migrations/m20240120120000_create_users_table.rs` → id: `m20240120120000`, description: `"create users table"`
///
/// # Errors
///
/// Returns `MigrationError::MissingDescription` when the base name contains no `_`.
/// The error still carries the identifier (the whole base name).
pub fn parse_migration_info(file: &str) -> Result<MigrationInfo, MigrationError> {
    let base = base_name(file);

    match base.split_once('_') {
        // Equivalent to splitting on every `_` and joining the tail with spaces;
        // empty words from `__` survive as extra spaces.
        Some((id, rest)) => Ok(MigrationInfo::new(id, rest.replace('_', " "))),
        None => Err(MigrationError::MissingDescription {
            identifier: base.to_string(),
            file: file.to_string(),
        }),
    }
}

/// File name without directory or extension
///
/// Both `/` and `\` count as separators so the result does not depend on the
/// platform that produced the path. A leading `.` is part of the name, not an
/// extension.
pub(crate) fn base_name(file: &str) -> &str {
    let trimmed = file.trim_end_matches(['/', '\\']);
    let name = match trimmed.rfind(['/', '\\']) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    };

    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}
