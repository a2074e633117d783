//! SQL error classification helpers.

/// Returns true if `e` is a duplicate-key violation.
///
/// On MySQL this is error 1062 (`ER_DUP_ENTRY`), which sqlx reports as a
/// unique violation. MySQL does not report the constraint name.
pub fn is_duplicate_key(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
