//! Static database schema description.

/// Textual description of the target database, embedded in the
/// SQL-generation prompt and shown on the user surface.
///
/// Fixed for the process lifetime; the target database is external and
/// pre-existing.
pub const DEFAULT_SCHEMA: &str = "\
Tables:
- users : id (integer), name (string), age (integer), email (string)
- orders: id (integer), user_id (integer), amount (float), date (date)";
