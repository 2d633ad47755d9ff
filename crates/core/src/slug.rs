//! URL-safe slug derivation for pet profiles.
//!
//! A pet's slug is derived once at creation time from its name and database
//! id (`"{slugified-name}-{id}"`) and is never regenerated afterwards, so
//! URLs stay stable across renames.

use crate::types::DbId;

/// Fallback stem used when a name slugifies to the empty string
/// (e.g. a name made entirely of punctuation).
const FALLBACK_STEM: &str = "pet";

/// Lowercase a name and reduce it to ASCII alphanumerics separated by
/// single hyphens.
///
/// Runs of non-alphanumeric characters collapse into one hyphen, and
/// leading/trailing hyphens are stripped.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Derive the unique slug for a pet from its name and assigned id.
///
/// The id suffix guarantees uniqueness even when two pets share a name.
pub fn pet_slug(name: &str, id: DbId) -> String {
    let stem = slugify(name);
    if stem.is_empty() {
        format!("{FALLBACK_STEM}-{id}")
    } else {
        format!("{stem}-{id}")
    }
}
