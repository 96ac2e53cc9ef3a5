//! Short opaque identifiers for form fields.
//!
//! Field ids only need to be unique within a single form document, so a
//! truncated UUID keeps them short enough to read in the builder UI.

use uuid::Uuid;

/// The length of a generated field id.
const ID_LENGTH: usize = 6;

/// Generates a short random identifier (6 hex characters).
pub fn short_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ID_LENGTH);
    id
}
