//! Unbound comment-form factory.
//!
//! Comment submission is handled elsewhere in the application; the pet
//! detail page only needs an empty form to render the input widget.

use serde_json::{json, Value};

/// Produce the unbound comment form for display. Never bound to request
/// data or processed by the pet handlers.
pub fn unbound() -> Value {
    json!({
        "body": "",
        "errors": {},
    })
}
