//! Reference module: File reference classification and MIME detection
//!
//! Decides whether a reference is an opaque content reference or a
//! path-based one, and derives a display name, extension, and MIME type
//! from the reference string alone.

mod classify;
mod mime;

pub use classify::{FileReference, ReferenceKind, OPAQUE_SCHEMES, UNKNOWN_NAME};
pub use mime::{mime_from_extension, DEFAULT_MIME_TYPE};
