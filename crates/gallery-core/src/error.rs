use thiserror::Error;

/// Construction-time validation failures for a [`crate::GalleryState`].
///
/// Navigation itself never fails: misses, inert hits and requests that arrive
/// mid-transition are reported as [`crate::Ignored`] outcomes instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("gallery needs at least one artwork")]
    EmptyCatalog,
    #[error("artwork index {index} is out of range for {len} artworks")]
    IndexOutOfRange { index: usize, len: usize },
}
