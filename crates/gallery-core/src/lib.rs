//! Host-independent logic for the gallery carousel.
//!
//! Everything here is plain Rust with no browser or GPU types, so it can be
//! driven by the web frontend and exercised directly from tests.

pub mod artwork;
pub mod camera;
pub mod constants;
pub mod easing;
pub mod error;
pub mod gallery;
pub mod navigation;
pub mod pick;
pub mod scene;

pub use artwork::*;
pub use camera::*;
pub use easing::*;
pub use error::*;
pub use gallery::*;
pub use navigation::*;
pub use pick::*;
pub use scene::*;
