use crate::artwork::ArtworkRecord;
use crate::error::GalleryError;
use std::f32::consts::TAU;

/// Which way the viewer asked the ring to move.
///
/// `Left` shows the next artwork (index + 1), `Right` the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign applied to the ring's yaw step for this direction.
    #[inline]
    pub fn rotation_sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Neighbour of `index` on a ring of `len` slots. `len` must be non-zero.
#[inline]
pub fn neighbor_of(index: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Left => (index + 1) % len,
        Direction::Right => (index + len - 1) % len,
    }
}

/// Yaw between two adjacent artworks on a ring of `len` slots.
#[inline]
pub fn ring_step(len: usize) -> f32 {
    TAU / len.max(1) as f32
}

/// The artwork ring and the index currently facing the viewer.
#[derive(Clone, Debug)]
pub struct GalleryState {
    artworks: Vec<ArtworkRecord>,
    current: usize,
}

impl GalleryState {
    pub fn new(artworks: Vec<ArtworkRecord>) -> Result<Self, GalleryError> {
        Self::with_current(artworks, 0)
    }

    pub fn with_current(artworks: Vec<ArtworkRecord>, current: usize) -> Result<Self, GalleryError> {
        if artworks.is_empty() {
            return Err(GalleryError::EmptyCatalog);
        }
        if current >= artworks.len() {
            return Err(GalleryError::IndexOutOfRange {
                index: current,
                len: artworks.len(),
            });
        }
        Ok(Self { artworks, current })
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_artwork(&self) -> &ArtworkRecord {
        &self.artworks[self.current]
    }

    pub fn neighbor_index(&self, direction: Direction) -> usize {
        neighbor_of(self.current, self.artworks.len(), direction)
    }

    pub fn step_angle(&self) -> f32 {
        ring_step(self.artworks.len())
    }

    // Only the navigation controller's completion path may move the current index.
    pub(crate) fn commit(&mut self, index: usize) {
        debug_assert!(index < self.artworks.len());
        self.current = index;
    }
}
