//! Ring layout: where every artwork, border and arrow sits relative to the
//! gallery root, and which element identity each one carries.
//!
//! Hierarchy: root (yaw driven by navigation) -> base node per artwork
//! (fixed yaw `i * 2π/N`) -> border, artwork and the two arrows.

use crate::constants::*;
use crate::gallery::{neighbor_of, ring_step, Direction};
use crate::navigation::NavTarget;
use glam::{Mat4, Vec3};

/// Payload bound to an arrow when the layout is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowBinding {
    /// Artwork whose frame the arrow is mounted on.
    pub owner: usize,
    pub target: NavTarget,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Artwork { index: usize },
    Border { index: usize },
    Arrow(ArrowBinding),
}

/// A box-shaped pickable/renderable element.
#[derive(Clone, Debug)]
pub struct SceneElement {
    pub kind: ElementKind,
    /// Transform from the element's local frame to the root frame.
    pub local: Mat4,
    pub half_extents: Vec3,
}

impl SceneElement {
    /// Element-to-world transform for the given root yaw.
    #[inline]
    pub fn world_matrix(&self, root_rotation: f32) -> Mat4 {
        Mat4::from_rotation_y(root_rotation) * self.local
    }

    pub fn size(&self) -> Vec3 {
        self.half_extents * 2.0
    }
}

#[derive(Clone, Debug)]
pub struct GalleryLayout {
    count: usize,
    elements: Vec<SceneElement>,
}

impl GalleryLayout {
    pub fn new(count: usize) -> Self {
        let mut elements = Vec::with_capacity(count * 4);
        let front = Vec3::new(0.0, 0.0, -ARTWORK_DISTANCE);
        let arrow_half = Vec3::new(ARROW_SIZE * 0.5, ARROW_SIZE * 0.5, ARROW_THICKNESS * 0.5);
        for i in 0..count {
            let base = Mat4::from_rotation_y(base_yaw(i, count));
            let at = |offset: Vec3| base * Mat4::from_translation(offset);

            elements.push(SceneElement {
                kind: ElementKind::Border { index: i },
                local: at(front),
                half_extents: BORDER_SIZE * 0.5,
            });
            elements.push(SceneElement {
                kind: ElementKind::Artwork { index: i },
                local: at(front),
                half_extents: ARTWORK_SIZE * 0.5,
            });
            // The left arrow shows the next artwork, the right arrow the previous one.
            elements.push(SceneElement {
                kind: ElementKind::Arrow(ArrowBinding {
                    owner: i,
                    target: NavTarget::Advance(neighbor_of(i, count, Direction::Left)),
                }),
                local: at(front + Vec3::new(-ARROW_OFFSET_X, 0.0, 0.0)),
                half_extents: arrow_half,
            });
            elements.push(SceneElement {
                kind: ElementKind::Arrow(ArrowBinding {
                    owner: i,
                    target: NavTarget::Retreat(neighbor_of(i, count, Direction::Right)),
                }),
                local: at(front + Vec3::new(ARROW_OFFSET_X, 0.0, 0.0)),
                half_extents: arrow_half,
            });
        }
        log::debug!("[layout] {} artworks, {} elements", count, elements.len());
        Self { count, elements }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    pub fn arrows(&self) -> impl Iterator<Item = (&SceneElement, ArrowBinding)> + '_ {
        self.elements.iter().filter_map(|e| match e.kind {
            ElementKind::Arrow(binding) => Some((e, binding)),
            _ => None,
        })
    }
}

/// Fixed yaw of artwork `index`'s base node.
#[inline]
pub fn base_yaw(index: usize, count: usize) -> f32 {
    index as f32 * ring_step(count)
}

/// Floor disk under the ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Floor {
    pub radius: f32,
    pub y: f32,
}

impl Default for Floor {
    fn default() -> Self {
        Self {
            radius: FLOOR_RADIUS,
            y: FLOOR_Y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub target: Vec3,
    pub intensity: f32,
    pub distance: f32,
    /// Cone half-angle in radians.
    pub angle: f32,
    /// Fraction of the cone that fades out at the edge, 0..1.
    pub penumbra: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: SPOT_POSITION,
            target: SPOT_TARGET,
            intensity: SPOT_INTENSITY,
            distance: SPOT_DISTANCE,
            angle: SPOT_ANGLE,
            penumbra: SPOT_PENUMBRA,
        }
    }
}

impl SpotLight {
    #[inline]
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }
}
