//! Ray casting against the gallery layout.
//!
//! Elements are oriented boxes, so the ray is moved into each element's local
//! frame and tested against an axis-aligned slab there. Layout transforms are
//! rigid, which keeps local and world distances equal.

use crate::scene::{ElementKind, GalleryLayout};
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }
}

/// One intersected element and its distance along the ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub kind: ElementKind,
    pub distance: f32,
}

/// Hits sorted nearest first.
pub type PickHits = SmallVec<[PickHit; 8]>;

/// Distance along `ray` to the box centred at the origin of `world` with the
/// given half extents, or `None` if it misses or lies behind the origin.
pub fn ray_box(ray: &Ray, world: &Mat4, half_extents: Vec3) -> Option<f32> {
    let inv = world.inverse();
    let o = inv.transform_point3(ray.origin);
    let d = inv.transform_vector3(ray.direction);

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let (oa, da, ha) = (o[axis], d[axis], half_extents[axis]);
        if da.abs() < 1e-8 {
            // Parallel to this slab: inside it or never.
            if oa < -ha || oa > ha {
                return None;
            }
            continue;
        }
        let inv_d = 1.0 / da;
        let mut t0 = (-ha - oa) * inv_d;
        let mut t1 = (ha - oa) * inv_d;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Cast `ray` through every element of `layout` with the root turned to
/// `root_rotation`.
pub fn pick(ray: &Ray, layout: &GalleryLayout, root_rotation: f32) -> PickHits {
    let mut hits: PickHits = layout
        .elements()
        .iter()
        .filter_map(|e| {
            ray_box(ray, &e.world_matrix(root_rotation), e.half_extents).map(|distance| PickHit {
                kind: e.kind,
                distance,
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_box_front_face_distance() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let world = Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0));
        let t = ray_box(&ray, &world, Vec3::new(1.5, 1.0, 0.05)).unwrap();
        assert!((t - 3.95).abs() < 1e-5);
    }

    #[test]
    fn ray_box_miss_and_behind() {
        let world = Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0));
        let sideways = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(ray_box(&sideways, &world, Vec3::splat(0.5)).is_none());
        let away = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(ray_box(&away, &world, Vec3::splat(0.5)).is_none());
    }

    #[test]
    fn ray_box_from_inside_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray_box(&ray, &Mat4::IDENTITY, Vec3::splat(2.0)).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn ray_box_respects_rotation() {
        // A thin panel turned edge-on to the ray is missed off-centre.
        let world = Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0))
            * Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let half = Vec3::new(1.5, 1.0, 0.05);
        let off_centre = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::NEG_Z);
        assert!(ray_box(&off_centre, &world, half).is_none());
        let centre = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let t = ray_box(&centre, &world, half).unwrap();
        assert!((t - 2.5).abs() < 1e-4);
    }
}
