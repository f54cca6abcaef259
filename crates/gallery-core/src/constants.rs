use glam::Vec3;
use std::time::Duration;

// Shared scene layout and animation tuning used by every frontend.

// Ring layout, expressed in each artwork's base-node frame
pub const ARTWORK_DISTANCE: f32 = 4.0; // artworks sit this far in front of the ring axis
pub const ARTWORK_SIZE: Vec3 = Vec3::new(3.0, 2.0, 0.1);
pub const BORDER_SIZE: Vec3 = Vec3::new(3.1, 2.1, 0.08); // slightly larger than the artwork
pub const ARROW_SIZE: f32 = 0.3;
pub const ARROW_OFFSET_X: f32 = 1.75; // arrows flank the artwork on both sides
pub const ARROW_THICKNESS: f32 = 0.002; // arrows are planes; give them a sliver of depth for picking

// Floor mirror
pub const FLOOR_RADIUS: f32 = 10.0;
pub const FLOOR_Y: f32 = -1.1;

// Spotlight above the facing artwork
pub const SPOT_POSITION: Vec3 = Vec3::new(0.0, 5.0, 0.0);
pub const SPOT_TARGET: Vec3 = Vec3::new(0.0, 0.5, -5.0);
pub const SPOT_INTENSITY: f32 = 100.0;
pub const SPOT_DISTANCE: f32 = 10.0;
pub const SPOT_ANGLE: f32 = 0.65; // radians
pub const SPOT_PENUMBRA: f32 = 1.0;

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Navigation
pub const TRANSITION_DURATION: Duration = Duration::from_millis(1000);
