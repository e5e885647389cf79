//! View-side camera types shared by the native and web frontends.
//!
//! The scene is Z-up in inches. [`OrbitCamera`] holds the interactive state
//! (drag to orbit, wheel to zoom) and produces a plain [`Camera`] per frame.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::constants::{CAMERA_EYE_DIRECTION, CAMERA_FOVY_RADIANS};
use crate::geometry::Bounds;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Map a world point to pixel coordinates (origin top-left).
///
/// Returns `None` when the point is behind the eye or outside the depth range.
pub fn project_to_screen(view_proj: Mat4, world: Vec3, width: f32, height: f32) -> Option<Vec2> {
    let clip = view_proj * Vec4::new(world.x, world.y, world.z, 1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !(0.0..=1.0).contains(&ndc.z) {
        return None;
    }
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * width,
        (1.0 - ndc.y) * 0.5 * height,
    ))
}

const MIN_PITCH: f32 = -1.45;
const MAX_PITCH: f32 = 1.45;
const ORBIT_RADIANS_PER_PX: f32 = 0.008;

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    /// Angle around Z, measured from +X.
    pub yaw: f32,
    /// Elevation above the XY plane.
    pub pitch: f32,
    pub distance: f32,
    min_distance: f32,
    max_distance: f32,
    home: (f32, f32, f32),
}

impl OrbitCamera {
    /// Look at the centre of `bounds` from `direction`, far enough back that
    /// the whole box fits in the default field of view.
    pub fn framing(bounds: &Bounds, direction: Vec3) -> Self {
        let target = bounds.center();
        let radius = (bounds.size().length() * 0.5).max(1.0);
        let distance = radius / (CAMERA_FOVY_RADIANS * 0.5).sin();
        let dir = direction.normalize_or_zero();
        let dir = if dir == Vec3::ZERO { Vec3::X } else { dir };
        let yaw = dir.y.atan2(dir.x);
        let pitch = dir.z.clamp(-1.0, 1.0).asin().clamp(MIN_PITCH, MAX_PITCH);
        Self {
            target,
            yaw,
            pitch,
            distance,
            min_distance: radius * 0.05,
            max_distance: distance * 6.0,
            home: (yaw, pitch, distance),
        }
    }

    /// Default framing for a rack scene.
    pub fn for_scene(bounds: &Bounds) -> Self {
        Self::framing(bounds, Vec3::from(CAMERA_EYE_DIRECTION))
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(cp * cy, cp * sy, sp) * self.distance
    }

    /// Rotate by a pointer drag in pixels. Dragging right spins the scene right.
    pub fn orbit(&mut self, dx_px: f32, dy_px: f32) {
        self.yaw -= dx_px * ORBIT_RADIANS_PER_PX;
        self.pitch = (self.pitch + dy_px * ORBIT_RADIANS_PER_PX).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Multiply the eye distance; factors below 1 move closer.
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
        }
    }

    /// Wheel delta to zoom factor; one notch (~100 units) is about 10%.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        self.zoom((delta_y * 0.001).exp());
    }

    pub fn reset(&mut self) {
        (self.yaw, self.pitch, self.distance) = self.home;
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Z,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: (self.distance * 0.01).max(0.1),
            zfar: self.distance * 4.0 + self.max_distance,
        }
    }
}
