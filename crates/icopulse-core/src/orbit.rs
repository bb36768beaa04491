//! Damped orbit/pan/zoom camera controls.
//!
//! Pointer deltas accumulate into pending rotation, pan and zoom amounts;
//! `update` applies a `damping` fraction of them to the camera each frame
//! and decays the remainder, so motion eases out after the pointer stops.

use crate::camera::Camera;
use crate::config::OrbitConfig;
use crate::constants::ORBIT_POLAR_EPSILON;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

/// What a pointer drag does to the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    Rotate,
    Pan,
}

impl DragKind {
    /// Primary button rotates; secondary and middle pan.
    pub fn for_button(button: i16) -> Option<DragKind> {
        match button {
            0 => Some(DragKind::Rotate),
            1 | 2 => Some(DragKind::Pan),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    cfg: OrbitConfig,
    delta_theta: f32,
    delta_phi: f32,
    pan_offset: Vec3,
    scale: f32,
}

impl OrbitControls {
    pub fn new(cfg: OrbitConfig) -> Self {
        Self {
            cfg,
            delta_theta: 0.0,
            delta_phi: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Queue a rotation from a pointer delta in pixels.
    pub fn rotate(&mut self, delta_px: Vec2, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * delta_px.x / h * self.cfg.rotate_speed;
        self.delta_phi -= TAU * delta_px.y / h * self.cfg.rotate_speed;
    }

    /// Queue a screen-space pan from a pointer delta in pixels.
    pub fn pan(&mut self, camera: &Camera, delta_px: Vec2, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let offset = camera.eye - camera.target;
        let target_distance = offset.length() * (camera.fovy_radians * 0.5).tan();
        let forward = (-offset).normalize_or_zero();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        self.pan_offset -= right * (2.0 * delta_px.x * target_distance / h);
        self.pan_offset += up * (2.0 * delta_px.y * target_distance / h);
    }

    /// Queue a zoom step; negative `delta_y` moves the camera closer.
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.scale *= self.cfg.zoom_step;
        } else if delta_y > 0.0 {
            self.scale /= self.cfg.zoom_step;
        }
    }

    /// Apply the damped share of pending motion to `camera`.
    pub fn update(&mut self, camera: &mut Camera) {
        if !self.is_settling() && self.scale == 1.0 {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.pan_offset = Vec3::ZERO;
            return;
        }
        let damping = self.cfg.damping;
        let offset = camera.eye - camera.target;
        let radius = offset.length().max(f32::EPSILON);
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        theta += self.delta_theta * damping;
        phi += self.delta_phi * damping;
        phi = phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        let radius = (radius * self.scale).clamp(self.cfg.min_distance, self.cfg.max_distance);

        camera.target += self.pan_offset * damping;
        let sin_phi = phi.sin();
        let new_offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        camera.eye = camera.target + new_offset;

        self.delta_theta *= 1.0 - damping;
        self.delta_phi *= 1.0 - damping;
        self.pan_offset *= 1.0 - damping;
        self.scale = 1.0;
    }

    /// True while queued motion is still noticeable.
    pub fn is_settling(&self) -> bool {
        self.delta_theta.abs() > 1e-5
            || self.delta_phi.abs() > 1e-5
            || self.pan_offset.length_squared() > 1e-10
    }
}

/// Camera plus orbit controls, gated by an enabled flag.
///
/// Disabled controls ignore pointer input and `update` does nothing, which
/// freezes the camera wherever it was.
#[derive(Clone, Debug)]
pub struct ViewControl {
    camera: Camera,
    orbit: OrbitControls,
    enabled: bool,
    drag: Option<DragKind>,
    last_pointer: Vec2,
    viewport: (u32, u32),
}

impl ViewControl {
    pub fn new(camera: Camera, cfg: OrbitConfig) -> Self {
        Self {
            camera,
            orbit: OrbitControls::new(cfg),
            enabled: true,
            drag: None,
            last_pointer: Vec2::ZERO,
            viewport: (1, 1),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("[view] controls {}", if enabled { "unlocked" } else { "locked" });
        }
        self.enabled = enabled;
        if !enabled {
            self.drag = None;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn update(&mut self) {
        if !self.enabled {
            return;
        }
        self.orbit.update(&mut self.camera);
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = (width, height);
        self.camera.set_viewport(width, height);
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn pointer_down(&mut self, button: i16, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        self.drag = DragKind::for_button(button);
        self.last_pointer = Vec2::new(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        let Some(kind) = self.drag else {
            return;
        };
        let pos = Vec2::new(x, y);
        let delta = pos - self.last_pointer;
        self.last_pointer = pos;
        let h = self.viewport.1 as f32;
        match kind {
            DragKind::Rotate => self.orbit.rotate(delta, h),
            DragKind::Pan => self.orbit.pan(&self.camera, delta, h),
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if !self.enabled {
            return;
        }
        self.orbit.zoom(delta_y);
    }
}
