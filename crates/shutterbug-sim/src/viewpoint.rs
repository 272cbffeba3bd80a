//! The stationary viewpoint: look, crouch and zoom.
//!
//! Only its eye position and forward direction matter to the capture
//! controller, which casts from them.

use glam::DVec3;

use shutterbug_core::state::ViewpointView;
use shutterbug_core::types::Position;

use crate::config::ViewpointConfig;

#[derive(Debug, Clone)]
pub struct Viewpoint {
    base: Position,
    yaw_deg: f64,
    pitch_deg: f64,
    eye_height: f64,
    crouching: bool,
    zoomed: bool,
}

impl Viewpoint {
    pub fn new(config: &ViewpointConfig) -> Self {
        Self {
            base: config.base,
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            eye_height: config.standing_eye_height,
            crouching: false,
            zoomed: false,
        }
    }

    /// Apply raw look input. Deltas are scaled by sensitivity and `dt`;
    /// positive pitch input looks up.
    pub fn look(&mut self, yaw_delta: f64, pitch_delta: f64, dt: f64, config: &ViewpointConfig) {
        self.yaw_deg = (self.yaw_deg + yaw_delta * config.mouse_sensitivity * dt).rem_euclid(360.0);
        self.pitch_deg = (self.pitch_deg - pitch_delta * config.mouse_sensitivity * dt).clamp(
            config.upper_look_limit_deg,
            config.lower_look_limit_deg,
        );
    }

    pub fn toggle_crouch(&mut self) {
        self.crouching = !self.crouching;
    }

    pub fn set_zoom(&mut self, engaged: bool) {
        self.zoomed = engaged;
    }

    /// Ease the eye height toward the standing or crouching height.
    pub fn update(&mut self, dt: f64, config: &ViewpointConfig) {
        let target = if self.crouching {
            config.crouching_eye_height
        } else {
            config.standing_eye_height
        };
        let t = (dt * config.crouch_speed).clamp(0.0, 1.0);
        self.eye_height += (target - self.eye_height) * t;
    }

    pub fn eye(&self) -> Position {
        self.base.offset(0.0, self.eye_height, 0.0)
    }

    /// Unit view direction. Yaw 0 / pitch 0 faces +z.
    pub fn forward(&self) -> DVec3 {
        let yaw = self.yaw_deg.to_radians();
        let pitch = self.pitch_deg.to_radians();
        DVec3::new(
            yaw.sin() * pitch.cos(),
            -pitch.sin(),
            yaw.cos() * pitch.cos(),
        )
    }

    pub fn fov_deg(&self, config: &ViewpointConfig) -> f64 {
        if self.zoomed {
            config.zoomed_fov_deg
        } else {
            config.default_fov_deg
        }
    }

    pub fn eye_height(&self) -> f64 {
        self.eye_height
    }

    pub fn pitch_deg(&self) -> f64 {
        self.pitch_deg
    }

    /// Point the view at a scene position.
    #[cfg(test)]
    pub fn look_at(&mut self, target: Position, config: &ViewpointConfig) {
        let d = target.to_dvec3() - self.eye().to_dvec3();
        if d.length_squared() == 0.0 {
            return;
        }
        self.yaw_deg = d.x.atan2(d.z).to_degrees().rem_euclid(360.0);
        let horizontal = (d.x * d.x + d.z * d.z).sqrt();
        self.pitch_deg = (-d.y.atan2(horizontal).to_degrees())
            .clamp(config.upper_look_limit_deg, config.lower_look_limit_deg);
    }

    pub fn view(&self, config: &ViewpointConfig) -> ViewpointView {
        ViewpointView {
            eye: self.eye(),
            yaw_deg: self.yaw_deg,
            pitch_deg: self.pitch_deg,
            crouching: self.crouching,
            zoomed: self.zoomed,
            fov_deg: self.fov_deg(config),
        }
    }
}
