//! View Controls
//!
//! Keyboard-driven rotation and translation of the terrain view.
//! Decoupled from winit: the viewer maps its physical keys onto [`KeyCode`].

use glam::{Mat4, Vec3};

use crate::config::ViewConfig;

/// Degrees added per rotation key press.
pub const ROTATE_STEP_DEGREES: f32 = 5.0;
/// World units moved per translation key press.
pub const TRANSLATE_STEP: f32 = 0.05;

const FOV_Y_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.01;
const Z_FAR: f32 = 100.0;

/// Keys the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Q,
    E,
    Space,
    Shift,
    R,
    G,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    /// Add degrees about X, Y, Z
    Rotate(Vec3),
    /// Add a world-space offset
    Translate(Vec3),
    Reset,
    /// Rebuild the terrain with fresh random streams
    Regenerate,
}

impl ViewAction {
    pub fn for_key(key: KeyCode) -> Self {
        let r = ROTATE_STEP_DEGREES;
        let t = TRANSLATE_STEP;
        match key {
            KeyCode::ArrowUp => ViewAction::Rotate(Vec3::new(r, 0.0, 0.0)),
            KeyCode::ArrowDown => ViewAction::Rotate(Vec3::new(-r, 0.0, 0.0)),
            KeyCode::ArrowLeft => ViewAction::Rotate(Vec3::new(0.0, -r, 0.0)),
            KeyCode::ArrowRight => ViewAction::Rotate(Vec3::new(0.0, r, 0.0)),
            KeyCode::Q => ViewAction::Rotate(Vec3::new(0.0, 0.0, -r)),
            KeyCode::E => ViewAction::Rotate(Vec3::new(0.0, 0.0, r)),
            KeyCode::W => ViewAction::Translate(Vec3::new(0.0, 0.0, t)),
            KeyCode::S => ViewAction::Translate(Vec3::new(0.0, 0.0, -t)),
            KeyCode::A => ViewAction::Translate(Vec3::new(-t, 0.0, 0.0)),
            KeyCode::D => ViewAction::Translate(Vec3::new(t, 0.0, 0.0)),
            KeyCode::Space => ViewAction::Translate(Vec3::new(0.0, t, 0.0)),
            KeyCode::Shift => ViewAction::Translate(Vec3::new(0.0, -t, 0.0)),
            KeyCode::R => ViewAction::Reset,
            KeyCode::G => ViewAction::Regenerate,
        }
    }
}

/// Current translation and rotation of the terrain.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub translation: Vec3,
    /// Degrees about X, Y, Z
    pub angles: Vec3,
    home: ViewConfig,
}

impl ViewState {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            translation: config.translation,
            angles: config.angles,
            home: config.clone(),
        }
    }

    /// Apply an action. Returns true if the terrain must be regenerated.
    pub fn apply(&mut self, action: ViewAction) -> bool {
        match action {
            ViewAction::Rotate(delta) => {
                self.angles = wrap_degrees(self.angles + delta);
            }
            ViewAction::Translate(delta) => self.translation += delta,
            ViewAction::Reset => {
                self.translation = self.home.translation;
                self.angles = self.home.angles;
            }
            ViewAction::Regenerate => return true,
        }
        false
    }

    /// Convenience for key presses. Returns true if the terrain must be regenerated.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        self.apply(ViewAction::for_key(key))
    }

    /// Model transform: rotate about X, then Y, then Z, then translate.
    pub fn model_matrix(&self) -> Mat4 {
        let radians = Vec3::new(
            self.angles.x.to_radians(),
            self.angles.y.to_radians(),
            self.angles.z.to_radians(),
        );
        Mat4::from_translation(self.translation)
            * Mat4::from_rotation_z(radians.z)
            * Mat4::from_rotation_y(radians.y)
            * Mat4::from_rotation_x(radians.x)
    }

    pub fn model_view_projection(&self, aspect: f32) -> Mat4 {
        let projection =
            Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect.max(f32::EPSILON), Z_NEAR, Z_FAR);
        // Camera sits at the origin looking down -Z; the model is pushed away from it.
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0));
        projection * view * self.model_matrix()
    }
}

fn wrap_degrees(angles: Vec3) -> Vec3 {
    Vec3::new(
        angles.x.rem_euclid(360.0),
        angles.y.rem_euclid(360.0),
        angles.z.rem_euclid(360.0),
    )
}
