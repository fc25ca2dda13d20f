use glam::Vec3;

use crate::foundation::ColorRgba;

/// The surface a host UI node exposes to the effect engine.
///
/// Scale, position, and rotation are mandatory. Alpha (a group-level opacity)
/// and tint color are optional capabilities: a target that returns `None`
/// from the getter never receives the matching setter call, and Fade/Color
/// effects silently skip it.
pub trait EffectTarget {
    fn scale(&self) -> Vec3;

    fn set_scale(&mut self, scale: Vec3);

    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    /// Local rotation as euler angles in degrees.
    fn rotation(&self) -> Vec3;

    fn set_rotation(&mut self, euler: Vec3);

    fn alpha(&self) -> Option<f32> {
        None
    }

    fn set_alpha(&mut self, _alpha: f32) {}

    fn color(&self) -> Option<ColorRgba> {
        None
    }

    fn set_color(&mut self, _color: ColorRgba) {}
}

/// A target's baseline state, captured before any effect first runs.
///
/// The scheduler captures one snapshot per target lifetime and composes every
/// effect against it, so repeated or looping playback never drifts. It is the
/// unconditional restoration point for
/// [`EffectScheduler::reset_to_original`](crate::scheduler::EffectScheduler::reset_to_original).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TargetSnapshot {
    scale: Vec3,
    position: Vec3,
    rotation: Vec3,
    alpha: Option<f32>,
    color: Option<ColorRgba>,
}

impl TargetSnapshot {
    pub fn capture(target: &dyn EffectTarget) -> Self {
        Self {
            scale: target.scale(),
            position: target.position(),
            rotation: target.rotation(),
            alpha: target.alpha(),
            color: target.color(),
        }
    }

    /// Writes every captured field back. Optional fields are written only if
    /// the target reported them at capture time.
    pub fn restore(&self, target: &mut dyn EffectTarget) {
        target.set_scale(self.scale);
        target.set_position(self.position);
        target.set_rotation(self.rotation);

        if let Some(alpha) = self.alpha {
            target.set_alpha(alpha);
        }

        if let Some(color) = self.color {
            target.set_color(color);
        }
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn alpha(&self) -> Option<f32> {
        self.alpha
    }

    pub fn color(&self) -> Option<ColorRgba> {
        self.color
    }
}
