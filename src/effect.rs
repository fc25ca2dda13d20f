use std::time::Duration;

use glam::Vec3;

use crate::easing::EasingCurve;
use crate::foundation::ColorRgba;

/// What a running effect animates on its target.
///
/// The `Punch*` kinds deliberately bypass the easing curve: they sample
/// [`crate::punch`] on raw pass time instead, since the oscillation carries
/// its own physical decay.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EffectKind {
    Scale,
    Rotation,
    Move,
    Fade,
    Color,
    PunchScale,
    PunchRotation,
    PunchMove,
}

impl EffectKind {
    pub(crate) fn is_punch(self) -> bool {
        matches!(
            self,
            EffectKind::PunchScale | EffectKind::PunchRotation | EffectKind::PunchMove
        )
    }
}

/// Behavior when a pass reaches its end.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LoopKind {
    /// Play one forward pass and stop.
    #[default]
    None,
    /// Restart forward from the beginning each pass.
    Restart,
    /// Alternate direction each pass: forward, backward, forward, ...
    PingPong,
}

/// UI/input event kinds that can start bound effects.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TriggerKind {
    Manual,
    OnActivate,
    OnPointerDown,
    OnPointerUp,
    OnPointerEnter,
    OnPointerExit,
    OnClick,
}

/// Immutable configuration for one animated transition.
///
/// Built with a per-kind constructor plus consuming modifiers:
///
/// ```
/// use std::time::Duration;
/// use glam::Vec3;
/// use uifeel::{EffectDefinition, LoopKind};
///
/// let press = EffectDefinition::scale(Vec3::new(0.92, 0.92, 1.))
///     .relative()
///     .duration(Duration::from_millis(100));
///
/// let pulse = EffectDefinition::scale(Vec3::splat(1.1))
///     .relative()
///     .loops(LoopKind::PingPong, -1);
/// ```
#[derive(Debug, Clone)]
pub struct EffectDefinition {
    pub(crate) kind: EffectKind,
    pub(crate) duration: f32,
    pub(crate) delay: f32,
    pub(crate) curve: EasingCurve,
    pub(crate) target_scale: Vec3,
    pub(crate) scale_relative: bool,
    pub(crate) target_rotation: Vec3,
    pub(crate) move_offset: Vec3,
    pub(crate) target_alpha: f32,
    pub(crate) target_color: ColorRgba,
    pub(crate) vibrato: u32,
    pub(crate) elasticity: f32,
    pub(crate) loop_kind: LoopKind,
    pub(crate) loop_count: i32,
}

impl EffectDefinition {
    fn base(kind: EffectKind) -> Self {
        Self {
            kind,
            duration: Duration::from_millis(300).as_secs_f32(),
            delay: 0.,
            curve: EasingCurve::Preset(crate::easing::curves::ease_out_quad),
            target_scale: Vec3::ONE,
            scale_relative: false,
            target_rotation: Vec3::ZERO,
            move_offset: Vec3::ZERO,
            target_alpha: 1.,
            target_color: ColorRgba::WHITE,
            vibrato: 10,
            elasticity: 1.,
            loop_kind: LoopKind::None,
            loop_count: 0,
        }
    }

    /// Animates toward `target_scale`, absolute by default; see
    /// [`EffectDefinition::relative`].
    pub fn scale(target_scale: Vec3) -> Self {
        Self {
            target_scale,
            ..Self::base(EffectKind::Scale)
        }
    }

    /// Rotates by `euler` degrees on top of the baseline rotation.
    pub fn rotation(euler: Vec3) -> Self {
        Self {
            target_rotation: euler,
            ..Self::base(EffectKind::Rotation)
        }
    }

    /// Moves by `offset` relative to the baseline position.
    pub fn move_by(offset: Vec3) -> Self {
        Self {
            move_offset: offset,
            ..Self::base(EffectKind::Move)
        }
    }

    /// Fades the target's group alpha toward `alpha`.
    pub fn fade(alpha: f32) -> Self {
        Self {
            target_alpha: alpha,
            ..Self::base(EffectKind::Fade)
        }
    }

    /// Blends the target's tint toward `color`.
    pub fn color(color: ColorRgba) -> Self {
        Self {
            target_color: color,
            ..Self::base(EffectKind::Color)
        }
    }

    /// Oscillates the scale around the baseline with amplitude `strength`.
    pub fn punch_scale(strength: Vec3, vibrato: u32, elasticity: f32) -> Self {
        Self {
            target_scale: strength,
            vibrato,
            elasticity,
            ..Self::base(EffectKind::PunchScale)
        }
    }

    /// Oscillates the rotation around the baseline with amplitude `strength`
    /// euler degrees.
    pub fn punch_rotation(strength: Vec3, vibrato: u32, elasticity: f32) -> Self {
        Self {
            target_rotation: strength,
            vibrato,
            elasticity,
            ..Self::base(EffectKind::PunchRotation)
        }
    }

    /// Oscillates the position around the baseline with amplitude `strength`.
    pub fn punch_move(strength: Vec3, vibrato: u32, elasticity: f32) -> Self {
        Self {
            move_offset: strength,
            vibrato,
            elasticity,
            ..Self::base(EffectKind::PunchMove)
        }
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration.as_secs_f32();

        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay.as_secs_f32();

        self
    }

    pub fn curve(mut self, curve: impl Into<EasingCurve>) -> Self {
        self.curve = curve.into();

        self
    }

    /// Marks a scale effect as a multiplier on the baseline rather than an
    /// absolute end value.
    pub fn relative(mut self) -> Self {
        self.scale_relative = true;

        self
    }

    /// Sets the loop policy. `loop_count` of `-1` loops forever, `0` plays
    /// once regardless of `loop_kind`, and a positive count bounds the number
    /// of repetitions (a PingPong loop counts one forward+backward pair).
    pub fn loops(mut self, loop_kind: LoopKind, loop_count: i32) -> Self {
        self.loop_kind = loop_kind;
        self.loop_count = loop_count;

        self
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn duration_secs(&self) -> f32 {
        self.duration
    }

    pub fn delay_secs(&self) -> f32 {
        self.delay
    }

    pub fn loop_kind(&self) -> LoopKind {
        self.loop_kind
    }

    pub fn loop_count(&self) -> i32 {
        self.loop_count
    }
}

/// Associates a trigger with the effect it starts.
///
/// An ordered list of bindings is attached per target; the binding's position
/// in that list is the slot its running instance occupies. Several bindings
/// may share a trigger kind, in which case they all fire together.
#[derive(Debug, Clone)]
pub struct TriggerBinding {
    pub trigger: TriggerKind,
    pub effect: EffectDefinition,
}

impl TriggerBinding {
    pub fn new(trigger: TriggerKind, effect: EffectDefinition) -> Self {
        Self { trigger, effect }
    }
}
