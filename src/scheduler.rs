use glam::Vec3;
use smallvec::SmallVec;

use crate::effect::{EffectDefinition, EffectKind, LoopKind, TriggerBinding, TriggerKind};
use crate::foundation::{Lerp, clamp01};
use crate::punch::punch;
use crate::target::{EffectTarget, TargetSnapshot};

// Guard against division by zero for zero/negative durations. A config
// leniency, not a correctness guarantee.
const MIN_DURATION: f32 = 0.000_001;

/// One occupied slot: the live state of a binding's effect instance.
#[derive(Debug, Clone)]
struct RunningEffect {
    delay_remaining: f32,
    elapsed: f32,
    forward: bool,
    completed_passes: i32,
}

impl RunningEffect {
    fn start(effect: &EffectDefinition) -> Self {
        Self {
            delay_remaining: effect.delay.max(0.),
            elapsed: 0.,
            forward: true,
            completed_passes: 0,
        }
    }
}

/// Drives the effects bound to one target.
///
/// Owns a slot table parallel to the binding list: slot `i` holds the running
/// instance of binding `i`, or nothing. Starting a binding whose slot is
/// occupied replaces the occupant synchronously. The host feeds pointer and
/// activation events through [`EffectScheduler::play`] and drives playback by
/// calling [`EffectScheduler::tick`] once per rendered frame with wall-clock
/// delta time, so effects keep real-time speed even while gameplay time is
/// paused or slowed.
///
/// Slots advance independently in binding order; when two running effects
/// write the same target field, the later slot wins for that frame.
#[derive(Debug, Clone)]
pub struct EffectScheduler {
    bindings: SmallVec<[TriggerBinding; 4]>,
    slots: SmallVec<[Option<RunningEffect>; 4]>,
    baseline: Option<TargetSnapshot>,
    activated: bool,
}

impl EffectScheduler {
    pub fn new(bindings: impl IntoIterator<Item = TriggerBinding>) -> Self {
        let bindings: SmallVec<[TriggerBinding; 4]> = bindings.into_iter().collect();
        let slots = bindings.iter().map(|_| None).collect();

        Self {
            bindings,
            slots,
            baseline: None,
            activated: false,
        }
    }

    pub fn bindings(&self) -> &[TriggerBinding] {
        &self.bindings
    }

    /// Whether any slot is occupied.
    pub fn is_playing(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// The baseline captured on first playback, if any.
    pub fn baseline(&self) -> Option<&TargetSnapshot> {
        self.baseline.as_ref()
    }

    /// Starts every binding matching `trigger`. A trigger with no matching
    /// bindings is a silent no-op.
    pub fn play(&mut self, trigger: TriggerKind, target: &mut dyn EffectTarget) {
        let mut started = 0;

        for index in 0..self.bindings.len() {
            if self.bindings[index].trigger == trigger {
                self.ensure_baseline(target);
                self.slots[index] = Some(RunningEffect::start(&self.bindings[index].effect));
                started += 1;
            }
        }

        if started == 0 {
            log::debug!("No bindings for trigger {trigger:?}");
        }
    }

    /// Starts the binding at `index` regardless of its trigger kind.
    /// Out of range is a silent no-op.
    pub fn play_at(&mut self, index: usize, target: &mut dyn EffectTarget) {
        if index >= self.bindings.len() {
            log::debug!(
                "play_at({index}) out of range, {} bindings",
                self.bindings.len()
            );
            return;
        }

        self.ensure_baseline(target);
        self.slots[index] = Some(RunningEffect::start(&self.bindings[index].effect));
    }

    /// Fires [`TriggerKind::OnActivate`] the first time the target becomes
    /// active; later calls do nothing.
    pub fn activate(&mut self, target: &mut dyn EffectTarget) {
        if self.activated {
            return;
        }

        self.activated = true;
        self.play(TriggerKind::OnActivate, target);
    }

    /// Cancels every running slot, leaving the target at its current pose.
    pub fn stop_all(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    /// Cancels every running slot and restores the captured baseline. Does
    /// nothing to the target if no effect ever ran.
    pub fn reset_to_original(&mut self, target: &mut dyn EffectTarget) {
        self.stop_all();

        if let Some(baseline) = &self.baseline {
            baseline.restore(target);
        }
    }

    /// Re-reads the baseline from the target's current state. Playback then
    /// composes against the new snapshot.
    pub fn recapture(&mut self, target: &dyn EffectTarget) {
        self.baseline = Some(TargetSnapshot::capture(target));
    }

    /// Advances every occupied slot by `delta_time` seconds and writes the
    /// resulting pose into the target. Slots whose pass sequence finished are
    /// removed.
    pub fn tick(&mut self, delta_time: f32, target: &mut dyn EffectTarget) {
        let Some(baseline) = self.baseline else {
            return;
        };

        for index in 0..self.slots.len() {
            let Some(mut run) = self.slots[index].take() else {
                continue;
            };

            let effect = &self.bindings[index].effect;

            if advance(effect, &baseline, &mut run, delta_time, target) {
                self.slots[index] = Some(run);
            }
        }
    }

    fn ensure_baseline(&mut self, target: &dyn EffectTarget) {
        if self.baseline.is_none() {
            self.baseline = Some(TargetSnapshot::capture(target));
        }
    }
}

/// Advances one slot. Returns `false` when the slot's pass sequence is done.
fn advance(
    effect: &EffectDefinition,
    baseline: &TargetSnapshot,
    run: &mut RunningEffect,
    delta_time: f32,
    target: &mut dyn EffectTarget,
) -> bool {
    let mut dt = delta_time.max(0.);

    // Consume the delay first; whatever is left of the frame flows into the
    // pass itself.
    if run.delay_remaining > 0. {
        if dt < run.delay_remaining {
            run.delay_remaining -= dt;
            return true;
        }

        dt -= run.delay_remaining;
        run.delay_remaining = 0.;
    }

    let duration = effect.duration.max(MIN_DURATION);

    run.elapsed += dt;

    let raw_t = clamp01(run.elapsed / duration);
    let t = if run.forward { raw_t } else { 1. - raw_t };

    // Punch kinds sample their own decaying oscillation on raw pass time;
    // the easing curve applies to everything else.
    let sample = if effect.kind.is_punch() {
        punch(t, effect.vibrato, effect.elasticity)
    } else {
        effect.curve.evaluate(t)
    };

    apply(effect, baseline, sample, target);

    if run.elapsed < duration {
        return true;
    }

    // Pass completed; the final sample above was taken at the clamped
    // endpoint, so the slot ends exactly on its end value.
    run.completed_passes += 1;

    if effect.loop_count == 0 {
        return false;
    }

    match effect.loop_kind {
        LoopKind::None => false,
        LoopKind::Restart => {
            if effect.loop_count > 0 && run.completed_passes >= effect.loop_count {
                return false;
            }

            run.elapsed = 0.;
            true
        }
        LoopKind::PingPong => {
            // One loop is a full forward+backward pair.
            if effect.loop_count > 0 && run.completed_passes >= effect.loop_count * 2 {
                return false;
            }

            run.forward = !run.forward;
            run.elapsed = 0.;
            true
        }
    }
}

/// Writes `sample` into the target, composed against the baseline per kind.
fn apply(
    effect: &EffectDefinition,
    baseline: &TargetSnapshot,
    sample: f32,
    target: &mut dyn EffectTarget,
) {
    match effect.kind {
        EffectKind::Scale => {
            let scale = if effect.scale_relative {
                baseline.scale() * Vec3::ONE.lerp(effect.target_scale, sample)
            } else {
                baseline.scale().lerp(effect.target_scale, sample)
            };

            target.set_scale(scale);
        }
        EffectKind::Rotation => {
            target.set_rotation(baseline.rotation() + effect.target_rotation * sample);
        }
        EffectKind::Move => {
            target.set_position(baseline.position() + effect.move_offset * sample);
        }
        EffectKind::Fade => {
            // Skipped silently when the target has no opacity group.
            if let Some(alpha) = baseline.alpha() {
                target.set_alpha(f32::lerp(alpha, effect.target_alpha, sample));
            }
        }
        EffectKind::Color => {
            if let Some(color) = baseline.color() {
                target.set_color(color.lerp(effect.target_color, sample));
            }
        }
        EffectKind::PunchScale => {
            target.set_scale(baseline.scale() + effect.target_scale * sample);
        }
        EffectKind::PunchRotation => {
            target.set_rotation(baseline.rotation() + effect.target_rotation * sample);
        }
        EffectKind::PunchMove => {
            target.set_position(baseline.position() + effect.move_offset * sample);
        }
    }
}
