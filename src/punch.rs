use std::f32::consts::TAU;

/// Damped-oscillation sample driving the punch effect kinds.
///
/// `vibrato` is the number of full oscillations over the pass, `elasticity`
/// scales the amplitude. The linear decay forces the sample to zero at
/// `t = 1`, and `sin(0) = 0` makes it zero at `t = 0`, so a punch always
/// starts and ends exactly at the baseline.
pub fn punch(t: f32, vibrato: u32, elasticity: f32) -> f32 {
    let decay = 1. - t;

    f32::sin(t * vibrato as f32 * TAU) * decay * elasticity
}
