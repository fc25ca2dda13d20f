/// A single key of a keyframed easing curve.
///
/// Tangents are slopes in value-per-normalized-time. [`CurveKey::new`] leaves
/// both tangents flat; use [`CurveKey::with_tangents`] for shaped segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
    pub in_tangent: f32,
    pub out_tangent: f32,
}

impl CurveKey {
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.,
            out_tangent: 0.,
        }
    }

    pub fn with_tangents(mut self, in_tangent: f32, out_tangent: f32) -> Self {
        self.in_tangent = in_tangent;
        self.out_tangent = out_tangent;

        self
    }
}

/// A time → multiplier mapping evaluated at normalized time `t ∈ [0, 1]`.
///
/// Output is not restricted to `[0, 1]`: overshoot presets such as
/// [`curves::ease_out_back`] legally exceed it.
#[derive(Debug, Clone)]
pub enum EasingCurve {
    /// A canonical ease shape.
    Preset(fn(f32) -> f32),
    /// Keys ordered by ascending time, interpolated with cubic Hermite
    /// segments. An empty key list evaluates as identity; a single key is
    /// constant.
    Keyframes(Vec<CurveKey>),
}

impl Default for EasingCurve {
    fn default() -> Self {
        EasingCurve::Preset(curves::linear)
    }
}

impl From<fn(f32) -> f32> for EasingCurve {
    fn from(curve_fn: fn(f32) -> f32) -> Self {
        EasingCurve::Preset(curve_fn)
    }
}

impl EasingCurve {
    /// Evaluates the curve at `t`. The caller clamps `t` to `[0, 1]` first.
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            EasingCurve::Preset(curve_fn) => curve_fn(t),
            EasingCurve::Keyframes(keys) => match keys.len() {
                0 => t,
                1 => keys[0].value,
                _ => evaluate_keys(keys, t),
            },
        }
    }
}

fn evaluate_keys(keys: &[CurveKey], t: f32) -> f32 {
    let first = &keys[0];
    let last = &keys[keys.len() - 1];

    if t <= first.time {
        return first.value;
    }

    if t >= last.time {
        return last.value;
    }

    for window in keys.windows(2) {
        let (from, to) = (&window[0], &window[1]);

        if t > to.time {
            continue;
        }

        let dt = to.time - from.time;

        // Coincident keys: snap to the later one.
        if dt <= 0. {
            return to.value;
        }

        let s = (t - from.time) / dt;

        return hermite(from.value, from.out_tangent * dt, to.value, to.in_tangent * dt, s);
    }

    last.value
}

/// Cubic Hermite basis over one segment; `m0`/`m1` are tangents pre-scaled by
/// the segment length.
fn hermite(p0: f32, m0: f32, p1: f32, m1: f32, s: f32) -> f32 {
    let s2 = s * s;
    let s3 = s2 * s;

    (2. * s3 - 3. * s2 + 1.) * p0
        + (s3 - 2. * s2 + s) * m0
        + (-2. * s3 + 3. * s2) * p1
        + (s3 - s2) * m1
}

pub mod curves {
    // Linear
    pub fn linear(t: f32) -> f32 {
        t
    }

    pub fn smooth_step(t: f32) -> f32 {
        t * t * (3. - 2. * t)
    }

    // Quadratic
    pub fn ease_in_quad(t: f32) -> f32 {
        t * t
    }

    pub fn ease_out_quad(t: f32) -> f32 {
        1. - (1. - t) * (1. - t)
    }

    pub fn ease_in_out_quad(t: f32) -> f32 {
        if t < 0.5 {
            2. * t * t
        } else {
            1. - (-2. * t + 2.).powi(2) / 2.
        }
    }

    // Cubic
    pub fn ease_in_cubic(t: f32) -> f32 {
        t * t * t
    }

    pub fn ease_out_cubic(t: f32) -> f32 {
        1. - (1. - t).powi(3)
    }

    // Sine
    pub fn ease_in_sine(t: f32) -> f32 {
        1. - f32::cos(t * std::f32::consts::FRAC_PI_2)
    }

    pub fn ease_out_sine(t: f32) -> f32 {
        f32::sin(t * std::f32::consts::FRAC_PI_2)
    }

    // Back (overshoot)
    pub fn ease_in_back(t: f32) -> f32 {
        let c1 = 1.70158;
        let c3 = c1 + 1.;
        c3 * t * t * t - c1 * t * t
    }

    pub fn ease_out_back(t: f32) -> f32 {
        let c1 = 1.70158;
        let c3 = c1 + 1.;
        1. + c3 * (t - 1.).powi(3) + c1 * (t - 1.).powi(2)
    }

    // Elastic
    pub fn ease_out_elastic(t: f32) -> f32 {
        if t == 0. {
            0.
        } else if t == 1. {
            1.
        } else {
            let c4 = (2. * std::f32::consts::PI) / 3.;
            f32::powf(2., -10. * t) * f32::sin((t * 10. - 0.75) * c4) + 1.
        }
    }

    // Bounce
    pub fn ease_out_bounce(t: f32) -> f32 {
        let n1 = 7.5625;
        let d1 = 2.75;

        if t < 1. / d1 {
            n1 * t * t
        } else if t < 2. / d1 {
            let t = t - 1.5 / d1;
            n1 * t * t + 0.75
        } else if t < 2.5 / d1 {
            let t = t - 2.25 / d1;
            n1 * t * t + 0.9375
        } else {
            let t = t - 2.625 / d1;
            n1 * t * t + 0.984375
        }
    }
}
