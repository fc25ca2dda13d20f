/// An RGBA color with components in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    pub const WHITE: ColorRgba = ColorRgba::new(1., 1., 1., 1.);
    pub const BLACK: ColorRgba = ColorRgba::new(0., 0., 0., 1.);
    pub const TRANSPARENT: ColorRgba = ColorRgba::new(0., 0., 0., 0.);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1. }
    }
}

pub trait Lerp {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: f32, t: f32) -> Self {
        (self * (1.0 - t)) + (to * t)
    }
}

impl Lerp for ColorRgba {
    fn lerp(self, to: Self, t: f32) -> Self {
        if t == 0. {
            return self;
        }

        if t == 1. {
            return to;
        }

        ColorRgba {
            r: f32::lerp(self.r, to.r, t),
            g: f32::lerp(self.g, to.g, t),
            b: f32::lerp(self.b, to.b, t),
            a: f32::lerp(self.a, to.a, t),
        }
    }
}

pub(crate) fn clamp01(value: f32) -> f32 {
    value.clamp(0., 1.)
}
