// extensions/easing.rs
//
// Easing curves: map linear progress in [0, 1] to an animation curve value.
// Only the "In" shape of each family is written out; "Out" is its point
// reflection and "InOut" stitches the two halves together.

use std::f32::consts::PI;
use serde::{Deserialize, Serialize};

/// Anything that can shape interpolation progress.
///
/// Implemented for [`Easing`] and for any `Fn(f32) -> f32`, so a caller can
/// hand an interpolator either a named curve or its own function (including a
/// borrowed one: `&F` is also `Fn`).
pub trait Ease {
    /// Map progress `t` in [0, 1] to the blend factor.
    fn ease(&self, t: f32) -> f32;
}

impl Ease for Easing {
    #[inline]
    fn ease(&self, t: f32) -> f32 {
        self.apply(t)
    }
}

impl<F: Fn(f32) -> f32> Ease for F {
    #[inline]
    fn ease(&self, t: f32) -> f32 {
        self(t)
    }
}

/// Named easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Identity: blend factor equals progress.
    #[default]
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    /// Pulls back before leaving (undershoots below 0).
    BackIn,
    /// Overshoots past 1 then settles.
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
}

#[derive(Clone, Copy)]
enum Shape {
    Quad,
    Cubic,
    Quart,
    Sine,
    Expo,
    Back,
    Bounce,
    Elastic,
}

#[derive(Clone, Copy)]
enum Mode {
    In,
    Out,
    InOut,
}

impl Easing {
    pub const ALL: [Easing; 25] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
    ];

    /// Apply the curve to progress `t`, clamped to [0, 1].
    /// Every curve maps 0 to 0 and 1 to 1; Back and Elastic leave [0, 1] in between.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let (shape, mode) = match self {
            Easing::Linear => return t,
            Easing::QuadIn => (Shape::Quad, Mode::In),
            Easing::QuadOut => (Shape::Quad, Mode::Out),
            Easing::QuadInOut => (Shape::Quad, Mode::InOut),
            Easing::CubicIn => (Shape::Cubic, Mode::In),
            Easing::CubicOut => (Shape::Cubic, Mode::Out),
            Easing::CubicInOut => (Shape::Cubic, Mode::InOut),
            Easing::QuartIn => (Shape::Quart, Mode::In),
            Easing::QuartOut => (Shape::Quart, Mode::Out),
            Easing::QuartInOut => (Shape::Quart, Mode::InOut),
            Easing::SineIn => (Shape::Sine, Mode::In),
            Easing::SineOut => (Shape::Sine, Mode::Out),
            Easing::SineInOut => (Shape::Sine, Mode::InOut),
            Easing::ExpoIn => (Shape::Expo, Mode::In),
            Easing::ExpoOut => (Shape::Expo, Mode::Out),
            Easing::ExpoInOut => (Shape::Expo, Mode::InOut),
            Easing::BackIn => (Shape::Back, Mode::In),
            Easing::BackOut => (Shape::Back, Mode::Out),
            Easing::BackInOut => (Shape::Back, Mode::InOut),
            Easing::BounceIn => (Shape::Bounce, Mode::In),
            Easing::BounceOut => (Shape::Bounce, Mode::Out),
            Easing::BounceInOut => (Shape::Bounce, Mode::InOut),
            Easing::ElasticIn => (Shape::Elastic, Mode::In),
            Easing::ElasticOut => (Shape::Elastic, Mode::Out),
            Easing::ElasticInOut => (Shape::Elastic, Mode::InOut),
        };

        match mode {
            Mode::In => shape.ease_in(t),
            Mode::Out => 1.0 - shape.ease_in(1.0 - t),
            Mode::InOut => {
                if t < 0.5 {
                    shape.ease_in(2.0 * t) / 2.0
                } else {
                    1.0 - shape.ease_in(2.0 - 2.0 * t) / 2.0
                }
            }
        }
    }
}

impl Shape {
    fn ease_in(self, t: f32) -> f32 {
        match self {
            Shape::Quad => t * t,
            Shape::Cubic => t * t * t,
            Shape::Quart => t * t * t * t,
            Shape::Sine => 1.0 - (t * PI / 2.0).cos(),
            Shape::Expo => {
                if t == 0.0 { 0.0 } else { 2.0_f32.powf(10.0 * t - 10.0) }
            }
            Shape::Back => {
                const C1: f32 = 1.70158;
                (C1 + 1.0) * t * t * t - C1 * t * t
            }
            Shape::Bounce => 1.0 - bounce_out(1.0 - t),
            Shape::Elastic => {
                const C4: f32 = (2.0 * PI) / 3.0;
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    -(2.0_f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * C4).sin()
                }
            }
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    let (offset, floor) = if t < 1.0 / D1 {
        (0.0, 0.0)
    } else if t < 2.0 / D1 {
        (1.5 / D1, 0.75)
    } else if t < 2.5 / D1 {
        (2.25 / D1, 0.9375)
    } else {
        (2.625 / D1, 0.984375)
    };
    let t = t - offset;
    N1 * t * t + floor
}
