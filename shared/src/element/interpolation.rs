/// How a property blends between two snapshots
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interpolation {
    /// `a + (b - a) * t`
    #[default]
    Linear,
    /// Always the second snapshot's value
    TakeSecond,
    /// Values wrap within `[min, max)` and blend along the shorter arc
    Cyclic { min: f32, max: f32 },
    /// Degrees, blended along the shorter arc without wrapping the result
    Angle,
    /// Blend only when both values are within this distance, otherwise take the second
    Range(f32),
    /// A time that never decreases: a smaller second value is a reset and is taken as-is
    Elapsed,
}

impl Interpolation {
    /// # Panics
    ///
    /// Panics if `min >= max`.
    pub fn cyclic(min: f32, max: f32) -> Self {
        assert!(
            min < max,
            "cyclic interpolation needs min < max, got [{}, {})",
            min,
            max
        );
        Self::Cyclic { min, max }
    }
}

/// Declaration-time metadata attached to a property
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyMeta {
    pub interpolation: Interpolation,
    /// Absolute difference under which two values compare equal
    pub tolerance: Option<f32>,
    /// Absolute difference under which a predicted value matches the authoritative one
    pub prediction_tolerance: Option<f32>,
    /// When false, the codec skips this property entirely
    pub serialized: bool,
}

impl Default for PropertyMeta {
    fn default() -> Self {
        Self {
            interpolation: Interpolation::Linear,
            tolerance: None,
            prediction_tolerance: None,
            serialized: true,
        }
    }
}

pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub(crate) fn interpolate_float(a: f32, b: f32, t: f32, mode: Interpolation) -> f32 {
    match mode {
        Interpolation::TakeSecond => b,
        Interpolation::Cyclic { min, max } => interpolate_cyclic(a, b, t, min, max),
        Interpolation::Angle => interpolate_angle(a, b, t),
        Interpolation::Range(max_distance) => {
            if (b - a).abs() > max_distance {
                b
            } else {
                lerp(a, b, t)
            }
        }
        Interpolation::Elapsed => {
            if b >= a {
                lerp(a, b, t)
            } else {
                b
            }
        }
        Interpolation::Linear => {
            if a == f32::INFINITY || b == f32::INFINITY {
                f32::INFINITY
            } else {
                lerp(a, b, t)
            }
        }
    }
}

fn interpolate_cyclic(mut a: f32, mut b: f32, t: f32, min: f32, max: f32) -> f32 {
    let range = max - min;
    if (b - a).abs() > range / 2.0 {
        if a < b {
            a += range;
        } else {
            b += range;
        }
    }
    min + (lerp(a, b, t) - min).rem_euclid(range)
}

fn interpolate_angle(a: f32, b: f32, t: f32) -> f32 {
    let mut delta = (b - a).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    a + delta * t
}
