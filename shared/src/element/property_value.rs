use std::fmt;

use glam::{Quat, Vec3};

use replica_serde::Serde;

use super::interpolation::{interpolate_float, lerp, Interpolation};

/// A value type that can live inside a [`Property`](super::Property).
///
/// The defaults give "take the second snapshot" interpolation and exact equality; numeric
/// and vector types override them.
pub trait PropertyValue: Serde + Default + fmt::Debug + Send + 'static {
    fn interpolate(from: &Self, to: &Self, t: f32, mode: Interpolation) -> Self {
        let _ = (from, t, mode);
        to.clone()
    }

    fn within_tolerance(&self, other: &Self, tolerance: Option<f32>) -> bool {
        let _ = tolerance;
        self == other
    }

    fn zero() -> Self {
        Self::default()
    }
}

impl PropertyValue for bool {}
impl PropertyValue for u8 {}
impl PropertyValue for u16 {}
impl PropertyValue for i8 {}
impl PropertyValue for i16 {}
impl PropertyValue for i32 {}
impl PropertyValue for i64 {}
impl PropertyValue for u64 {}

impl PropertyValue for u32 {
    fn interpolate(from: &Self, to: &Self, t: f32, mode: Interpolation) -> Self {
        let (from, to) = (*from, *to);
        match mode {
            Interpolation::TakeSecond => to,
            Interpolation::Elapsed if to <= from => to,
            _ => {
                let (a, b) = (f64::from(from), f64::from(to));
                (a + (b - a) * f64::from(t)).round().clamp(0.0, f64::from(u32::MAX)) as u32
            }
        }
    }
}

impl PropertyValue for f32 {
    fn interpolate(from: &Self, to: &Self, t: f32, mode: Interpolation) -> Self {
        interpolate_float(*from, *to, t, mode)
    }

    fn within_tolerance(&self, other: &Self, tolerance: Option<f32>) -> bool {
        match tolerance {
            Some(tolerance) => (self - other).abs() < tolerance,
            None => self == other,
        }
    }
}

impl PropertyValue for Vec3 {
    fn interpolate(from: &Self, to: &Self, t: f32, mode: Interpolation) -> Self {
        match mode {
            Interpolation::TakeSecond => *to,
            Interpolation::Range(max_distance)
                if from.distance_squared(*to) > max_distance * max_distance =>
            {
                *to
            }
            Interpolation::Cyclic { .. } | Interpolation::Angle | Interpolation::Elapsed => {
                Vec3::new(
                    interpolate_float(from.x, to.x, t, mode),
                    interpolate_float(from.y, to.y, t, mode),
                    interpolate_float(from.z, to.z, t, mode),
                )
            }
            _ => Vec3::new(
                lerp(from.x, to.x, t),
                lerp(from.y, to.y, t),
                lerp(from.z, to.z, t),
            ),
        }
    }

    fn within_tolerance(&self, other: &Self, tolerance: Option<f32>) -> bool {
        match tolerance {
            Some(tolerance) => (*self - *other).abs().max_element() < tolerance,
            None => self == other,
        }
    }
}

impl PropertyValue for Quat {
    fn interpolate(from: &Self, to: &Self, t: f32, mode: Interpolation) -> Self {
        match mode {
            Interpolation::TakeSecond => *to,
            _ => from.lerp(*to, t),
        }
    }

    fn within_tolerance(&self, other: &Self, tolerance: Option<f32>) -> bool {
        match tolerance {
            Some(tolerance) => self.abs_diff_eq(*other, tolerance),
            None => self == other,
        }
    }

    fn zero() -> Self {
        Quat::IDENTITY
    }
}
