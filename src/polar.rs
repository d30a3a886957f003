use std::f64::consts::PI;

use crate::{Point2, PointF64};
use num_traits::Float;

/// Polar coordinate in 2D space
///
/// `a` is in radians, counted from the positive x axis towards the positive y axis.
/// With y growing downwards (as on screen) this is clockwise.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Polar2<F: Float> {
    pub a: F,
    pub r: F,
}

impl<F: Float> Polar2<F> {
    pub fn new(a: F, r: F) -> Self {
        Self { a, r }
    }

    /// Offset from the origin
    pub fn to_point(&self) -> Point2<F> {
        Point2 {
            x: self.r * self.a.cos(),
            y: self.r * self.a.sin(),
        }
    }

    pub fn to_point_around(&self, center: Point2<F>) -> Point2<F> {
        Point2 {
            x: center.x + self.r * self.a.cos(),
            y: center.y + self.r * self.a.sin(),
        }
    }
}

/// 2D Polar with `f64` component
pub type PolarF64 = Polar2<f64>;

impl PolarF64 {
    /// Angle given in degrees clockwise from 12 o'clock, so 0 points straight up.
    pub fn from_clock_degrees(degrees: f64, r: f64) -> Self {
        Self {
            a: (degrees - 90.0) * PI / 180.0,
            r,
        }
    }
}

/// The point on the circle centered at (`cx`, `cy`) with radius `r` at `angle` degrees,
/// measured clockwise from the top of the circle.
///
/// The angle is not normalized. Non-finite input gives a non-finite point.
pub fn point_on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> PointF64 {
    PolarF64::from_clock_degrees(angle, r).to_point_around(PointF64::new(cx, cy))
}
