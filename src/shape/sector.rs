use std::cmp::Ordering;

use crate::{point_on_circle, PathConfig, PointF64, SectorError, SvgPath};
use crate::error::{check_angles, check_finite, check_radius};

/// Sweep in degrees above which the major arc is drawn
pub const LARGE_ARC_THRESHOLD: f64 = 180.0;

/// A pie slice: the region bounded by two radii and the arc between them.
///
/// Angles are in degrees, clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    pub center: PointF64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Sector {
    /// Rejects non-finite values, a negative radius and `start_angle > end_angle`.
    pub fn new(center: PointF64, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self, SectorError> {
        check_finite("center x", center.x)?;
        check_finite("center y", center.y)?;
        let radius = check_radius("radius", radius)?;
        let (start_angle, end_angle) = check_angles(start_angle, end_angle)?;
        Ok(Self::new_unchecked(center, radius, start_angle, end_angle))
    }

    /// No validation; garbage in, garbage out.
    pub const fn new_unchecked(center: PointF64, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Only a sweep known to be within 180° takes the minor arc; NaN takes the major one.
    pub fn is_large_arc(&self) -> bool {
        !matches!(
            self.sweep().partial_cmp(&LARGE_ARC_THRESHOLD),
            Some(Ordering::Less) | Some(Ordering::Equal)
        )
    }

    /// Where the outline begins: the rim point at `end_angle`.
    pub fn path_start(&self) -> PointF64 {
        point_on_circle(self.center.x, self.center.y, self.radius, self.end_angle)
    }

    /// Where the arc lands: the rim point at `start_angle`.
    pub fn path_end(&self) -> PointF64 {
        point_on_circle(self.center.x, self.center.y, self.radius, self.start_angle)
    }

    /// Move to the rim at `end_angle`, arc back to `start_angle`, line to the center, close.
    pub fn to_path(&self) -> SvgPath {
        let mut path = SvgPath::new();
        path.move_to(self.path_start())
            .arc_to(self.radius, self.is_large_arc(), false, self.path_end())
            .line_to(self.center)
            .close();
        path
    }

    pub fn to_svg_string(&self, precision: Option<u32>) -> String {
        self.to_path().to_svg_string(precision)
    }

    pub fn to_svg_string_with(&self, config: &PathConfig) -> String {
        self.to_svg_string(config.precision)
    }
}

/// Path data for the pie slice of the circle at (`cx`, `cy`) with radius `r`,
/// spanning `start_angle` to `end_angle` degrees clockwise from 12 o'clock.
///
/// Produces `M x y A r r 0 large 0 x y L cx cy Z`. Input is not validated:
/// `start_angle` is expected to be no greater than `end_angle`, otherwise the minor arc is drawn.
///
/// Numbers keep full precision and are never in exponent form, so rounding noise shows up as
/// long decimals such as `0.0000000000000006123233995736766`. Use [`Sector::to_svg_string`]
/// with a precision for stable text.
pub fn describe_sector_path(cx: f64, cy: f64, r: f64, start_angle: f64, end_angle: f64) -> String {
    if start_angle > end_angle {
        log::warn!("sector angles are reversed: {} > {}", start_angle, end_angle);
    }
    Sector::new_unchecked(PointF64::new(cx, cy), r, start_angle, end_angle).to_svg_string(None)
}
