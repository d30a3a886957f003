use crate::{point_on_circle, PathConfig, PointF64, Sector, SectorError, SvgPath};
use crate::error::{check_angles, check_finite, check_radius};

/// A donut slice: the part of a sector outside the inner radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSector {
    pub center: PointF64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl RingSector {
    pub fn new(
        center: PointF64,
        outer_radius: f64,
        inner_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self, SectorError> {
        check_finite("center x", center.x)?;
        check_finite("center y", center.y)?;
        let outer = check_radius("outer radius", outer_radius)?;
        let inner = check_radius("inner radius", inner_radius)?;
        if inner > outer {
            log::debug!("rejecting ring with inner radius {} > outer radius {}", inner, outer);
            return Err(SectorError::InnerExceedsOuter { inner, outer });
        }
        let (start_angle, end_angle) = check_angles(start_angle, end_angle)?;
        Ok(Self::new_unchecked(center, outer, inner, start_angle, end_angle))
    }

    pub const fn new_unchecked(
        center: PointF64,
        outer_radius: f64,
        inner_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            center,
            outer_radius,
            inner_radius,
            start_angle,
            end_angle,
        }
    }

    /// The full slice this ring cuts its hole out of
    pub fn outer_sector(&self) -> Sector {
        Sector::new_unchecked(self.center, self.outer_radius, self.start_angle, self.end_angle)
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Outer arc from `end_angle` back to `start_angle`, across to the inner rim,
    /// inner arc forward to `end_angle`, close.
    ///
    /// A zero inner radius degenerates to the plain sector outline.
    pub fn to_path(&self) -> SvgPath {
        let outer = self.outer_sector();
        if self.inner_radius == 0.0 {
            return outer.to_path();
        }
        let (cx, cy, r) = (self.center.x, self.center.y, self.inner_radius);
        let large_arc = outer.is_large_arc();

        let mut path = SvgPath::new();
        path.move_to(outer.path_start())
            .arc_to(self.outer_radius, large_arc, false, outer.path_end())
            .line_to(point_on_circle(cx, cy, r, self.start_angle))
            .arc_to(r, large_arc, true, point_on_circle(cx, cy, r, self.end_angle))
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

/// Path data for a donut slice. Like [`describe_sector_path`](crate::describe_sector_path),
/// the input is not validated.
pub fn describe_ring_sector_path(
    cx: f64,
    cy: f64,
    outer_radius: f64,
    inner_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> String {
    if start_angle > end_angle {
        log::warn!("ring sector angles are reversed: {} > {}", start_angle, end_angle);
    }
    RingSector::new_unchecked(PointF64::new(cx, cy), outer_radius, inner_radius, start_angle, end_angle)
        .to_svg_string(None)
}
