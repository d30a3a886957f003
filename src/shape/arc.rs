use flo_curves::bezier::{BezierCurve, BezierCurveFactory, Curve};

use crate::{PathConfig, PointF64, PolarF64, Sector, SvgPath};

const FULL_TURN: f64 = 360.0;

/// Cubic Bézier approximating the circular arc around `center` from `a0` to `a1`.
///
/// Angles are in radians as in [`PolarF64`]. The control points sit on the end tangents
/// at distance `4/3 * tan(θ/4) * r`, which keeps the radial error below 0.03% of `r` for θ ≤ 90°.
pub fn circular_arc(center: PointF64, r: f64, a0: f64, a1: f64) -> Curve<PointF64> {
    let k = 4.0 / 3.0 * ((a1 - a0) / 4.0).tan() * r;
    let p0 = PolarF64::new(a0, r).to_point_around(center);
    let p3 = PolarF64::new(a1, r).to_point_around(center);
    let t0 = PointF64::new(-a0.sin(), a0.cos()) * k;
    let t3 = PointF64::new(-a1.sin(), a1.cos()) * k;
    Curve::from_points(p0, (p0 + t0, p3 - t3), p3)
}

impl Sector {
    /// The arc of this sector as cubic segments, walked the same way as [`Sector::to_path`]:
    /// from `end_angle` back to `start_angle`. Each segment spans equal angles no larger than
    /// `config.max_segment_degrees`.
    ///
    /// A sweep beyond one full turn is drawn as the full circle, starting and ending at
    /// `end_angle`. A zero or non-finite sweep has no segments.
    pub fn to_bezier_curves(&self, config: &PathConfig) -> Vec<Curve<PointF64>> {
        let sweep = self.sweep();
        if !sweep.is_finite() || !self.end_angle.is_finite() {
            log::warn!("cannot approximate a sector with sweep {}", sweep);
            return vec![];
        }
        if sweep == 0.0 {
            return vec![];
        }
        if sweep.abs() > FULL_TURN {
            log::debug!("sweep {} exceeds a full turn, drawing the whole circle", sweep);
        }
        let sweep = sweep.clamp(-FULL_TURN, FULL_TURN);
        let segments = (sweep.abs() / config.segment_degrees()).ceil().max(1.0) as usize;
        let step = sweep / segments as f64;
        // reduce first so huge angles keep their fractional degrees
        let end_angle = self.end_angle % FULL_TURN;
        let angle = |i: usize| PolarF64::from_clock_degrees(end_angle - step * i as f64, self.radius).a;

        (0..segments)
            .map(|i| circular_arc(self.center, self.radius, angle(i), angle(i + 1)))
            .collect()
    }

    /// The sector outline with the arc replaced by cubic segments, for renderers lacking `A`.
    pub fn to_cubic_path(&self, config: &PathConfig) -> SvgPath {
        let curves = self.to_bezier_curves(config);
        let start = curves.first().map(|c| c.start_point()).unwrap_or_else(|| self.path_start());
        let mut path = SvgPath::new();
        path.move_to(start);
        for curve in curves {
            let (c1, c2) = curve.control_points();
            path.cubic_to(c1, c2, curve.end_point());
        }
        path.line_to(self.center).close();
        path
    }

    pub fn to_cubic_svg_string(&self, config: &PathConfig) -> String {
        self.to_cubic_path(config).to_svg_string(config.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathCommand, ToSvgString};

    fn max_radial_error(sector: &Sector, curves: &[Curve<PointF64>]) -> f64 {
        let mut max = 0.0f64;
        for curve in curves {
            for i in 0..=16 {
                let p = curve.point_at_pos(i as f64 / 16.0);
                max = max.max((p.distance_to(sector.center) - sector.radius).abs());
            }
        }
        max
    }

    #[test]
    fn quarter_circle() {
        let sector = Sector::new(PointF64::default(), 10.0, 0.0, 90.0).unwrap();
        let curves = sector.to_bezier_curves(&PathConfig::default());
        assert_eq!(curves.len(), 1);
        assert!(curves[0].start_point().approx_eq(PointF64::new(10.0, 0.0), 1e-9));
        assert!(curves[0].end_point().approx_eq(PointF64::new(0.0, -10.0), 1e-9));
        // the well known 0.5523 control distance for a quarter circle
        let (c1, c2) = curves[0].control_points();
        assert!(c1.approx_eq(PointF64::new(10.0, -5.5228), 1e-3));
        assert!(c2.approx_eq(PointF64::new(5.5228, -10.0), 1e-3));
        assert!(max_radial_error(&sector, &curves) < 10.0 * 3e-4);
    }

    #[test]
    fn segment_count() {
        let c = PointF64::new(3.0, 4.0);
        let config = PathConfig::default();
        assert_eq!(Sector::new_unchecked(c, 5.0, 0.0, 270.0).to_bezier_curves(&config).len(), 3);
        assert_eq!(Sector::new_unchecked(c, 5.0, 10.0, 110.0).to_bezier_curves(&config).len(), 2);
        assert_eq!(Sector::new_unchecked(c, 5.0, 0.0, 90.0).to_bezier_curves(&PathConfig::new(None, 30.0)).len(), 3);
        assert!(Sector::new_unchecked(c, 5.0, 45.0, 45.0).to_bezier_curves(&config).is_empty());
        assert!(Sector::new_unchecked(c, 5.0, 0.0, f64::NAN).to_bezier_curves(&config).is_empty());
    }

    #[test]
    fn segments_are_connected_and_on_circle() {
        let sector = Sector::new(PointF64::new(-20.0, 15.0), 40.0, 33.0, 318.0).unwrap();
        let curves = sector.to_bezier_curves(&PathConfig::new(None, 45.0));
        assert_eq!(curves.len(), 7);
        assert!(curves[0].start_point().approx_eq(sector.path_start(), 1e-9));
        assert!(curves[curves.len() - 1].end_point().approx_eq(sector.path_end(), 1e-9));
        for pair in curves.windows(2) {
            assert!(pair[0].end_point().approx_eq(pair[1].start_point(), 1e-9));
        }
        assert!(max_radial_error(&sector, &curves) < 40.0 * 1e-4);
    }

    #[test]
    fn sweep_beyond_full_turn() {
        let sector = Sector::new(PointF64::default(), 1.0, 0.0, 1e20).unwrap();
        let curves = sector.to_bezier_curves(&PathConfig::default());
        assert_eq!(curves.len(), 4);
        for pair in curves.windows(2) {
            assert!(pair[0].end_point().approx_eq(pair[1].start_point(), 1e-9));
        }
        assert!(curves[0].start_point().approx_eq(curves[3].end_point(), 1e-9));
        let s = sector.to_cubic_svg_string(&PathConfig::with_precision(6));
        assert!(s.starts_with(&format!("M {} C ", curves[0].start_point().to_svg_string(Some(6)))));
        assert!(max_radial_error(&sector, &curves) < 3e-4);

        let sector = Sector::new_unchecked(PointF64::default(), 1.0, 0.0, 725.0);
        assert_eq!(sector.to_bezier_curves(&PathConfig::new(None, 30.0)).len(), 12);
    }

    #[test]
    fn cubic_path() {
        let sector = Sector::new(PointF64::default(), 10.0, 0.0, 180.0).unwrap();
        let config = PathConfig::with_precision(2);
        let path = sector.to_cubic_path(&config);
        let letters: String = path.iter().map(PathCommand::letter).collect();
        assert_eq!(letters, "MCCLZ");
        let s = sector.to_cubic_svg_string(&config);
        assert!(s.starts_with("M 0 10 C "));
        assert!(s.ends_with(" 0 -10 L 0 0 Z"));
    }

    #[test]
    fn empty_sector_cubic_path() {
        let sector = Sector::new_unchecked(PointF64::default(), 10.0, 90.0, 90.0);
        assert_eq!(sector.to_cubic_svg_string(&PathConfig::default()), "M 10 0 L 0 0 Z");
    }
}
