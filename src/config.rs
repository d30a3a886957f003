/// Largest arc, in degrees, drawn by a single cubic segment
pub const MAX_SEGMENT_DEGREES: f64 = 90.0;

/// Output options shared by the path builders
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathConfig {
    /// Decimal places for every number in the path. `None` keeps full precision.
    pub precision: Option<u32>,
    /// Upper bound on the sweep of each cubic segment when arcs are approximated.
    /// Values outside (0, 90] fall back to 90.
    pub max_segment_degrees: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            precision: None,
            max_segment_degrees: MAX_SEGMENT_DEGREES,
        }
    }
}

impl PathConfig {
    pub fn new(precision: Option<u32>, max_segment_degrees: f64) -> Self {
        Self {
            precision,
            max_segment_degrees,
        }
    }

    pub fn with_precision(precision: u32) -> Self {
        Self {
            precision: Some(precision),
            ..Default::default()
        }
    }

    pub(crate) fn segment_degrees(&self) -> f64 {
        let d = self.max_segment_degrees;
        if d.is_finite() && d > 0.0 && d < MAX_SEGMENT_DEGREES {
            d
        } else {
            MAX_SEGMENT_DEGREES
        }
    }
}
