use thiserror::Error;

/// Reasons a sector cannot be built from the given parameters
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SectorError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    NegativeRadius { name: &'static str, value: f64 },
    #[error("start angle {start} is greater than end angle {end}")]
    ReversedAngles { start: f64, end: f64 },
    #[error("inner radius {inner} is greater than outer radius {outer}")]
    InnerExceedsOuter { inner: f64, outer: f64 },
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, SectorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejecting non-finite {}: {}", name, value);
        Err(SectorError::NonFinite { name, value })
    }
}

pub(crate) fn check_radius(name: &'static str, value: f64) -> Result<f64, SectorError> {
    let value = check_finite(name, value)?;
    if value < 0.0 {
        log::debug!("rejecting negative {}: {}", name, value);
        return Err(SectorError::NegativeRadius { name, value });
    }
    Ok(value)
}

pub(crate) fn check_angles(start: f64, end: f64) -> Result<(f64, f64), SectorError> {
    let start = check_finite("start angle", start)?;
    let end = check_finite("end angle", end)?;
    if start > end {
        log::debug!("rejecting reversed angles: {} > {}", start, end);
        return Err(SectorError::ReversedAngles { start, end });
    }
    Ok((start, end))
}
