//! Points on a circle and SVG path data for pie and donut slices.
//!
//! Angles are in degrees, clockwise from 12 o'clock. Coordinates follow the screen
//! convention where y grows downwards.

pub mod config;
pub mod error;
pub mod path;
pub mod point;
pub mod polar;
pub mod shape;

pub use config::*;
pub use error::SectorError;
pub use path::*;
pub use point::*;
pub use polar::*;
pub use shape::*;
