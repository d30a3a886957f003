mod arc;
mod ring;
mod sector;

pub use arc::*;
pub use ring::*;
pub use sector::*;
