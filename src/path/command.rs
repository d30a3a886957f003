use crate::{PointF64, ToSvgString};

/// A single command of the SVG path mini-language, in absolute coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(PointF64),
    LineTo(PointF64),
    /// Elliptical arc. `radii` holds (rx, ry); `rotation` is the x-axis rotation in degrees.
    ArcTo {
        radii: PointF64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: PointF64,
    },
    CubicTo {
        c1: PointF64,
        c2: PointF64,
        to: PointF64,
    },
    Close,
}

impl PathCommand {
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::ArcTo { .. } => 'A',
            PathCommand::CubicTo { .. } => 'C',
            PathCommand::Close => 'Z',
        }
    }

    /// The point the pen rests on after this command, if the command names one
    pub fn end_point(&self) -> Option<PointF64> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::ArcTo { to, .. } | PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::Close => None,
        }
    }
}

fn flag(b: bool) -> char {
    if b { '1' } else { '0' }
}

impl ToSvgString for PathCommand {
    fn to_svg_string(&self, precision: Option<u32>) -> String {
        let p = precision;
        match self {
            PathCommand::MoveTo(to) | PathCommand::LineTo(to) => {
                format!("{} {}", self.letter(), to.to_svg_string(p))
            }
            PathCommand::ArcTo { radii, rotation, large_arc, sweep, to } => format!(
                "A {} {} {} {} {}",
                radii.to_svg_string(p),
                rotation.to_svg_string(p),
                flag(*large_arc),
                flag(*sweep),
                to.to_svg_string(p),
            ),
            PathCommand::CubicTo { c1, c2, to } => format!(
                "C {} {} {}",
                c1.to_svg_string(p),
                c2.to_svg_string(p),
                to.to_svg_string(p),
            ),
            PathCommand::Close => String::from("Z"),
        }
    }
}

/// Ordered list of path commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgPath {
    pub commands: Vec<PathCommand>,
}

impl SvgPath {
    pub fn new() -> Self {
        Self {
            commands: vec![]
        }
    }

    pub fn iter(&self) -> std::slice::Iter<PathCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, to: PointF64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    pub fn line_to(&mut self, to: PointF64) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    /// Circular arc of radius `r`, no rotation
    pub fn arc_to(&mut self, r: f64, large_arc: bool, sweep: bool, to: PointF64) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            radii: PointF64::new(r, r),
            rotation: 0.0,
            large_arc,
            sweep,
            to,
        });
        self
    }

    pub fn cubic_to(&mut self, c1: PointF64, c2: PointF64, to: PointF64) -> &mut Self {
        self.commands.push(PathCommand::CubicTo { c1, c2, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Commands and their numbers are separated by single spaces, with no trailing space.
    pub fn to_svg_string(&self, precision: Option<u32>) -> String {
        self.commands
            .iter()
            .map(|c| c.to_svg_string(precision))
            .collect::<Vec<String>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_svg_string() {
        let mut path = SvgPath::new();
        path.move_to(PointF64::new(10.0, 0.0))
            .arc_to(10.0, false, false, PointF64::new(0.0, -10.0))
            .line_to(PointF64::new(0.0, 0.0))
            .close();
        assert_eq!(path.len(), 4);
        assert_eq!(path.to_svg_string(None), "M 10 0 A 10 10 0 0 0 0 -10 L 0 0 Z");
    }

    #[test]
    fn test_cubic_and_precision() {
        let mut path = SvgPath::new();
        path.move_to(PointF64::new(0.5, 0.25))
            .cubic_to(PointF64::new(1.0 / 3.0, 2.0), PointF64::new(3.0, 4.0), PointF64::new(5.0, 6.126));
        assert_eq!(path.to_svg_string(Some(2)), "M 0.5 0.25 C 0.33 2 3 4 5 6.13");
    }

    #[test]
    fn test_empty() {
        let path = SvgPath::default();
        assert!(path.is_empty());
        assert_eq!(path.to_svg_string(None), "");
    }

    #[test]
    fn test_end_point() {
        assert_eq!(PathCommand::LineTo(PointF64::new(1.0, 2.0)).end_point(), Some(PointF64::new(1.0, 2.0)));
        assert_eq!(PathCommand::Close.end_point(), None);
        assert_eq!(PathCommand::Close.letter(), 'Z');
    }
}
