//! Geometric primitives for rasterization.
//!
//! Continuous inputs ([`Point`], [`Segment`], [`QuadraticBezier`]) and the
//! discrete cell they map onto ([`GridCell`]).

/// Round half toward positive infinity.
///
/// Every rasterizer uses this rule when snapping a real coordinate to a cell,
/// so `-0.5` maps to `0` and `2.5` maps to `3`.
#[inline]
#[must_use]
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Largest coordinate magnitude the rasterizers accept (2^31).
///
/// Keeps rounded cells, deltas and step counts well inside `i64`.
pub const MAX_COORDINATE: f64 = 2_147_483_648.0;

/// Whether `v` is finite and within `±MAX_COORDINATE`.
#[inline]
#[must_use]
pub fn in_range(v: f64) -> bool {
    v.abs() <= MAX_COORDINATE
}

/// Sign of `v` with `sign(0) == 0`.
#[inline]
#[must_use]
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// A cell of the unbounded logical grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCell {
    /// Column.
    pub x: i64,
    /// Row (grows upward on the rendered grid).
    pub y: i64,
}

impl GridCell {
    /// The cell at the origin.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new cell.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Snap a real-valued position to the nearest cell.
    #[must_use]
    pub fn from_rounded(x: f64, y: f64) -> Self {
        Self::new(round_half_up(x) as i64, round_half_up(y) as i64)
    }

    /// Offset relative to another cell.
    #[must_use]
    pub const fn offset_from(self, origin: Self) -> (i64, i64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

impl From<(i64, i64)> for GridCell {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates lie within `±MAX_COORDINATE`.
    #[must_use]
    pub fn is_in_range(self) -> bool {
        in_range(self.x) && in_range(self.y)
    }

    /// Nearest grid cell.
    #[must_use]
    pub fn to_cell(self) -> GridCell {
        GridCell::from_rounded(self.x, self.y)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Horizontal and vertical extent, signed toward the end point.
    #[must_use]
    pub fn delta(&self) -> (f64, f64) {
        (self.end.x - self.start.x, self.end.y - self.start.y)
    }

    /// Extent along the dominant axis: `max(|dx|, |dy|)`.
    #[must_use]
    pub fn dominant_extent(&self) -> f64 {
        let (dx, dy) = self.delta();
        dx.abs().max(dy.abs())
    }

    /// Whether both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Whether all four coordinates lie within `±MAX_COORDINATE`.
    ///
    /// False for NaN or infinite coordinates. When true, [`Segment::delta`]
    /// is finite.
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        self.start.is_in_range() && self.end.is_in_range()
    }
}

/// Quadratic Bézier curve with one control point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadraticBezier {
    /// Start point (`t = 0`).
    pub start: Point,
    /// Control point.
    pub control: Point,
    /// End point (`t = 1`).
    pub end: Point,
}

impl QuadraticBezier {
    /// Create a new curve.
    #[must_use]
    pub const fn new(start: Point, control: Point, end: Point) -> Self {
        Self { start, control, end }
    }

    /// Curve through a chord, bulging perpendicular to it.
    ///
    /// The control point sits at the chord midpoint, raised by half the
    /// horizontal extent in the direction of the vertical travel. A
    /// horizontal chord therefore collapses to a straight line.
    #[must_use]
    pub fn bulging(chord: Segment) -> Self {
        let Segment { start, end } = chord;
        let cx = (start.x + end.x) / 2.0;
        let cy = (start.y + end.y) / 2.0 + sign(end.y - start.y) * (end.x - start.x).abs() / 2.0;
        Self::new(start, Point::new(cx, cy), end)
    }

    /// Evaluate the curve at parameter `t`.
    #[must_use]
    pub fn eval(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let a = u * u;
        let b = 2.0 * u * t;
        let c = t * t;
        Point::new(
            a * self.start.x + b * self.control.x + c * self.end.x,
            a * self.start.y + b * self.control.y + c * self.end.y,
        )
    }
}
