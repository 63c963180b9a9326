//! Integer-grid geometry used by hit testing and edge rendering.
//!
//! Coordinates are logical pixels on an `i32` grid. Differences and squares
//! are computed in `i128` and saturate when narrowed, so any pair of `i32`
//! points can be measured and trimmed without overflow.

/// A point on the editor canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snap a logical (floating point) position, as reported by the UI, to the pixel grid.
    ///
    /// Positions beyond the `i32` range saturate.
    pub fn from_logical(x: f32, y: f32) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }

    /// Squared distance between two points, saturating at `i64::MAX`.
    pub fn squared_distance_to(self, other: Point) -> i64 {
        saturate_i64(self.wide_squared_distance_to(other))
    }

    /// Euclidean distance between two points.
    pub fn distance_to(self, other: Point) -> f64 {
        (self.wide_squared_distance_to(other) as f64).sqrt()
    }

    fn wide_squared_distance_to(self, other: Point) -> i128 {
        let dx = i128::from(other.x) - i128::from(self.x);
        let dy = i128::from(other.y) - i128::from(self.y);
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// `dx*dx + dy*dy`, saturating at `i64::MAX`.
pub fn squared_distance(dx: i32, dy: i32) -> i64 {
    let dx = i128::from(dx);
    let dy = i128::from(dy);
    saturate_i64(dx * dx + dy * dy)
}

fn saturate_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

fn saturate_i32(value: i128) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Check whether `p` lies near the segment `a`-`b`.
///
/// Compares the summed distances from `p` to both endpoints with the segment
/// length; the point is accepted when the difference is below `tolerance`.
/// This is a degenerate-ellipse test rather than an exact perpendicular
/// distance, so it is more forgiving close to the endpoints than in the middle.
///
/// A zero-length segment never matches.
pub fn point_near_segment(p: Point, a: Point, b: Point, tolerance: f64) -> bool {
    if a == b {
        return false;
    }
    let length = a.distance_to(b);
    let sum = p.distance_to(a) + p.distance_to(b);
    (sum - length).abs() < tolerance
}

/// Pull `moving` back along the segment towards `anchor` by `radius`.
///
/// Returns the point on the segment at distance `radius` from `moving`. Used to
/// stop edge lines at the boundary of a node circle instead of its center.
///
/// Vertical segments are trimmed along the y axis directly. A zero-length
/// segment has no direction and returns `moving` unchanged. Results outside
/// the `i32` range saturate.
pub fn circle_segment_trim(anchor: Point, moving: Point, radius: i32) -> Point {
    let dx = i128::from(moving.x) - i128::from(anchor.x);
    let dy = i128::from(moving.y) - i128::from(anchor.y);
    let r = i128::from(radius);
    let (mx, my) = (i128::from(moving.x), i128::from(moving.y));

    if dx != 0 {
        // |dx| >= 1, so the truncated length is never zero
        let length = ((dx * dx + dy * dy) as f64).sqrt() as i128;
        Point::new(saturate_i32(mx - r * dx / length), saturate_i32(my - r * dy / length))
    } else if dy > 0 {
        Point::new(moving.x, saturate_i32(my - r))
    } else if dy < 0 {
        Point::new(moving.x, saturate_i32(my + r))
    } else {
        moving
    }
}
