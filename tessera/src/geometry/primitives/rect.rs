use anyhow::Result;
use anyhow::ensure;

use crate::geometry::primitives::Point;

/// Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Smallest rectangle containing all `points`
    pub fn enclosing(points: &[Point]) -> Result<Self> {
        ensure!(!points.is_empty(), "cannot enclose an empty set of points");
        let (x_min, y_min, x_max, y_max) = points.iter().fold(
            (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
            |(x_min, y_min, x_max, y_max), p| {
                (
                    x_min.min(p.x()),
                    y_min.min(p.y()),
                    x_max.max(p.x()),
                    y_max.max(p.y()),
                )
            },
        );
        Rect::try_new(x_min, y_min, x_max, y_max)
    }

    /// Minimum of the four perpendicular distances from `p` to the borders of `self`.
    /// Negative if `p` lies outside.
    pub fn distance_to_border(&self, p: Point) -> f64 {
        let Point(x, y) = p;
        f64::min(
            f64::min(x - self.x_min, self.x_max - x),
            f64::min(y - self.y_min, self.y_max - y),
        )
    }

    pub fn collides_with(&self, p: &Point) -> bool {
        let Point(x, y) = *p;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Returns a new rectangle with the same centroid but scaled by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        let dx = (self.x_max - self.x_min) * (factor - 1.0) / 2.0;
        let dy = (self.y_max - self.y_min) * (factor - 1.0) / 2.0;
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Corners in clockwise order on screen, starting at the top left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }
}
