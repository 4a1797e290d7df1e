use anyhow::Result;
use anyhow::ensure;
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Point, Rect};

/// Geometric primitive representing a simple polygon: <https://en.wikipedia.org/wiki/Simple_polygon>
#[derive(Clone, Debug, PartialEq)]
pub struct SPolygon {
    /// Vertices of the polygon, in order
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    pub area: f64,
}

impl SPolygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        ensure!(
            vertices.len() >= 3,
            "simple polygon must have at least 3 vertices, got {}",
            vertices.len()
        );
        let area = SPolygon::calculate_area(&vertices).abs();
        ensure!(area > 0.0, "simple polygon has no area: {vertices:?}");
        let bbox = Rect::enclosing(&vertices)?;

        Ok(SPolygon {
            vertices,
            bbox,
            area,
        })
    }

    /// Rectangle of `width` x `height` centered on the origin, rotated by `rotation` degrees
    /// around its own center and then moved onto `center`.
    pub fn rotated_rectangle(center: Point, width: f64, height: f64, rotation: f64) -> Result<Self> {
        ensure!(
            width > 0.0 && height > 0.0,
            "rectangle must have a positive size, got {width} x {height}"
        );
        ensure!(
            center.x().is_finite() && center.y().is_finite() && rotation.is_finite(),
            "rectangle must have a finite center and rotation, got {center:?} at {rotation}°"
        );
        let (hw, hh) = (width / 2.0, height / 2.0);
        let axis_aligned = Rect::try_new(-hw, -hh, hw, hh)?;

        let t = Transformation::from_rotation(rotation.to_radians()).translate(center.into());
        let corners = axis_aligned
            .corners()
            .iter()
            .map(|c| c.transform_clone(&t))
            .collect_vec();

        SPolygon::new(corners)
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over all edges as pairs of start and end vertex, closing the loop
    pub fn edge_iter(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        (0..self.n_vertices()).map(move |i| {
            let j = (i + 1) % self.n_vertices();
            (self.vertices[i], self.vertices[j])
        })
    }

    /// Sorted x-coordinates where the horizontal line at `y` crosses the boundary.
    /// An edge counts when exactly one of its endpoints lies on or above the line,
    /// so a vertex touching the line is never counted twice.
    pub fn scanline_crossings(&self, y: f64) -> Vec<f64> {
        self.edge_iter()
            .filter(|(a, b)| (a.y() <= y) != (b.y() <= y))
            .map(|(a, b)| a.x() + (y - a.y()) * (b.x() - a.x()) / (b.y() - a.y()))
            .sorted_by_key(|x| OrderedFloat(*x))
            .collect()
    }

    /// Even-odd point-in-polygon test
    pub fn contains(&self, p: Point) -> bool {
        if !self.bbox.collides_with(&p) {
            return false;
        }
        self.scanline_crossings(p.y())
            .iter()
            .filter(|x| **x <= p.x())
            .count()
            % 2
            == 1
    }

    //shoelace formula, positive for counterclockwise vertices in a y-up frame
    fn calculate_area(vertices: &[Point]) -> f64 {
        let twice_area: f64 = (0..vertices.len())
            .map(|i| {
                let j = (i + 1) % vertices.len();
                vertices[i].x() * vertices[j].y() - vertices[j].x() * vertices[i].y()
            })
            .sum();
        twice_area / 2.0
    }
}

impl Shape for SPolygon {
    //mean of the vertices, exact for the rectangles built by this crate
    fn centroid(&self) -> Point {
        let n = self.n_vertices() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x(), sy + v.y()));
        Point(sx / n, sy / n)
    }

    fn area(&self) -> f64 {
        self.area
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}
