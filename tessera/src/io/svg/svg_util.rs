use serde::{Deserialize, Serialize};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry::primitives::{Point, SPolygon};
use crate::raster::Color;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Write the index of every tile at its center
    #[serde(default)]
    pub labels: bool,
    ///Draw a dot at the center of every tile
    #[serde(default)]
    pub centers: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            labels: true,
            centers: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f64,
    pub canvas_fill: Color,
    pub tile_fill: Color,
    pub tile_fill_opac: f64,
    pub tile_stroke: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        canvas_fill: Color(0xCC, 0x82, 0x4A),
        tile_fill: Color(0xFF, 0xC8, 0x79),
        tile_fill_opac: 0.8,
        tile_stroke: Color(0x00, 0x00, 0x00),
    };
}

//svg works with single precision
fn svg_coords(Point(x, y): Point) -> (f32, f32) {
    (x as f32, y as f32)
}

pub fn simple_polygon_data(s_poly: &SPolygon) -> Data {
    let mut data = Data::new().move_to(svg_coords(s_poly.vertex(0)));
    for i in 1..s_poly.n_vertices() {
        data = data.line_to(svg_coords(s_poly.vertex(i)));
    }
    data.close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point(p: Point, fill: Option<&str>, rad: Option<f32>) -> Circle {
    let (x, y) = svg_coords(p);
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}
