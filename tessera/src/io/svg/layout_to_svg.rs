use anyhow::Result;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::entities::{CanvasGeometry, PositionList};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Draws the canvas and every tile of `positions` on top of it
pub fn layout_to_svg(
    positions: &PositionList,
    geometry: &CanvasGeometry,
    options: SvgDrawOptions,
    title: &str,
) -> Result<Document> {
    let canvas = geometry.bbox();
    let vbox = canvas.scale(1.10);
    let theme = &options.theme;

    let stroke_width =
        (f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier) as f32;
    let font_size = (f64::min(canvas.width(), canvas.height()) * 0.025) as f32;
    let (cx, cy, cw, ch) = (
        canvas.x_min as f32,
        canvas.y_min as f32,
        canvas.width() as f32,
        canvas.height() as f32,
    );

    let label = {
        let label_content = format!(
            "width: {:.3} | height: {:.3} | tiles: {} | {}",
            canvas.width(),
            canvas.height(),
            positions.len(),
            title,
        );
        Text::new(label_content)
            .set("x", cx)
            .set("y", cy - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let canvas_group = Group::new().set("id", "canvas").add(
        Rectangle::new()
            .set("x", cx)
            .set("y", cy)
            .set("width", cw)
            .set("height", ch)
            .set("fill", format!("{}", theme.canvas_fill))
            .set("stroke", "black")
            .set("stroke-width", 2.0 * stroke_width)
            .add(Title::new(format!(
                "canvas, {:.3} x {:.3}",
                canvas.width(),
                canvas.height()
            ))),
    );

    let mut tiles_group = Group::new().set("id", "tiles");
    for (i, placement) in positions.iter().enumerate() {
        let polygon = geometry.tile_polygon(placement)?;
        let path = svg_util::data_to_path(
            svg_util::simple_polygon_data(&polygon),
            &[
                ("fill", &*format!("{}", theme.tile_fill)),
                ("fill-opacity", &*format!("{}", theme.tile_fill_opac)),
                ("stroke", &*format!("{}", theme.tile_stroke)),
                ("stroke-width", &*format!("{stroke_width}")),
            ],
        )
        .add(Title::new(format!("tile {i}, {placement}")));

        let mut tile_group = Group::new().set("id", format!("tile_{i}")).add(path);
        if options.centers {
            tile_group = tile_group.add(svg_util::point(
                placement.center(),
                None,
                Some(3.0 * stroke_width),
            ));
        }
        if options.labels {
            tile_group = tile_group.add(
                Text::new(format!("{i}"))
                    .set("x", placement.x as f32)
                    .set("y", placement.y as f32)
                    .set("font-size", font_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central"),
            );
        }
        tiles_group = tiles_group.add(tile_group);
    }

    Ok(Document::new()
        .set(
            "viewBox",
            (
                vbox.x_min as f32,
                vbox.y_min as f32,
                vbox.width() as f32,
                vbox.height() as f32,
            ),
        )
        .add(canvas_group)
        .add(tiles_group)
        .add(label))
}
