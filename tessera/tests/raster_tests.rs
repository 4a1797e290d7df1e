#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use tessera::entities::{CanvasGeometry, Placement, PositionList};
    use tessera::geometry::primitives::{Point, SPolygon};
    use tessera::io::preview::{PreviewMode, PreviewOptions, layout_to_raster};
    use tessera::io::svg::{SvgDrawOptions, layout_to_svg};
    use tessera::io::ext_repr::ExtPositionList;
    use tessera::io::{export, import};
    use tessera::raster::{Color, Interpolation, Mask, PixelRegion, RasterImage};

    const RED: Color = Color(0xFF, 0x00, 0x00);

    /// Image in which every pixel has a unique color
    fn gradient(width: usize, height: usize) -> RasterImage {
        let data = (0..height)
            .flat_map(|y| (0..width).flat_map(move |x| [x as u8, y as u8, (x * y) as u8]))
            .collect();
        RasterImage::from_raw(width, height, data).unwrap()
    }

    #[test_case(0.0, 150, 100; "upright")]
    #[test_case(90.0, 100, 150; "quarter turn")]
    #[test_case(180.0, 150, 100; "half turn")]
    fn mask_of_axis_aligned_tile(rotation: f64, width: usize, height: usize) {
        let rect = SPolygon::rotated_rectangle(Point(300.0, 200.0), 150.0, 100.0, rotation).unwrap();
        let mask = Mask::rasterize(&rect);

        assert_eq!(mask.count(), 15000);
        assert_eq!((mask.region().width, mask.region().height), (width, height));
        assert!(mask.contains(300, 200));
        assert!(!mask.contains(0, 0));
    }

    #[test_case(30.0; "thirty degrees")]
    #[test_case(45.0; "forty five degrees")]
    #[test_case(123.4; "obtuse")]
    fn mask_of_rotated_tile_has_tile_area(rotation: f64) {
        let rect = SPolygon::rotated_rectangle(Point(500.0, 500.0), 150.0, 100.0, rotation).unwrap();
        let mask = Mask::rasterize(&rect);
        let deviation = (mask.count() as f64 - 15000.0).abs() / 15000.0;
        assert!(deviation < 0.02, "covered {} pixels", mask.count());
    }

    #[test]
    fn mask_region_is_symmetric_around_integer_center() {
        let rect = SPolygon::rotated_rectangle(Point(500.0, 500.0), 150.0, 100.0, 45.0).unwrap();
        let region = Mask::rasterize(&rect).region();
        assert_eq!(500 - region.x, region.x_end() - 500);
        assert_eq!(500 - region.y, region.y_end() - 500);
    }

    #[test]
    fn subtracting_inner_mask_leaves_border() {
        let outer = Mask::rasterize(
            &SPolygon::rotated_rectangle(Point(50.0, 50.0), 20.0, 10.0, 0.0).unwrap(),
        );
        let inner = Mask::rasterize(
            &SPolygon::rotated_rectangle(Point(50.0, 50.0), 16.0, 6.0, 0.0).unwrap(),
        );
        let border = outer.subtract(&inner);
        assert_eq!(border.count(), 200 - 96);
        assert!(border.contains(40, 45));
        assert!(!border.contains(50, 50));
    }

    #[test]
    fn pad_surrounds_image() {
        let padded = RasterImage::new(4, 3, RED).pad(2, Color::BLACK);
        assert_eq!(padded.dimensions(), (8, 7));
        assert_eq!(padded.pixel(0, 0), Color::BLACK);
        assert_eq!(padded.pixel(2, 2), RED);
        assert_eq!(padded.pixel(5, 4), RED);
        assert_eq!(padded.pixel(6, 4), Color::BLACK);
    }

    #[test]
    fn crop_outside_image_takes_fill() {
        let image = gradient(4, 3);
        let region = PixelRegion {
            x: -1,
            y: -1,
            width: 3,
            height: 3,
        };
        let cropped = image.crop(region, Color::WHITE);
        assert_eq!(cropped.dimensions(), (3, 3));
        assert_eq!(cropped.pixel(0, 0), Color::WHITE);
        assert_eq!(cropped.pixel(2, 0), Color::WHITE);
        assert_eq!(cropped.pixel(1, 1), image.pixel(0, 0));
        assert_eq!(cropped.pixel(2, 2), image.pixel(1, 1));

        let far_away = PixelRegion {
            x: 100,
            y: 100,
            width: 2,
            height: 2,
        };
        assert_eq!(image.crop(far_away, RED), RasterImage::new(2, 2, RED));
    }

    #[test]
    fn apply_mask_keeps_covered_pixels() {
        let mask = Mask::rasterize(&SPolygon::rotated_rectangle(Point(2.0, 2.0), 2.0, 2.0, 0.0).unwrap());
        let region = mask.region();
        let image = gradient(4, 4).crop(region, Color::BLACK);

        let masked = image.apply_mask(&mask, Color::BLACK).unwrap();
        assert_eq!(masked, image);

        let too_large = gradient(5, 5);
        assert!(too_large.apply_mask(&mask, Color::BLACK).is_err());
    }

    #[test]
    fn paint_ignores_pixels_outside_the_image() {
        let mut image = RasterImage::new(10, 10, Color::WHITE);
        let mask = Mask::rasterize(&SPolygon::rotated_rectangle(Point(0.0, 0.0), 4.0, 4.0, 0.0).unwrap());
        image.paint(&mask, RED);
        assert_eq!(image.pixel(0, 0), RED);
        assert_eq!(image.pixel(1, 1), RED);
        assert_eq!(image.pixel(2, 2), Color::WHITE);
    }

    #[test_case(Interpolation::Nearest; "nearest")]
    #[test_case(Interpolation::Bilinear; "bilinear")]
    fn rotation_by_zero_is_identity(interpolation: Interpolation) {
        let image = gradient(9, 6);
        let pivot = Point(4.5, 3.0);
        let rotated = image.rotate_onto(pivot, 0.0, (9, 6), pivot, interpolation, RED);
        assert_eq!(rotated, image);
    }

    #[test]
    fn quarter_turn_moves_top_right_to_bottom_right() {
        let mut image = RasterImage::new(4, 4, Color::WHITE);
        image.put_pixel(3, 0, RED);
        let pivot = Point(2.0, 2.0);
        let rotated = image.rotate_onto(pivot, 90.0, (4, 4), pivot, Interpolation::Nearest, Color::BLACK);
        assert_eq!(rotated.pixel(3, 3), RED);
        assert_eq!(rotated.pixel(3, 0), Color::WHITE);
    }

    #[test]
    fn rotation_fills_uncovered_corners() {
        let image = RasterImage::new(20, 10, Color::WHITE);
        let pivot = Point(10.0, 5.0);
        let rotated = image.rotate_onto(pivot, 90.0, (20, 10), pivot, Interpolation::Bilinear, RED);
        assert_eq!(rotated.pixel(0, 0), RED);
        assert_eq!(rotated.pixel(10, 5), Color::WHITE);
    }

    #[test_case(Interpolation::Nearest; "nearest")]
    #[test_case(Interpolation::Bilinear; "bilinear")]
    fn half_turn_onto_odd_window_keeps_every_pixel(interpolation: Interpolation) {
        //odd sized content in an even sized buffer, its center sits on a pixel center
        let mut image = RasterImage::new(8, 6, RED);
        let content = gradient(5, 3);
        for y in 0..3 {
            for x in 0..5 {
                image.put_pixel(x + 1, y + 1, content.pixel(x, y));
            }
        }
        let rotated = image.rotate_onto(
            Point(3.5, 2.5),
            180.0,
            (5, 3),
            Point(2.5, 1.5),
            interpolation,
            RED,
        );

        assert_eq!(rotated.dimensions(), (5, 3));
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(rotated.pixel(x, y), content.pixel(4 - x, 2 - y), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn raw_buffer_must_match_dimensions() {
        assert!(RasterImage::from_raw(2, 2, vec![0; 11]).is_err());
        let image = gradient(3, 2);
        let raw = image.to_raw();
        assert_eq!(raw.len(), 18);
        assert_eq!(RasterImage::from_raw(3, 2, raw).unwrap(), image);
    }

    #[test_case("#FF8000", Some(Color(0xFF, 0x80, 0x00)); "with hash")]
    #[test_case("00ff00", Some(Color(0x00, 0xFF, 0x00)); "lower case without hash")]
    #[test_case("#GG0000", None; "not hex")]
    #[test_case("#FFF", None; "too short")]
    fn parse_color(s: &str, expected: Option<Color>) {
        assert_eq!(Color::from_str(s).ok(), expected);
    }

    #[test]
    fn color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color(0x12, 0xAB, 0x00)).unwrap();
        assert_eq!(json, "\"#12AB00\"");
        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Color(0x12, 0xAB, 0x00));
    }

    fn two_tiles() -> PositionList {
        PositionList::new(vec![
            Placement::new(150.0, 150.0, 0.0),
            Placement::new(420.0, 260.0, 30.0),
        ])
    }

    #[test]
    fn filled_preview_paints_every_tile() {
        let geometry = CanvasGeometry::default();
        let mut rng = SmallRng::seed_from_u64(0);
        let preview =
            layout_to_raster(&two_tiles(), &geometry, PreviewOptions::default(), &mut rng).unwrap();

        assert_eq!(preview.dimensions(), (600, 400));
        assert_eq!(preview.pixel(5, 5), Color::WHITE);
        assert_ne!(preview.pixel(150, 150), Color::WHITE);
        assert_ne!(preview.pixel(420, 260), Color::WHITE);
    }

    #[test]
    fn outline_preview_leaves_tile_interior_empty() {
        let geometry = CanvasGeometry::default();
        let options = PreviewOptions {
            mode: PreviewMode::Outline,
            outline_thickness: 3.0,
            ..PreviewOptions::default()
        };
        let mut rng = SmallRng::seed_from_u64(0);
        let preview = layout_to_raster(&two_tiles(), &geometry, options, &mut rng).unwrap();

        assert_eq!(preview.pixel(150, 150), Color::WHITE);
        //left border of the upright tile spans x 75..78
        assert_ne!(preview.pixel(76, 150), Color::WHITE);
        assert_eq!(preview.pixel(79, 150), Color::WHITE);
    }

    #[test]
    fn svg_contains_every_tile() {
        let geometry = CanvasGeometry::default();
        let document = layout_to_svg(&two_tiles(), &geometry, SvgDrawOptions::default(), "test")
            .unwrap()
            .to_string();
        assert!(document.contains("tile_0"));
        assert!(document.contains("tile_1"));
        assert!(!document.contains("tile_2"));
    }

    #[test]
    fn positions_survive_external_representation() {
        let positions = two_tiles();
        let json = serde_json::to_string(&export::export_positions(&positions)).unwrap();
        assert_eq!(json, "[[150.0,150.0,0.0],[420.0,260.0,30.0]]");

        let ext: ExtPositionList = serde_json::from_str(&json).unwrap();
        assert_eq!(import::import_positions(&ext).unwrap(), positions);
    }
}
