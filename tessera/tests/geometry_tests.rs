#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use test_case::test_case;

    use tessera::entities::{CanvasGeometry, Placement};
    use tessera::geometry::Transformation;
    use tessera::geometry::geo_traits::{Shape, Transformable};
    use tessera::geometry::primitives::{Point, Rect, SPolygon};

    #[test_case(0.0, 150.0, 100.0; "upright")]
    #[test_case(90.0, 100.0, 150.0; "quarter turn")]
    #[test_case(180.0, 150.0, 100.0; "half turn")]
    fn rotated_rectangle_bbox(rotation: f64, bbox_width: f64, bbox_height: f64) {
        let rect = SPolygon::rotated_rectangle(Point(300.0, 200.0), 150.0, 100.0, rotation).unwrap();
        let bbox = rect.bbox();

        assert!(approx_eq!(f64, bbox.width(), bbox_width, epsilon = 1e-9));
        assert!(approx_eq!(f64, bbox.height(), bbox_height, epsilon = 1e-9));
        assert!(approx_eq!(f64, rect.area(), 15000.0, epsilon = 1e-6));

        let centroid = rect.centroid();
        assert!(approx_eq!(f64, centroid.x(), 300.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, centroid.y(), 200.0, epsilon = 1e-9));
    }

    #[test]
    fn positive_rotation_turns_clockwise_on_screen() {
        //the first corner is the top left one before rotating
        let rect = SPolygon::rotated_rectangle(Point(0.0, 0.0), 150.0, 100.0, 90.0).unwrap();
        let top_left = rect.vertex(0);
        assert!(approx_eq!(f64, top_left.x(), 50.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, top_left.y(), -75.0, epsilon = 1e-9));
    }

    #[test_case(Point(300.0, 200.0), true; "center")]
    #[test_case(Point(370.0, 240.0), true; "near corner")]
    #[test_case(Point(380.0, 200.0), false; "right of tile")]
    #[test_case(Point(300.0, 260.0), false; "below tile")]
    fn upright_rectangle_contains(p: Point, inside: bool) {
        let rect = SPolygon::rotated_rectangle(Point(300.0, 200.0), 150.0, 100.0, 0.0).unwrap();
        assert_eq!(rect.contains(p), inside);
    }

    #[test]
    fn diagonal_rectangle_contains() {
        let rect = SPolygon::rotated_rectangle(Point(0.0, 0.0), 150.0, 100.0, 45.0).unwrap();
        //the tip of the long axis points to the bottom right
        assert!(rect.contains(Point(45.0, 45.0)));
        assert!(!rect.contains(Point(80.0, 0.0)));
        assert!(!rect.contains(Point(-80.0, 0.0)));
    }

    #[test]
    fn scanline_crossings_are_sorted() {
        let rect = SPolygon::rotated_rectangle(Point(300.0, 200.0), 150.0, 100.0, 30.0).unwrap();
        let crossings = rect.scanline_crossings(200.0);
        assert_eq!(crossings.len(), 2);
        assert!(crossings[0] < 300.0 && 300.0 < crossings[1]);
        assert!(rect.scanline_crossings(1000.0).is_empty());
    }

    #[test]
    fn degenerate_polygons_are_rejected() {
        assert!(SPolygon::rotated_rectangle(Point(0.0, 0.0), 0.0, 10.0, 0.0).is_err());
        assert!(SPolygon::rotated_rectangle(Point(f64::NAN, 0.0), 10.0, 10.0, 0.0).is_err());
        assert!(SPolygon::rotated_rectangle(Point(0.0, 0.0), 10.0, 10.0, f64::INFINITY).is_err());
        assert!(SPolygon::new(vec![Point(0.0, 0.0), Point(1.0, 1.0)]).is_err());
        assert!(SPolygon::new(vec![Point(0.0, 0.0), Point(1.0, 1.0), Point(2.0, 2.0)]).is_err());
    }

    #[test_case(0.0; "no rotation")]
    #[test_case(37.5; "oblique")]
    #[test_case(-90.0; "negative")]
    fn rotation_about_pivot_is_undone_by_inverse(angle: f64) {
        let pivot = Point(12.0, -4.0);
        let t = Transformation::from_translation((-12.0, 4.0))
            .rotate(angle.to_radians())
            .translate((12.0, -4.0));
        let inv = t.clone().inverse();

        let (px, py) = t.apply(pivot.x(), pivot.y());
        assert!(approx_eq!(f64, px, 12.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, py, -4.0, epsilon = 1e-9));

        let p = Point(31.0, 77.0);
        let back = p.transform_clone(&t).transform_clone(&inv);
        assert!(approx_eq!(f64, back.x(), p.x(), epsilon = 1e-9));
        assert!(approx_eq!(f64, back.y(), p.y(), epsilon = 1e-9));
        assert!(approx_eq!(
            f64,
            p.distance(&pivot),
            p.transform_clone(&t).distance(&pivot),
            epsilon = 1e-9
        ));
    }

    #[test_case(Point(300.0, 200.0), 200.0; "center")]
    #[test_case(Point(10.0, 200.0), 10.0; "near left border")]
    #[test_case(Point(300.0, 395.0), 5.0; "near bottom border")]
    #[test_case(Point(-5.0, 200.0), -5.0; "outside")]
    fn distance_to_canvas_border(p: Point, expected: f64) {
        let canvas = Rect::try_new(0.0, 0.0, 600.0, 400.0).unwrap();
        assert!(approx_eq!(f64, canvas.distance_to_border(p), expected));
    }

    #[test]
    fn tile_polygon_follows_placement() {
        let geometry = CanvasGeometry::default();
        let tile = geometry
            .tile_polygon(&Placement::new(100.0, 80.0, 90.0))
            .unwrap();
        assert!(approx_eq!(f64, tile.bbox().width(), geometry.tile_height, epsilon = 1e-9));
        assert!(approx_eq!(f64, tile.bbox().height(), geometry.tile_width, epsilon = 1e-9));
        assert!(tile.contains(Point(100.0, 80.0)));
    }

    #[test_case(0.0, 400.0, 150.0, 100.0; "zero width")]
    #[test_case(600.0, -1.0, 150.0, 100.0; "negative height")]
    #[test_case(600.0, 400.0, f64::NAN, 100.0; "nan tile width")]
    fn invalid_geometry_is_rejected(w: f64, h: f64, tw: f64, th: f64) {
        assert!(CanvasGeometry::try_new(w, h, tw, th).is_err());
    }
}
