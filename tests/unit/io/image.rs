//! Tests for occupancy image loading and claim rendering

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use image::{Rgba, RgbaImage};
    use territory::TerritoryError;
    use territory::geometry::GridCell;
    use territory::io::configuration::{BACKGROUND_COLOR, CLAIMED_COLOR, TERRITORY_COLOR};
    use territory::io::image::{load_occupancy, render_claims};

    // Tests opaque pixels become occupied cells with column as x and row as z
    // Verified by swapping x and z
    #[test]
    fn test_load_occupancy_reads_opaque_pixels() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir should be creatable");
        };
        let path = dir.path().join("map.png");

        let mut img = RgbaImage::from_pixel(4, 3, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 2, Rgba([10, 20, 30, 255]));
        img.put_pixel(3, 0, Rgba([10, 20, 30, 200]));
        img.put_pixel(0, 0, Rgba([10, 20, 30, 40]));
        assert!(img.save(&path).is_ok());

        let Ok(map) = load_occupancy(&path, 5) else {
            unreachable!("written map should load");
        };

        assert_eq!((map.width, map.height), (4, 3));
        let expected: HashSet<_> = [GridCell::new(1, 2, 5), GridCell::new(3, 0, 5)].into();
        assert_eq!(map.occupied, expected);
    }

    #[test]
    fn test_load_occupancy_missing_file() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir should be creatable");
        };

        let result = load_occupancy(&dir.path().join("absent.png"), 0);

        assert!(matches!(result, Err(TerritoryError::ImageLoad { .. })));
    }

    // Tests claimed cells are drawn over territory and out-of-frame cells are clipped
    // Verified by drawing territory after claims
    #[test]
    fn test_render_claims_layers_and_clips() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir should be creatable");
        };
        let path = dir.path().join("nested/out/claims.png");

        let territory: HashSet<_> = [GridCell::new(0, 0, 0), GridCell::new(1, 0, 0)].into();
        let claimed = [
            GridCell::new(1, 0, 0),
            GridCell::new(2, 1, 0),
            GridCell::new(-1, 0, 0),
            GridCell::new(9, 9, 0),
        ];

        let result = render_claims(3, 2, &territory, &claimed, &path);
        assert!(result.is_ok(), "render should succeed: {result:?}");

        let Ok(rendered) = image::open(&path) else {
            unreachable!("rendered image should load");
        };
        let rendered = rendered.to_rgba8();
        assert_eq!(rendered.dimensions(), (3, 2));
        assert_eq!(rendered.get_pixel(0, 0), &Rgba(TERRITORY_COLOR));
        assert_eq!(rendered.get_pixel(1, 0), &Rgba(CLAIMED_COLOR));
        assert_eq!(rendered.get_pixel(2, 1), &Rgba(CLAIMED_COLOR));
        assert_eq!(rendered.get_pixel(0, 1), &Rgba(BACKGROUND_COLOR));
    }
}
