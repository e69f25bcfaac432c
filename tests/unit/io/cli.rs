//! Tests for command-line parsing and the claim runner

#[cfg(test)]
mod tests {
    use std::path::{Path as FsPath, PathBuf};

    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use territory::TerritoryError;
    use territory::algorithm::strategy::FillAlgorithm;
    use territory::geometry::GridCell;
    use territory::io::cli::{ClaimRunner, Cli, parse_cell, parse_stroke};
    use territory::io::configuration::{DEFAULT_FILL_ALGORITHM, DEFAULT_MAX_GROWTH_CELLS};

    fn write_map(path: &FsPath) {
        let mut img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
        for y in 1..6 {
            for x in 0..3 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        assert!(img.save(path).is_ok());
    }

    // Tests CLI parsing with only the required arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from([
            "territory",
            "map.png",
            "--stroke",
            "0,0;0,1",
            "--start",
            "1,1",
            "--end",
            "1,2",
        ]);

        assert_eq!(cli.map, PathBuf::from("map.png"));
        assert_eq!(cli.algorithm, DEFAULT_FILL_ALGORITHM);
        assert_eq!(cli.max_cells, DEFAULT_MAX_GROWTH_CELLS);
        assert_eq!(cli.plane, 0);
        assert!(!cli.verbose);
        assert_eq!(cli.output_path(), PathBuf::from("map_claimed.png"));
    }

    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "territory",
            "maps/world.png",
            "--stroke",
            "0,0",
            "--start",
            "1,1",
            "--end",
            "1,2",
            "--algorithm",
            "crossing-number",
            "--max-cells",
            "500",
            "--plane",
            "-4",
            "--output",
            "out.png",
            "-v",
        ]);

        assert_eq!(cli.algorithm, FillAlgorithm::CrossingNumber);
        assert_eq!(cli.settings().max_cells, 500);
        assert_eq!(cli.plane, -4);
        assert!(cli.verbose);
        assert_eq!(cli.output_path(), PathBuf::from("out.png"));
    }

    #[test]
    fn test_default_output_sits_next_to_map() {
        let cli = Cli::parse_from([
            "territory", "maps/world.png", "-s", "0,0", "--start", "0,0", "--end", "0,0",
        ]);

        assert_eq!(cli.output_path(), PathBuf::from("maps/world_claimed.png"));
    }

    // Tests cell and stroke parsing including whitespace and malformed input
    #[test]
    fn test_parse_cell_and_stroke() {
        assert_eq!(parse_cell("start", " -3, 7 ", 2).ok(), Some(GridCell::new(-3, 7, 2)));
        assert!(matches!(
            parse_cell("start", "1,2,3", 0),
            Err(TerritoryError::InvalidParameter {
                parameter: "start",
                ..
            })
        ));
        assert!(parse_cell("end", "a,b", 0).is_err());
        assert!(parse_cell("end", "4", 0).is_err());

        let Ok(stroke) = parse_stroke("0,0; 0,1;0,2;", 0) else {
            unreachable!("well-formed stroke should parse");
        };
        assert_eq!(stroke.len(), 3);
        assert_eq!(stroke.last(), Some(GridCell::new(0, 2, 0)));
        assert!(parse_stroke("0,0;x", 0).is_err());
    }

    // Tests a connecting stroke is claimed and rendered next to the map
    #[test]
    fn test_runner_claims_and_renders() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir should be creatable");
        };
        let map = dir.path().join("world.png");
        write_map(&map);

        let cli = Cli::parse_from([
            "territory".into(),
            map.clone().into_os_string(),
            "--stroke".into(),
            "3,1;3,2;3,3;3,4;3,5".into(),
            "--start".into(),
            "2,1".into(),
            "--end".into(),
            "2,5".into(),
        ]);

        let claimed = ClaimRunner::new(cli).run();

        assert!(matches!(claimed, Ok(Some(count)) if count >= 5));
        assert!(dir.path().join("world_claimed.png").exists());
    }

    // Tests a detached stroke is reported as rejected without output
    #[test]
    fn test_runner_reports_rejection() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir should be creatable");
        };
        let map = dir.path().join("world.png");
        write_map(&map);

        let cli = Cli::parse_from([
            "territory".into(),
            map.into_os_string(),
            "--stroke".into(),
            "6,1;6,2".into(),
            "--start".into(),
            "2,1".into(),
            "--end".into(),
            "2,5".into(),
        ]);

        assert!(matches!(ClaimRunner::new(cli).run(), Ok(None)));
        assert!(!dir.path().join("world_claimed.png").exists());
    }
}
