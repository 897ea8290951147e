//! Tests for argument parsing, validation and the headless run loop

#[cfg(test)]
mod tests {
    use algosketch::SketchError;
    use algosketch::io::cli::{Cli, SketchRunner};
    use algosketch::io::configuration::{BACKGROUND, DEFAULT_FRAMES, DEFAULT_SEED, DEFAULT_WIDTH};
    use algosketch::modes::ModeKind;
    use clap::Parser;
    use std::path::Path;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["algosketch"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap_or_else(|error| panic!("arguments rejected: {error}"))
    }

    fn quiet_run(temp: &Path, extra: &[&str]) -> Cli {
        let output = temp.join("frame.png");
        let output = output.to_string_lossy().into_owned();
        let mut args = vec!["-q", "-W", "64", "-H", "48", "-f", "3", "-o", output.as_str()];
        args.extend_from_slice(extra);
        parse(&args)
    }

    // Tests defaults match the configuration constants
    // Verified by changing the default mode
    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.mode, ModeKind::Art);
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.frames, DEFAULT_FRAMES);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.output, Path::new("sketch.png"));
        assert!(cli.gif.is_none());
        assert!(cli.should_show_progress());
        assert!(!cli.overlay);
        assert_eq!(cli.log_level(), "warn");
    }

    // Tests mode names use kebab case
    // Verified by renaming the value enum variants
    #[test]
    fn test_mode_names() {
        assert_eq!(parse(&["-m", "binary-search"]).mode, ModeKind::BinarySearch);
        assert_eq!(parse(&["--mode", "traversal"]).mode, ModeKind::Traversal);
        assert!(Cli::try_parse_from(["algosketch", "-m", "mergesort"]).is_err());
    }

    // Tests verbosity and quiet flags
    // Verified by mapping every count to warn
    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["-v"]).log_level(), "info");
        assert_eq!(parse(&["-vv"]).log_level(), "debug");
        assert_eq!(parse(&["-vvvv"]).log_level(), "trace");
        assert!(!parse(&["-q"]).should_show_progress());
    }

    // Tests validation rejects unusable surfaces and rates
    // Verified by removing the width check
    #[test]
    fn test_validate_rejects_bad_arguments() {
        let zero_width = SketchRunner::new(parse(&["-W", "0"]));
        assert!(matches!(
            zero_width.validate(),
            Err(SketchError::InvalidParameter { parameter: "width", .. })
        ));

        let huge_height = SketchRunner::new(parse(&["-H", "9000"]));
        assert!(matches!(
            huge_height.validate(),
            Err(SketchError::InvalidParameter { parameter: "height", .. })
        ));

        let zero_fps = SketchRunner::new(parse(&["--fps", "0"]));
        assert!(matches!(
            zero_fps.validate(),
            Err(SketchError::InvalidParameter { parameter: "fps", .. })
        ));

        let no_frames = SketchRunner::new(parse(&["-f", "0"]));
        assert!(matches!(
            no_frames.validate(),
            Err(SketchError::InvalidParameter { parameter: "frames", .. })
        ));

        assert!(SketchRunner::new(parse(&[])).validate().is_ok());
    }

    // Tests keys and script files merge into one schedule
    // Verified by dropping the keys when a script is given
    #[test]
    fn test_load_script_merges_sources() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("input.txt");
        std::fs::write(&path, "2 key r\n1 press 10 10\n").expect("Failed to write script");
        let script_arg = path.to_string_lossy().into_owned();

        let runner = SketchRunner::new(parse(&["-k", "4p", "--script", script_arg.as_str()]));
        let script = runner.load_script().expect("Script should load");
        assert_eq!(script.len(), 4);
        assert_eq!(script.events_at(0).count(), 2);
        assert_eq!(script.events().last().map(|e| e.frame), Some(2));
    }

    // Tests a run writes the PNG and GIF outputs
    // Verified by skipping the GIF export
    #[test]
    fn test_run_writes_outputs() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let gif = temp.path().join("anim").join("run.gif");
        let gif_arg = gif.to_string_lossy().into_owned();
        let cli = quiet_run(temp.path(), &["-m", "quicksort", "-g", gif_arg.as_str()]);

        let summary = SketchRunner::new(cli).run().expect("Run failed");
        assert_eq!(summary.frames, 3);
        assert_eq!(summary.final_mode, ModeKind::Quicksort);
        assert!(!summary.image_loaded);
        assert!(gif.exists());

        let png = image::open(&summary.output).expect("Failed to decode PNG");
        assert_eq!((png.width(), png.height()), (64, 48));
    }

    // Tests a missing image is logged and the run falls back to palettes
    // Verified by propagating the image load error
    #[test]
    fn test_run_without_loadable_image() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let missing = temp.path().join("missing.png");
        let missing_arg = missing.to_string_lossy().into_owned();
        let cli = quiet_run(temp.path(), &["-i", missing_arg.as_str(), "-k", "i"]);

        let summary = SketchRunner::new(cli).run().expect("Run failed");
        assert!(!summary.image_loaded);
        assert!(summary.output.exists());
    }

    // Tests a malformed script aborts the run before rendering
    // Verified by ignoring script parse errors
    #[test]
    fn test_run_rejects_bad_script() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("bad.txt");
        std::fs::write(&path, "0 key q\nnot-a-frame key p\n").expect("Failed to write script");
        let script_arg = path.to_string_lossy().into_owned();
        let cli = quiet_run(temp.path(), &["--script", script_arg.as_str()]);

        let result = SketchRunner::new(cli).run();
        assert!(matches!(result, Err(SketchError::Script { line: 2, .. })));
        assert!(!temp.path().join("frame.png").exists());
    }

    // Tests the overlay flag darkens the top band of the written frame
    // Verified by ignoring the flag when building the sketch
    #[test]
    fn test_run_with_overlay() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let run = |name: &str, extra: &[&str]| {
            let output = temp.path().join(name).to_string_lossy().into_owned();
            let mut args = vec!["-q", "-m", "quicksort", "-W", "200", "-H", "120", "-f", "2"];
            args.extend_from_slice(&["-o", output.as_str()]);
            args.extend_from_slice(extra);
            SketchRunner::new(parse(&args)).run().expect("Run failed")
        };
        let plain_summary = run("plain.png", &[]);
        let shaded_summary = run("shaded.png", &["--overlay"]);
        assert!(parse(&["--overlay"]).overlay);

        let plain = image::open(&plain_summary.output).expect("Failed to decode PNG").to_rgba8();
        let shaded = image::open(&shaded_summary.output).expect("Failed to decode PNG").to_rgba8();
        assert_eq!(plain.get_pixel(1, 1).0, BACKGROUND);
        let corner = shaded.get_pixel(1, 1).0;
        assert!(corner.iter().zip(BACKGROUND).take(3).all(|(&shaded, plain)| shaded < plain));
        // Below the band the frames match
        assert_eq!(plain.get_pixel(1, 100), shaded.get_pixel(1, 100));
    }

    // Tests digit keys switch the mode before the first frame
    // Verified by routing digits to the active mode
    #[test]
    fn test_run_switches_mode_from_keys() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let cli = quiet_run(temp.path(), &["-m", "binary-search", "-k", "4"]);

        let summary = SketchRunner::new(cli).run().expect("Run failed");
        assert_eq!(summary.final_mode, ModeKind::Life);
    }
}
