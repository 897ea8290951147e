//! Command-line interface and the headless run loop

use crate::host::input::InputScript;
use crate::host::sketch::Sketch;
use crate::io::configuration::{
    DEFAULT_FPS, DEFAULT_FRAMES, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, MAX_SURFACE_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{ImageSample, export_png};
use crate::io::progress::FrameProgress;
use crate::io::visualization::FrameRecorder;
use crate::modes::ModeKind;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug, Clone)]
#[command(name = "algosketch")]
#[command(
    author,
    version,
    about = "Render algorithm visualizations and divide-and-conquer art to PNG/GIF"
)]
/// Command-line arguments for a headless sketch run
pub struct Cli {
    /// Mode active at the first frame
    #[arg(short, long, value_enum, default_value_t = ModeKind::Art)]
    pub mode: ModeKind,

    /// Surface width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Surface height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Number of frames to run
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    pub frames: u64,

    /// Simulated frames per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: f64,

    /// Random seed for reproducible runs
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Keys pressed at frame 0, one per character (e.g. "5qpt")
    #[arg(short, long)]
    pub keys: Option<String>,

    /// Input script with one `<frame> <event> <args>` per line
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Optional image sampled by the art mode's image mode
    #[arg(short, long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// PNG written with the last frame
    #[arg(short, long, default_value = "sketch.png")]
    pub output: PathBuf,

    /// Also write every frame as an animated GIF
    #[arg(short, long, value_name = "FILE")]
    pub gif: Option<PathBuf>,

    /// Show the key help band from the first frame (toggled with `h`)
    #[arg(long)]
    pub overlay: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more; repeat for debug output (RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for the verbosity level
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames rendered
    pub frames: u64,
    /// Mode active when the run ended
    pub final_mode: ModeKind,
    /// Whether the image sample was loaded
    pub image_loaded: bool,
    /// Written PNG
    pub output: PathBuf,
    /// Written GIF, if requested
    pub gif: Option<PathBuf>,
}

/// Drives one sketch run from parsed arguments
pub struct SketchRunner {
    cli: Cli,
}

impl SketchRunner {
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Reject arguments the run cannot honor
    ///
    /// # Errors
    ///
    /// Returns `SketchError::InvalidParameter` for zero or oversized
    /// dimensions, a non-positive frame rate or a zero frame count.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.cli.width), ("height", self.cli.height)] {
            if value == 0 || value > MAX_SURFACE_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_SURFACE_DIMENSION}"),
                ));
            }
        }
        if !(self.cli.fps.is_finite() && self.cli.fps > 0.0) {
            return Err(invalid_parameter("fps", &self.cli.fps, &"must be a positive number"));
        }
        if self.cli.frames == 0 {
            return Err(invalid_parameter("frames", &0, &"at least one frame is required"));
        }
        Ok(())
    }

    /// Combine `--keys` and `--script` into one schedule
    ///
    /// # Errors
    ///
    /// Returns an error if the script file cannot be read or parsed
    pub fn load_script(&self) -> Result<InputScript> {
        let mut script = self
            .cli
            .keys
            .as_deref()
            .map(InputScript::from_keys)
            .unwrap_or_default();
        if let Some(path) = &self.cli.script {
            script.merge(InputScript::from_path(path)?);
        }
        Ok(script)
    }

    /// Load the optional image; failures are logged and the run continues without it
    pub fn load_image(&self) -> Option<ImageSample> {
        let path = self.cli.image.as_ref()?;
        match ImageSample::open(path) {
            Ok(sample) => {
                let (width, height) = sample.dimensions();
                tracing::info!(path = %path.display(), width, height, "image sample loaded");
                Some(sample)
            }
            Err(error) => {
                tracing::warn!(%error, "image sample unavailable, using palette colors");
                None
            }
        }
    }

    /// Run every frame and write the requested outputs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Arguments are invalid
    /// - The input script cannot be read or parsed
    /// - Writing the PNG or GIF fails
    pub fn run(&self) -> Result<RunSummary> {
        self.validate()?;
        let script = self.load_script()?;
        let image = self.load_image();
        let image_loaded = image.is_some();
        let start_time = Instant::now();

        let mut sketch = Sketch::new(
            self.cli.mode,
            self.cli.seed,
            self.cli.width,
            self.cli.height,
            self.cli.fps,
        )
        .with_image(image)
        .with_help(self.cli.overlay);
        let mut recorder = self.cli.gif.as_ref().map(|_| FrameRecorder::from_fps(self.cli.fps));
        let progress = if self.cli.should_show_progress() {
            FrameProgress::new(self.cli.frames, "rendering")
        } else {
            FrameProgress::hidden(self.cli.frames)
        };

        tracing::info!(
            mode = ?self.cli.mode,
            frames = self.cli.frames,
            seed = self.cli.seed,
            events = script.len(),
            "run started"
        );

        for _ in 0..self.cli.frames {
            let frame = sketch.run_frame(&script);
            if let Some(recorder) = recorder.as_mut() {
                recorder.record(frame);
            }
            progress.frame_done(sketch.mode().visualization().name());
        }

        progress.exporting("png");
        export_png(sketch.image(), &self.cli.output)?;
        tracing::info!(path = %self.cli.output.display(), "frame exported");

        if let (Some(recorder), Some(path)) = (&recorder, &self.cli.gif) {
            progress.exporting("gif");
            recorder.export_gif(path)?;
            tracing::info!(
                path = %path.display(),
                frames = recorder.frame_count(),
                skip = recorder.skip_factor(),
                "animation exported"
            );
        }
        progress.finish();

        tracing::info!(elapsed = ?start_time.elapsed(), "run finished");
        Ok(RunSummary {
            frames: sketch.frame(),
            final_mode: sketch.kind(),
            image_loaded,
            output: self.cli.output.clone(),
            gif: self.cli.gif.clone(),
        })
    }
}
