//! Command-line interface for simulation runs and cycle analysis
//!
//! Pattern choice, boundary mode, and fill density are all explicit flags,
//! keeping the algorithm decoupled from console I/O.

use crate::engine::cycle::CycleReport;
use crate::engine::simulation::Simulation;
use crate::io::configuration::{
    ANALYSIS_GENERATION_CAP, CENTRAL_AREA_RATIO, CENTRAL_FILL_PROBABILITY, DEFAULT_HEIGHT,
    DEFAULT_MAX_GENERATIONS, DEFAULT_SEED, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
    POST_CYCLE_GENERATIONS,
};
use crate::io::error::Result;
use crate::io::progress::{RunProgress, SweepProgress};
use crate::io::render::FrameCapture;
use crate::seed::{CentralAreaSeeder, Pattern, PatternSeeder, RandomFillSeeder, Seeder};
use clap::{Parser, ValueEnum};

/// Pattern names accepted on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PatternArg {
    /// 3x3 vertical bar oscillator
    Blinker,
    /// 4x4 ring
    TrafficLight,
    /// 2x2 diagonal pair
    SmallOscillator,
    /// 3x3 diamond with glider-like behavior
    ZigzagGlider,
    /// 5x5 plus sign
    PlusShape,
    /// 5x5 hollow box that emits gliders
    SquareShape,
    /// 5x5 X
    XShape,
    /// Single live cell
    SingleCell,
}

impl From<PatternArg> for Pattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Blinker => Self::Blinker,
            PatternArg::TrafficLight => Self::TrafficLight,
            PatternArg::SmallOscillator => Self::SmallOscillator,
            PatternArg::ZigzagGlider => Self::ZigzagGlider,
            PatternArg::PlusShape => Self::PlusShape,
            PatternArg::SquareShape => Self::SquareShape,
            PatternArg::XShape => Self::XShape,
            PatternArg::SingleCell => Self::SingleCell,
        }
    }
}

#[derive(Parser)]
#[command(name = "blocklife")]
#[command(
    author,
    version,
    about = "Simulate a Margolus block cellular automaton and report cycle periods"
)]
/// Command-line arguments for the simulator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Pattern stamped into the initial grid
    #[arg(value_enum, default_value_t = PatternArg::Blinker)]
    pub pattern: PatternArg,

    /// Treat opposite grid edges as adjacent (toroidal boundary)
    #[arg(short = 'W', long)]
    pub wrap: bool,

    /// Random seed for reproducible random fills
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum generations before stopping
    #[arg(short, long, default_value_t = DEFAULT_MAX_GENERATIONS)]
    pub generations: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Fill the whole grid randomly with this live percentage instead of a pattern
    #[arg(short, long, value_name = "PERCENT")]
    pub fill: Option<u8>,

    /// Fill a random central region instead of a pattern
    #[arg(short, long)]
    pub central: bool,

    /// Export the run as an animated GIF to this path
    #[arg(long, value_name = "PATH")]
    pub gif: Option<String>,

    /// Analyze cycle periods for every pattern in both wrap modes
    #[arg(short, long)]
    pub analyze: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Result row of one pattern's analysis runs
struct SweepRow {
    pattern: Pattern,
    wrapped_period: Option<usize>,
    open_period: Option<usize>,
}

/// Orchestrates simulation runs from parsed arguments
pub struct SimulationRunner {
    cli: Cli,
}

impl SimulationRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the requested mode
    ///
    /// # Errors
    ///
    /// Returns an error if seeding parameters are rejected or image export
    /// fails.
    pub fn run(&self) -> Result<()> {
        if self.cli.analyze {
            self.run_analysis()
        } else {
            self.run_simulation()
        }
    }

    fn build_seeder(&self) -> Result<Box<dyn Seeder>> {
        if let Some(percentage) = self.cli.fill {
            return Ok(Box::new(RandomFillSeeder::new(percentage, self.cli.seed)?));
        }
        if self.cli.central {
            return Ok(Box::new(CentralAreaSeeder::new(
                CENTRAL_AREA_RATIO,
                CENTRAL_FILL_PROBABILITY,
                self.cli.seed,
            )?));
        }
        Ok(Box::new(PatternSeeder::new(self.cli.pattern.into())))
    }

    // Allow print for the run summary
    #[allow(clippy::print_stdout)]
    fn run_simulation(&self) -> Result<()> {
        let seeder = self.build_seeder()?;
        let grid = seeder.seed(self.cli.height, self.cli.width)?;
        let mut simulation = Simulation::new(grid, self.cli.wrap);

        let progress = self
            .cli
            .should_show_progress()
            .then(|| RunProgress::new(self.cli.generations, "generations"));
        let mut capture = self
            .cli
            .gif
            .as_ref()
            .map(|_| FrameCapture::new(self.cli.generations + 1));
        if let Some(ref mut frames) = capture {
            frames.record(simulation.grid());
        }

        let mut detection: Option<(CycleReport, u64)> = None;
        let mut remaining_after_cycle = POST_CYCLE_GENERATIONS;
        for _ in 0..self.cli.generations {
            let report = simulation.advance();
            if let Some(ref bar) = progress {
                bar.update(simulation.generation());
            }
            if let Some(ref mut frames) = capture {
                frames.record(simulation.grid());
            }

            if report.detected() && detection.is_none() {
                detection = Some((report, simulation.generation()));
            }
            // Keep rendering a few generations so the cycle stays visible
            if detection.is_some() {
                if remaining_after_cycle == 0 {
                    break;
                }
                remaining_after_cycle -= 1;
            }
        }

        if let Some(ref bar) = progress {
            let status = detection.map_or_else(
                || "no cycle detected".to_string(),
                |(report, _)| format!("period {}", report.period),
            );
            bar.finish(&status);
        }

        if let (Some(path), Some(frames)) = (&self.cli.gif, &capture) {
            frames.export_gif(path, GIF_FRAME_DELAY_MS)?;
        }

        let summary = detection.map_or_else(
            || {
                format!(
                    "No cycle detected within {} generations",
                    self.cli.generations
                )
            },
            |(report, generation)| {
                format!(
                    "Cycle detected at generation {generation}: period {}, cycle start index {}",
                    report.period, report.cycle_start
                )
            },
        );
        println!("{summary}");
        Ok(())
    }

    // Allow print for the analysis table
    #[allow(clippy::print_stdout)]
    fn run_analysis(&self) -> Result<()> {
        let progress = self
            .cli
            .should_show_progress()
            .then(|| SweepProgress::new(Pattern::ALL.len() * 2));

        let mut rows = Vec::with_capacity(Pattern::ALL.len());
        for pattern in Pattern::ALL {
            let wrapped_period = self.analyze_pattern(pattern, true)?;
            if let Some(ref bar) = progress {
                bar.complete_run();
            }
            let open_period = self.analyze_pattern(pattern, false)?;
            if let Some(ref bar) = progress {
                bar.complete_run();
            }
            rows.push(SweepRow {
                pattern,
                wrapped_period,
                open_period,
            });
        }
        if let Some(ref bar) = progress {
            bar.finish();
        }

        println!("Pattern             | With wrap-around | Without wrap-around");
        println!("--------------------|------------------|--------------------");
        for row in &rows {
            println!(
                "{:<20}| {:<17}| {}",
                row.pattern.name(),
                describe_period(row.wrapped_period),
                describe_period(row.open_period)
            );
        }
        Ok(())
    }

    fn analyze_pattern(&self, pattern: Pattern, wrap_around: bool) -> Result<Option<usize>> {
        let seeder = PatternSeeder::new(pattern);
        let grid = seeder.seed(self.cli.height, self.cli.width)?;
        let mut simulation = Simulation::new(grid, wrap_around);
        let outcome = simulation.run_to_cycle(ANALYSIS_GENERATION_CAP);
        Ok(outcome.report.detected().then_some(outcome.report.period))
    }
}

fn describe_period(period: Option<usize>) -> String {
    period.map_or_else(
        || format!("none in {ANALYSIS_GENERATION_CAP} gens"),
        |p| p.to_string(),
    )
}
