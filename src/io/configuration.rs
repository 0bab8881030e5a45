//! Simulation constants and runtime configuration defaults

/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 100;
/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 100;

/// Fixed seed for reproducible random seeding
pub const DEFAULT_SEED: u64 = 42;

/// Default generation cap for interactive runs
pub const DEFAULT_MAX_GENERATIONS: usize = 300;

/// Generation cap used by the pattern analysis sweep
pub const ANALYSIS_GENERATION_CAP: usize = 100;

/// Live-cell percentage for uniform random fills
pub const DEFAULT_FILL_PERCENT: u8 = 50;

/// Fraction of each dimension covered by the central random region
pub const CENTRAL_AREA_RATIO: f64 = 0.3;
/// Live probability inside the central random region
pub const CENTRAL_FILL_PROBABILITY: f64 = 0.5;

/// Anchor positions for stamped patterns on the default grid
pub const PATTERN_ANCHORS: [[usize; 2]; 3] = [[25, 25], [45, 45], [65, 65]];

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Generations to keep rendering after a cycle is first detected
pub const POST_CYCLE_GENERATIONS: usize = 10;

// Output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 200;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Square pixel size of one cell in exported images
pub const CELL_PIXEL_SCALE: u32 = 4;
