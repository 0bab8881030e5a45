//! Named starting shapes and their placement

use crate::io::configuration::PATTERN_ANCHORS;
use crate::io::error::Result;
use crate::seed::Seeder;
use crate::spatial::Grid;

/// Catalog of seedable shapes
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
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

impl Pattern {
    /// Every catalogued pattern, in menu order
    pub const ALL: [Self; 8] = [
        Self::Blinker,
        Self::TrafficLight,
        Self::SmallOscillator,
        Self::ZigzagGlider,
        Self::PlusShape,
        Self::SquareShape,
        Self::XShape,
        Self::SingleCell,
    ];

    /// Cell rows of the shape, top to bottom
    pub const fn rows(self) -> &'static [&'static [u8]] {
        match self {
            Self::Blinker => &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]],
            Self::TrafficLight => &[
                &[0, 1, 1, 0],
                &[1, 0, 0, 1],
                &[1, 0, 0, 1],
                &[0, 1, 1, 0],
            ],
            Self::SmallOscillator => &[&[1, 0], &[0, 1]],
            Self::ZigzagGlider => &[&[0, 1, 0], &[1, 0, 1], &[0, 1, 0]],
            Self::PlusShape => &[
                &[0, 0, 1, 0, 0],
                &[0, 0, 1, 0, 0],
                &[1, 1, 1, 1, 1],
                &[0, 0, 1, 0, 0],
                &[0, 0, 1, 0, 0],
            ],
            Self::SquareShape => &[
                &[1, 1, 1, 1, 1],
                &[1, 0, 0, 0, 1],
                &[1, 0, 0, 0, 1],
                &[1, 0, 0, 0, 1],
                &[1, 1, 1, 1, 1],
            ],
            Self::XShape => &[
                &[1, 0, 0, 0, 1],
                &[0, 1, 0, 1, 0],
                &[0, 0, 1, 0, 0],
                &[0, 1, 0, 1, 0],
                &[1, 0, 0, 0, 1],
            ],
            Self::SingleCell => &[&[1]],
        }
    }

    /// Stable lowercase name for display and reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blinker => "blinker",
            Self::TrafficLight => "traffic_light",
            Self::SmallOscillator => "small_oscillator",
            Self::ZigzagGlider => "zigzag_glider",
            Self::PlusShape => "plus_shape",
            Self::SquareShape => "square_shape",
            Self::XShape => "x_shape",
            Self::SingleCell => "single_cell",
        }
    }
}

/// Stamps one pattern at a set of anchor positions
#[derive(Debug, Clone)]
pub struct PatternSeeder {
    pattern: Pattern,
    anchors: Vec<[usize; 2]>,
}

impl PatternSeeder {
    /// Seeder with the default diagonal anchors
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            anchors: PATTERN_ANCHORS.to_vec(),
        }
    }

    /// Seeder with caller-chosen anchors
    pub const fn with_anchors(pattern: Pattern, anchors: Vec<[usize; 2]>) -> Self {
        Self { pattern, anchors }
    }

    /// The pattern this seeder stamps
    pub const fn pattern(&self) -> Pattern {
        self.pattern
    }
}

impl Seeder for PatternSeeder {
    fn seed(&self, height: usize, width: usize) -> Result<Grid> {
        let mut grid = Grid::new(height, width)?;
        for &[row, col] in &self.anchors {
            grid.stamp(row, col, self.pattern.rows())?;
        }
        Ok(grid)
    }
}
