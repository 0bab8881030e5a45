//! Random fill seeders with reproducible generators
//!
//! All randomness flows through a seeded `StdRng` so that identical seeds
//! reproduce identical grids.

use crate::io::error::{Result, invalid_parameter};
use crate::seed::Seeder;
use crate::spatial::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fills every cell independently with a fixed live percentage
#[derive(Copy, Clone, Debug)]
pub struct RandomFillSeeder {
    percentage: u8,
    rng_seed: u64,
}

impl RandomFillSeeder {
    /// Create a uniform fill seeder
    ///
    /// # Errors
    ///
    /// Returns an error if `percentage` exceeds 100.
    pub fn new(percentage: u8, rng_seed: u64) -> Result<Self> {
        if percentage > 100 {
            return Err(invalid_parameter(
                "percentage",
                &percentage,
                &"must be between 0 and 100",
            ));
        }
        Ok(Self {
            percentage,
            rng_seed,
        })
    }
}

impl Seeder for RandomFillSeeder {
    fn seed(&self, height: usize, width: usize) -> Result<Grid> {
        let probability = f64::from(self.percentage) / 100.0;
        let mut rng = StdRng::seed_from_u64(self.rng_seed);
        let rows: Vec<Vec<u8>> = (0..height)
            .map(|_| {
                (0..width)
                    .map(|_| u8::from(rng.random_bool(probability)))
                    .collect()
            })
            .collect();
        Grid::from_rows(&rows)
    }
}

/// Zero grid with a randomly filled centered region
#[derive(Copy, Clone, Debug)]
pub struct CentralAreaSeeder {
    size_ratio: f64,
    probability: f64,
    rng_seed: u64,
}

impl CentralAreaSeeder {
    /// Create a central area seeder
    ///
    /// # Errors
    ///
    /// Returns an error if `size_ratio` or `probability` falls outside
    /// [0, 1].
    pub fn new(size_ratio: f64, probability: f64, rng_seed: u64) -> Result<Self> {
        if !(0.0..=1.0).contains(&size_ratio) {
            return Err(invalid_parameter(
                "size_ratio",
                &size_ratio,
                &"must be between 0.0 and 1.0",
            ));
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(invalid_parameter(
                "probability",
                &probability,
                &"must be between 0.0 and 1.0",
            ));
        }
        Ok(Self {
            size_ratio,
            probability,
            rng_seed,
        })
    }
}

impl Seeder for CentralAreaSeeder {
    fn seed(&self, height: usize, width: usize) -> Result<Grid> {
        let mut grid = Grid::new(height, width)?;

        let region_height = (height as f64 * self.size_ratio) as usize;
        let region_width = (width as f64 * self.size_ratio) as usize;
        let top = (height - region_height) / 2;
        let left = (width - region_width) / 2;

        let mut rng = StdRng::seed_from_u64(self.rng_seed);
        let region: Vec<Vec<u8>> = (0..region_height)
            .map(|_| {
                (0..region_width)
                    .map(|_| u8::from(rng.random_bool(self.probability)))
                    .collect()
            })
            .collect();
        let borrowed: Vec<&[u8]> = region.iter().map(Vec::as_slice).collect();
        grid.stamp(top, left, &borrowed)?;
        Ok(grid)
    }
}
