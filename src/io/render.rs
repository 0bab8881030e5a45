//! Frame capture and image export for simulation runs
//!
//! Pure observer of the run loop: capture never feeds back into stepping,
//! and pacing exists only as encoded frame delays.

use crate::io::configuration::{CELL_PIXEL_SCALE, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, SimulationError};
use crate::spatial::Grid;
use image::codecs::gif::GifEncoder;
use image::{Frame, Rgba, RgbaImage};

// Binary colormap: 0 = white, 1 = black
const LIVE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const DEAD_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Records one frame per observed generation for GIF export
pub struct FrameCapture {
    frames: Vec<RgbaImage>,
}

impl FrameCapture {
    /// Create an empty capture sized for the expected run length
    pub fn new(expected_generations: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_generations),
        }
    }

    /// Render the grid into a frame buffer
    pub fn record(&mut self, grid: &Grid) {
        self.frames.push(render_image(grid));
    }

    /// Number of captured frames
    pub const fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames have been captured
    pub const fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// Frame delays below the viewer minimum are honored by skipping frames
    /// proportionally so the apparent speed is preserved; the final frame
    /// displays longer for visibility.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - The output directory cannot be created
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(SimulationError::InvalidParameter {
                parameter: "frames",
                value: "0".to_string(),
                reason: "no generations were captured for visualization".to_string(),
            });
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };

        let mut frames = Vec::new();
        for (index, image) in self.frames.iter().enumerate() {
            let is_last = index + 1 == self.frames.len();
            if index % skip_factor != 0 && !is_last {
                continue;
            }
            let delay_ms = if is_last {
                effective_delay_ms * 10
            } else {
                effective_delay_ms
            };
            frames.push(Frame::from_parts(
                image.clone(),
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms, 1),
            ));
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| SimulationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| SimulationError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| SimulationError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}

/// Export one grid state as a PNG
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or the image
/// cannot be saved.
pub fn export_grid_as_png(grid: &Grid, output_path: &str) -> Result<()> {
    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| SimulationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render_image(grid)
        .save(output_path)
        .map_err(|e| SimulationError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}

fn render_image(grid: &Grid) -> RgbaImage {
    let width = grid.width() as u32 * CELL_PIXEL_SCALE;
    let height = grid.height() as u32 * CELL_PIXEL_SCALE;
    let mut img = RgbaImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let row = (y / CELL_PIXEL_SCALE) as usize;
        let col = (x / CELL_PIXEL_SCALE) as usize;
        *pixel = if grid.cell(row, col) == 1 {
            LIVE_COLOR
        } else {
            DEAD_COLOR
        };
    }

    img
}
