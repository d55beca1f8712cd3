//! Simulation options.
//!
//! [`GameOptions`] is fixed for the duration of a run. Build it through
//! [`GameOptions::builder`], which fills any option left unset with its
//! default before validating.

use crate::error::{Axis, ConfigError};
use crate::lattice::cell_count;

pub const DEFAULT_CELLS: usize = 75;
pub const DEFAULT_DENSITY: f64 = 0.15;
pub const DEFAULT_CANVAS_SIZE: u32 = 500;
pub const DEFAULT_POINT_SIZE: f32 = 3.0;

/// Options for one simulation run.
///
/// `width`, `height` and `size` belong to the renderer and are carried
/// through unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct GameOptions {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Rendered point size.
    pub size: f32,
    pub x_cells: usize,
    pub y_cells: usize,
    pub z_cells: usize,
    /// Probability that a cell starts alive.
    pub density: f64,
    /// Worker threads for the transition. 1 steps on the calling thread.
    pub threads: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            size: DEFAULT_POINT_SIZE,
            x_cells: DEFAULT_CELLS,
            y_cells: DEFAULT_CELLS,
            z_cells: DEFAULT_CELLS,
            density: DEFAULT_DENSITY,
            threads: 1,
        }
    }
}

impl GameOptions {
    pub fn builder() -> GameOptionsBuilder {
        GameOptionsBuilder::default()
    }

    /// `(x_cells, y_cells, z_cells)`
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.x_cells, self.y_cells, self.z_cells)
    }

    /// Check lattice dimensions, density and thread count.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - any cell count is zero
    /// - the lattice is too large to allocate
    /// - `density` is NaN or outside `[0, 1]`
    /// - `threads` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, cells) in [
            (Axis::X, self.x_cells),
            (Axis::Y, self.y_cells),
            (Axis::Z, self.z_cells),
        ] {
            if cells == 0 {
                return Err(ConfigError::ZeroDimension { axis });
            }
        }

        let (x, y, z) = self.dimensions();
        if cell_count(x, y, z).is_none() {
            return Err(ConfigError::TooLarge { x, y, z });
        }

        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity(self.density));
        }

        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }

        Ok(())
    }
}

/// Builder for [`GameOptions`]. Every field is optional.
#[derive(Clone, Debug, Default)]
pub struct GameOptionsBuilder {
    width: Option<u32>,
    height: Option<u32>,
    size: Option<f32>,
    x_cells: Option<usize>,
    y_cells: Option<usize>,
    z_cells: Option<usize>,
    density: Option<f64>,
    threads: Option<usize>,
}

impl GameOptionsBuilder {
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn x_cells(mut self, cells: usize) -> Self {
        self.x_cells = Some(cells);
        self
    }

    pub fn y_cells(mut self, cells: usize) -> Self {
        self.y_cells = Some(cells);
        self
    }

    pub fn z_cells(mut self, cells: usize) -> Self {
        self.z_cells = Some(cells);
        self
    }

    /// Set all three cell counts at once.
    pub fn cells(self, x: usize, y: usize, z: usize) -> Self {
        self.x_cells(x).y_cells(y).z_cells(z)
    }

    pub fn density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Fill unset options with defaults, then validate.
    pub fn build(self) -> Result<GameOptions, ConfigError> {
        let defaults = GameOptions::default();
        let options = GameOptions {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            size: self.size.unwrap_or(defaults.size),
            x_cells: self.x_cells.unwrap_or(defaults.x_cells),
            y_cells: self.y_cells.unwrap_or(defaults.y_cells),
            z_cells: self.z_cells.unwrap_or(defaults.z_cells),
            density: self.density.unwrap_or(defaults.density),
            threads: self.threads.unwrap_or(defaults.threads),
        };
        options.validate()?;
        Ok(options)
    }
}
