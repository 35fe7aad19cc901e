//! Generation parameters and caller-side validation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BoundsPolicy, GridDimensions};

/// Default number of placement attempts spent per room before giving up on it.
pub const DEFAULT_RETRY_BUDGET: u32 = 100;

/// Inclusive range of side lengths a room may be drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeRange {
    min: u32,
    max: u32,
}

impl SizeRange {
    /// Creates a new size range covering `min..=max`.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Smallest side length that may be drawn.
    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Largest side length that may be drawn.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Draws a side length uniformly from the range.
    ///
    /// An inverted range collapses to `min` rather than panicking, and a
    /// zero side is promoted to one.
    pub fn sample(&self, rng: &mut impl Rng) -> i32 {
        let side = if self.max <= self.min {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        };
        i32::try_from(side.max(1)).unwrap_or(i32::MAX)
    }
}

/// Complete description of a single generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationParams {
    /// Number of grid columns.
    pub columns: u32,
    /// Number of grid rows.
    pub rows: u32,
    /// Number of rooms requested; fewer may be placed.
    pub room_count: u32,
    /// Smallest room side length.
    pub min_size: u32,
    /// Largest room side length.
    pub max_size: u32,
    /// Free-placement attempts per room before the anchored fallback runs.
    pub retry_budget: u32,
    /// Free-placement attempts spent on the very first room.
    pub bootstrap_budget: u32,
    /// Far-edge bounds check applied to every room.
    pub bounds: BoundsPolicy,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            columns: 40,
            rows: 30,
            room_count: 8,
            min_size: 4,
            max_size: 10,
            retry_budget: DEFAULT_RETRY_BUDGET,
            bootstrap_budget: DEFAULT_RETRY_BUDGET,
            bounds: BoundsPolicy::Inclusive,
        }
    }
}

impl GenerationParams {
    /// Creates parameters for the given grid and room shape, using default budgets.
    #[must_use]
    pub fn new(columns: u32, rows: u32, room_count: u32, min_size: u32, max_size: u32) -> Self {
        Self {
            columns,
            rows,
            room_count,
            min_size,
            max_size,
            ..Self::default()
        }
    }

    /// Grid dimensions described by the parameters.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        GridDimensions::new(self.columns, self.rows)
    }

    /// Room side-length range described by the parameters.
    #[must_use]
    pub const fn sizes(&self) -> SizeRange {
        SizeRange::new(self.min_size, self.max_size)
    }

    /// Rejects parameter sets the generator is not designed to handle.
    ///
    /// The generator itself degrades silently on unsatisfiable input; callers
    /// that accept user input are expected to run this check first.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ParamError::EmptyGrid {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.min_size == 0 {
            return Err(ParamError::ZeroMinimumSize);
        }
        if self.max_size < self.min_size {
            return Err(ParamError::InvertedSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(())
    }
}

/// Reasons a parameter set is rejected by [`GenerationParams::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParamError {
    /// One of the grid dimensions is zero.
    #[error("grid must have at least one column and one row (got {columns}x{rows})")]
    EmptyGrid {
        /// Requested column count.
        columns: u32,
        /// Requested row count.
        rows: u32,
    },
    /// The minimum room size is zero.
    #[error("minimum room size must be at least 1")]
    ZeroMinimumSize,
    /// The maximum room size is smaller than the minimum.
    #[error("max room size ({max}) must be greater than or equal to min room size ({min})")]
    InvertedSizeRange {
        /// Requested minimum side length.
        min: u32,
        /// Requested maximum side length.
        max: u32,
    },
}
