use glam::DVec2;

use crate::error::QuadError;
use crate::error::QuadResult;
use crate::quadrant::Quadrant;

/// The axis-aligned rectangle `[min.x, max.x] x [min.y, max.y]` a cell
/// covers, with its center cached. Both bounds are inclusive for containment
/// purposes. An extent is immutable once constructed.
#[derive(Clone, PartialEq)]
pub struct Extent {
    min: DVec2,
    max: DVec2,
    center: DVec2,
}

impl Extent {
    /// Fails with [`QuadError::InvalidExtent`] if any bound is non-finite or
    /// `min >= max` on either axis.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> QuadResult<Self> {
        Self::from_min_max(DVec2::new(min_x, min_y), DVec2::new(max_x, max_y))
    }

    pub fn from_min_max(min: DVec2, max: DVec2) -> QuadResult<Self> {
        if !(min.is_finite() && max.is_finite()) || min.x >= max.x || min.y >= max.y {
            return Err(QuadError::InvalidExtent {
                min_x: min.x,
                min_y: min.y,
                max_x: max.x,
                max_y: max.y,
            });
        }
        Ok(Self::from_min_max_unchecked(min, max))
    }

    // Quadrant extents of a valid parent are valid by construction.
    pub(crate) fn from_min_max_unchecked(min: DVec2, max: DVec2) -> Self {
        Self {
            min,
            max,
            center: (min + max) * 0.5,
        }
    }

    /// The all-encompassing extent of a set of positions, or `None` if the
    /// set is empty or degenerate (zero width or height).
    pub fn from_positions<'a>(positions: impl Iterator<Item = &'a DVec2>) -> Option<Self> {
        let mut min: Option<DVec2> = None;
        let mut max: Option<DVec2> = None;
        for pos in positions {
            min = Some(min.map_or(*pos, |min| min.min(*pos)));
            max = Some(max.map_or(*pos, |max| max.max(*pos)));
        }
        Self::from_min_max(min?, max?).ok()
    }

    /// Return an extent with slightly increased size
    /// but the same center
    pub fn pad(self) -> Self {
        const PADDING_FRACTION: f64 = 0.01;
        let dist_to_min = self.min - self.center;
        let dist_to_max = self.max - self.center;
        Self {
            min: self.center + dist_to_min * (1.0 + PADDING_FRACTION),
            max: self.center + dist_to_max * (1.0 + PADDING_FRACTION),
            center: self.center,
        }
    }

    pub fn min(&self) -> DVec2 {
        self.min
    }

    pub fn max(&self) -> DVec2 {
        self.max
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn side_lengths(&self) -> DVec2 {
        self.max - self.min
    }

    /// The x side length. This is the length the refinement bookkeeping
    /// tracks; for square cells it equals the y side length.
    pub fn side_length(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn max_side_length(&self) -> f64 {
        let side_lengths = self.side_lengths();
        side_lengths.x.max(side_lengths.y)
    }

    pub fn contains(&self, pos: DVec2) -> bool {
        self.min.x <= pos.x && pos.x <= self.max.x && self.min.y <= pos.y && pos.y <= self.max.y
    }

    /// The quadrant of this extent containing `pos`, or `None` if `pos` lies
    /// strictly outside.
    ///
    /// A point exactly on a midpoint classifies into the higher-index
    /// quadrant for that axis; a point on the max boundary counts as inside.
    /// Point location and child assignment both assume exactly this rule.
    pub fn quadrant_of(&self, pos: DVec2) -> Option<Quadrant> {
        if !self.contains(pos) {
            return None;
        }
        let col = usize::from(pos.x >= self.center.x);
        let row = usize::from(pos.y >= self.center.y);
        Some(Quadrant::from_row_col(row, col))
    }

    /// The four sub-extents in quadrant order, tiling `self` exactly.
    pub fn quadrants(&self) -> [Self; 4] {
        let lower_left = Self::from_min_max_unchecked(self.min, self.center);
        let lower_right = Self::from_min_max_unchecked(
            DVec2::new(self.center.x, self.min.y),
            DVec2::new(self.max.x, self.center.y),
        );
        let upper_left = Self::from_min_max_unchecked(
            DVec2::new(self.min.x, self.center.y),
            DVec2::new(self.center.x, self.max.y),
        );
        let upper_right = Self::from_min_max_unchecked(self.center, self.max);
        [lower_left, lower_right, upper_left, upper_right]
    }

    pub fn overlaps(&self, other: &Extent) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Squared distance from `pos` to the closest point of the extent; zero
    /// for contained points.
    pub fn distance_squared_to(&self, pos: DVec2) -> f64 {
        let dx = if pos.x < self.min.x {
            self.min.x - pos.x
        } else if pos.x > self.max.x {
            pos.x - self.max.x
        } else {
            0.0
        };
        let dy = if pos.y < self.min.y {
            self.min.y - pos.y
        } else if pos.y > self.max.y {
            pos.y - self.max.y
        } else {
            0.0
        };
        dx * dx + dy * dy
    }
}

impl std::fmt::Debug for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Extent({:.3?} {:.3?})", self.min, self.max)
    }
}
