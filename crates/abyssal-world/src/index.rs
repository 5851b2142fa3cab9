//! Spatial cell index: tracks which world cells are in view.
//!
//! The infinite world is partitioned into fixed-size square cells. Each
//! frame the index recomputes the active set (every cell within the
//! view radius of the submarine, Chebyshev metric) and reports which
//! cells just entered or left it. Generation and eviction of cell
//! contents is the populator's job; the index only decides *when*.

use abyssal_common::CellCoord;
use ahash::AHashSet;
use tracing::debug;

/// Cells that changed activation state during one recompute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellDelta {
    /// Cells that entered the active set this frame
    pub activated: Vec<CellCoord>,
    /// Cells that left the active set this frame
    pub evicted: Vec<CellCoord>,
}

impl CellDelta {
    /// True when no cell changed state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activated.is_empty() && self.evicted.is_empty()
    }
}

/// Tracks the set of active cells around the submarine.
#[derive(Debug)]
pub struct SpatialCellIndex {
    /// Cell edge length in world units
    cell_size: f64,
    /// View radius in cell units (Chebyshev)
    view_radius: u32,
    /// Currently active cell keys
    active: AHashSet<CellCoord>,
}

impl SpatialCellIndex {
    /// Creates an index with the given cell size and view radius.
    #[must_use]
    pub fn new(cell_size: f64, view_radius: u32) -> Self {
        Self {
            cell_size,
            view_radius,
            active: AHashSet::new(),
        }
    }

    /// Returns the cell edge length.
    #[must_use]
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Returns the view radius in cells.
    #[must_use]
    pub const fn view_radius(&self) -> u32 {
        self.view_radius
    }

    /// Whether the given cell is currently active.
    #[must_use]
    pub fn is_active(&self, cell: CellCoord) -> bool {
        self.active.contains(&cell)
    }

    /// Number of currently active cells.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Iterates over the currently active cells.
    pub fn active_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.active.iter().copied()
    }

    /// Recomputes the active set for the given submarine position and
    /// returns the activation delta.
    ///
    /// A cell key appears in `activated` the first time it enters the
    /// set and in `evicted` the moment it leaves; a key that was
    /// evicted earlier and comes back into view is reported as
    /// activated again (evicted keys are deleted, not blacklisted).
    pub fn recompute(&mut self, x: f64, z: f64) -> CellDelta {
        let center = CellCoord::from_world(x, z, self.cell_size);

        let wanted: AHashSet<CellCoord> = center.neighborhood(self.view_radius).collect();

        let mut delta = CellDelta::default();
        for &cell in &wanted {
            if !self.active.contains(&cell) {
                delta.activated.push(cell);
            }
        }
        for &cell in &self.active {
            if !wanted.contains(&cell) {
                delta.evicted.push(cell);
            }
        }

        if !delta.is_empty() {
            debug!(
                center = ?(center.x, center.z),
                activated = delta.activated.len(),
                evicted = delta.evicted.len(),
                "active set changed"
            );
        }

        self.active = wanted;
        delta
    }
}
