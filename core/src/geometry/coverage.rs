use crate::geometry::distance::GeometryHelper;
use crate::instance::{CameraSite, Zone};
use ndarray::Array2;

/// Boolean reachability table, shape cameras x zones. Entry (i, j) is
/// true iff zone j lies within camera i's range, boundary inclusive.
/// A pure function of the input data; recompute after any change to
/// positions or ranges instead of mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageMatrix {
    cells: Array2<bool>,
}

impl CoverageMatrix {
    pub fn compute(cameras: &[CameraSite], zones: &[Zone]) -> Self {
        let distances = GeometryHelper::pairwise(cameras, zones);
        let mut cells = Array2::from_elem((cameras.len(), zones.len()), false);
        for (i, camera) in cameras.iter().enumerate() {
            for j in 0..zones.len() {
                cells[[i, j]] = distances[[i, j]] <= camera.range;
            }
        }
        Self { cells }
    }

    pub fn camera_count(&self) -> usize {
        self.cells.nrows()
    }

    pub fn zone_count(&self) -> usize {
        self.cells.ncols()
    }

    pub fn covers(&self, camera: usize, zone: usize) -> bool {
        self.cells[[camera, zone]]
    }

    /// Number of candidate cameras that can reach the zone at all.
    pub fn cameras_reaching(&self, zone: usize) -> usize {
        self.cells.column(zone).iter().filter(|&&c| c).count()
    }

    /// Number of zones the candidate camera can reach.
    pub fn zones_reachable(&self, camera: usize) -> usize {
        self.cells.row(camera).iter().filter(|&&c| c).count()
    }

    pub fn zone_is_coverable(&self, zone: usize) -> bool {
        self.cameras_reaching(zone) > 0
    }

    /// Number of installed cameras covering the zone under the given
    /// installation assignment.
    pub fn installed_redundancy(&self, zone: usize, installed: &[bool]) -> usize {
        self.cells
            .column(zone)
            .iter()
            .zip(installed.iter())
            .filter(|(&covers, &on)| covers && on)
            .count()
    }
}
