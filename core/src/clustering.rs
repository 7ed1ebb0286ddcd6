//! Geographic grouping of candidate cameras for the distribution
//! constraint.
//!
//! The partition is a bounding-box grid: the candidate area is split
//! into roughly sqrt(C) rows by ceil(C / rows) columns and each camera
//! takes the cluster of its cell, clamped into `0..C` so every camera
//! is assigned exactly once. Deterministic, no RNG.

use crate::instance::CameraSite;

/// Total partition of camera indices into geographic clusters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterAssignment {
    labels: Vec<usize>,
    cluster_count: usize,
}

impl ClusterAssignment {
    pub fn compute(cameras: &[CameraSite], cluster_count: usize) -> Self {
        let cluster_count = cluster_count.max(1);
        if cluster_count == 1 || cameras.len() <= 1 {
            return Self {
                labels: vec![0; cameras.len()],
                cluster_count,
            };
        }

        let rows = ((cluster_count as f64).sqrt().floor() as usize).max(1);
        let cols = (cluster_count + rows - 1) / rows;

        let x_min = cameras.iter().map(|c| c.x).fold(f64::INFINITY, f64::min);
        let x_max = cameras.iter().map(|c| c.x).fold(f64::NEG_INFINITY, f64::max);
        let y_min = cameras.iter().map(|c| c.y).fold(f64::INFINITY, f64::min);
        let y_max = cameras.iter().map(|c| c.y).fold(f64::NEG_INFINITY, f64::max);

        let x_step = if x_max > x_min {
            (x_max - x_min) / cols as f64
        } else {
            1.0
        };
        let y_step = if y_max > y_min {
            (y_max - y_min) / rows as f64
        } else {
            1.0
        };

        let labels = cameras
            .iter()
            .map(|camera| {
                let col = (((camera.x - x_min) / x_step) as usize).min(cols - 1);
                let row = (((camera.y - y_min) / y_step) as usize).min(rows - 1);
                (row * cols + col).min(cluster_count - 1)
            })
            .collect();

        Self {
            labels,
            cluster_count,
        }
    }

    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    pub fn label(&self, camera: usize) -> usize {
        self.labels[camera]
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Camera indices belonging to the given cluster.
    pub fn members(&self, cluster: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, &label)| label == cluster)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{CameraType, ViewAngle};

    fn camera(x: f64, y: f64) -> CameraSite {
        CameraSite::new(x, y, 1000.0, 40.0, ViewAngle::Deg360, CameraType::Fixed)
    }

    fn corner_grid() -> Vec<CameraSite> {
        vec![
            camera(0.0, 0.0),
            camera(100.0, 0.0),
            camera(0.0, 100.0),
            camera(100.0, 100.0),
            camera(52.0, 48.0),
        ]
    }

    #[test]
    fn every_camera_gets_exactly_one_cluster() {
        let cameras = corner_grid();
        let clusters = ClusterAssignment::compute(&cameras, 4);
        assert_eq!(clusters.labels().len(), cameras.len());
        assert!(clusters.labels().iter().all(|&label| label < 4));

        let assigned: usize = (0..4).map(|c| clusters.members(c).len()).sum();
        assert_eq!(assigned, cameras.len());
    }

    #[test]
    fn opposite_corners_land_in_different_clusters() {
        let clusters = ClusterAssignment::compute(&corner_grid(), 4);
        assert_ne!(clusters.label(0), clusters.label(3));
    }

    #[test]
    fn single_cluster_degenerates_to_one_group() {
        let clusters = ClusterAssignment::compute(&corner_grid(), 1);
        assert!(clusters.labels().iter().all(|&label| label == 0));
        assert_eq!(clusters.cluster_count(), 1);
    }

    #[test]
    fn zero_requested_clusters_is_treated_as_one() {
        let clusters = ClusterAssignment::compute(&corner_grid(), 0);
        assert_eq!(clusters.cluster_count(), 1);
    }

    #[test]
    fn partition_is_deterministic() {
        let cameras = corner_grid();
        let a = ClusterAssignment::compute(&cameras, 3);
        let b = ClusterAssignment::compute(&cameras, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn co_located_cameras_share_a_cluster() {
        let cameras = vec![camera(5.0, 5.0), camera(5.0, 5.0), camera(5.0, 5.0)];
        let clusters = ClusterAssignment::compute(&cameras, 4);
        assert_eq!(clusters.label(0), clusters.label(1));
        assert_eq!(clusters.label(1), clusters.label(2));
    }
}
