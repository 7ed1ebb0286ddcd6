use crate::instance::{CameraSite, Zone};
use ndarray::Array2;

pub struct GeometryHelper;

impl GeometryHelper {
    pub fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
        let dx = a.0 - b.0;
        let dy = a.1 - b.1;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance from every candidate camera to every zone, shape
    /// cameras x zones.
    pub fn pairwise(cameras: &[CameraSite], zones: &[Zone]) -> Array2<f64> {
        let mut distances = Array2::zeros((cameras.len(), zones.len()));
        for (i, camera) in cameras.iter().enumerate() {
            for (j, zone) in zones.iter().enumerate() {
                distances[[i, j]] = Self::euclidean(camera.position(), zone.position());
            }
        }
        distances
    }
}
