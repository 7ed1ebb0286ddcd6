pub mod coverage;
pub mod distance;

pub use coverage::CoverageMatrix;
pub use distance::GeometryHelper;
