pub mod derive;
pub mod distance;

pub use distance::DistanceConstraint;
