pub mod color_slots;
pub mod coloring;
pub mod constraint;
pub mod error;
pub mod extract;
pub mod mesh;
pub mod particle;
pub mod primitive;
pub mod schedule;

pub use coloring::color;
pub use constraint::derive::derive_constraints;
pub use error::{Result, ScheduleError};
pub use extract::extract_particles;
pub use mesh::Mesh;
pub use schedule::ColoredSchedule;

pub type V3 = nalgebra::Vector3<f32>;
