use thiserror::Error;

/// Failures while turning a mesh into a colored constraint schedule.
///
/// Every variant is fatal: construction stops and no partial schedule is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
	#[error("{name} buffer length {len} is not a multiple of 3")]
	BufferLength { name: &'static str, len: usize },

	#[error("empty mesh: {vertices} vertices, {triangles} triangles")]
	EmptyMesh { vertices: usize, triangles: usize },

	#[error("triangle {triangle} references vertex {index}, mesh has {len}")]
	IndexOutOfRange {
		triangle: usize,
		index: usize,
		len: usize,
	},

	#[error("triangle {triangle} repeats vertex {vertex}")]
	DegenerateTriangle { triangle: usize, vertex: usize },

	/// The color search ran past the greedy bound. Bad adjacency
	/// bookkeeping, not bad input.
	#[error("no free color for constraint ({a}, {b}) within bound {bound}")]
	ColorBoundExceeded { a: usize, b: usize, bound: u32 },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
