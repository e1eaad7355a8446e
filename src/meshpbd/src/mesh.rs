use crate::error::{Result, ScheduleError};
use crate::V3;

/// Triangulated input surface, read-only once built.
///
/// No range or degeneracy checks happen here; those are reported by
/// [`extract_particles`](crate::extract_particles) and
/// [`derive_constraints`](crate::derive_constraints) with the offending
/// triangle attached.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
	pub vertices: Vec<V3>,
	pub triangles: Vec<[usize; 3]>,
}

impl Mesh {
	pub fn new(vertices: Vec<V3>, triangles: Vec<[usize; 3]>) -> Self {
		Self {
			vertices,
			triangles,
		}
	}

	/// Build from flat GPU-style buffers: xyz triples and index triples.
	pub fn from_buffers(positions: &[f32], index: &[u32]) -> Result<Self> {
		if positions.len() % 3 != 0 {
			return Err(ScheduleError::BufferLength {
				name: "position",
				len: positions.len(),
			});
		}
		if index.len() % 3 != 0 {
			return Err(ScheduleError::BufferLength {
				name: "index",
				len: index.len(),
			});
		}
		let vertices = positions
			.chunks_exact(3)
			.map(|p| V3::new(p[0], p[1], p[2]))
			.collect();
		let triangles = index
			.chunks_exact(3)
			.map(|t| [t[0] as usize, t[1] as usize, t[2] as usize])
			.collect();
		Ok(Self::new(vertices, triangles))
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	pub fn triangle_count(&self) -> usize {
		self.triangles.len()
	}
}
