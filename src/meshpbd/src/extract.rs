use tracing::{debug, info};

use crate::error::{Result, ScheduleError};
use crate::mesh::Mesh;
use crate::particle::Particles;

/// One particle per vertex, with the opposite-corner pair of every incident
/// triangle recorded in `faces`. Adjacency and color slots start empty.
pub fn extract_particles(mesh: &Mesh) -> Result<Particles> {
	let _span = tracing::debug_span!("extract").entered();
	let len = mesh.vertex_count();
	if len == 0 || mesh.triangle_count() == 0 {
		return Err(ScheduleError::EmptyMesh {
			vertices: len,
			triangles: mesh.triangle_count(),
		});
	}
	for (triangle, tri) in mesh.triangles.iter().enumerate() {
		if let Some(&index) = tri.iter().find(|&&v| v >= len) {
			return Err(ScheduleError::IndexOutOfRange {
				triangle,
				index,
				len,
			});
		}
	}

	let mut particles = Particles::from_positions(&mesh.vertices);
	for &[a, b, c] in mesh.triangles.iter() {
		particles.get_mut(a).push_face([b, c]);
		particles.get_mut(b).push_face([c, a]);
		particles.get_mut(c).push_face([a, b]);
	}
	debug!(triangles = mesh.triangle_count(), "faces recorded");
	info!(particles = particles.len(), "particles extracted");
	Ok(particles)
}
