use tracing::{debug, info};

use crate::constraint::DistanceConstraint;
use crate::error::{Result, ScheduleError};
use crate::particle::Particles;

fn check_triangle(triangle: usize, tri: &[usize; 3], len: usize) -> Result<()> {
	let [a, b, c] = *tri;
	if let Some(&index) = tri.iter().find(|&&v| v >= len) {
		return Err(ScheduleError::IndexOutOfRange {
			triangle,
			index,
			len,
		});
	}
	let vertex = if a == b || a == c {
		a
	} else if b == c {
		b
	} else {
		return Ok(());
	};
	Err(ScheduleError::DegenerateTriangle { triangle, vertex })
}

/// One constraint per distinct mesh edge, in discovery order: triangles in
/// index order, then edges `(a, b)`, `(a, c)`, `(b, c)` within each.
///
/// Registers every new edge in both endpoints' adjacency. All triangles are
/// checked before anything is registered, so on error `particles` is left
/// untouched.
pub fn derive_constraints(
	particles: &mut Particles,
	triangles: &[[usize; 3]],
) -> Result<Vec<DistanceConstraint>> {
	let _span = tracing::debug_span!("derive").entered();
	for (triangle, tri) in triangles.iter().enumerate() {
		check_triangle(triangle, tri, particles.len())?;
	}

	let mut constraints = Vec::new();
	let mut shared = 0usize;
	for &[a, b, c] in triangles.iter() {
		for (x, y) in [(a, b), (a, c), (b, c)] {
			if !particles.register_edge(x, y) {
				shared += 1;
				continue;
			}
			constraints.push(DistanceConstraint::new(&particles[x], &particles[y]));
		}
	}
	debug!(shared, "edges seen more than once");
	info!(
		constraints = constraints.len(),
		max_degree = particles.max_degree(),
		"constraints derived"
	);
	Ok(constraints)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::extract::extract_particles;
	use crate::mesh::Mesh;
	use crate::V3;

	fn triangle() -> Mesh {
		Mesh::new(
			vec![
				V3::new(0., 0., 0.),
				V3::new(3., 0., 0.),
				V3::new(0., 4., 0.),
			],
			vec![[0, 1, 2]],
		)
	}

	#[test]
	fn test_single_triangle() {
		let mesh = triangle();
		let mut ps = extract_particles(&mesh).unwrap();
		let cs = derive_constraints(&mut ps, &mesh.triangles).unwrap();
		let ids: Vec<_> = cs.iter().map(|c| c.ids()).collect();
		assert_eq!(ids, vec![[0, 1], [0, 2], [1, 2]]);
		let l2: Vec<_> = cs.iter().map(|c| c.rest_length_squared()).collect();
		assert_eq!(l2, vec![9., 16., 25.]);
		assert_eq!(ps[0].adjacency(), &[1, 2]);
		assert_eq!(ps[1].adjacency(), &[0, 2]);
		assert_eq!(ps[2].adjacency(), &[0, 1]);
	}

	#[test]
	fn test_shared_edge_once() {
		// three triangles on edge (0, 1), non-manifold
		let mesh = Mesh::new(
			vec![V3::zeros(), V3::x(), V3::y(), V3::z(), -V3::y()],
			vec![[0, 1, 2], [1, 0, 3], [0, 1, 4]],
		);
		let mut ps = extract_particles(&mesh).unwrap();
		let cs = derive_constraints(&mut ps, &mesh.triangles).unwrap();
		assert_eq!(cs.len(), 7);
		let on_01 = cs
			.iter()
			.filter(|c| c.touches(0) && c.touches(1))
			.count();
		assert_eq!(on_01, 1);
		assert_eq!(ps[0].degree(), 4);
	}

	#[test]
	fn test_degenerate() {
		let mut mesh = triangle();
		mesh.triangles.push([2, 1, 2]);
		let mut ps = extract_particles(&mesh).unwrap();
		assert_eq!(
			derive_constraints(&mut ps, &mesh.triangles).unwrap_err(),
			ScheduleError::DegenerateTriangle {
				triangle: 1,
				vertex: 2
			}
		);
		assert!(ps.iter().all(|p| p.adjacency().is_empty()));
	}

	#[test]
	fn test_out_of_range() {
		let mesh = triangle();
		let mut ps = extract_particles(&mesh).unwrap();
		assert_eq!(
			derive_constraints(&mut ps, &[[0, 1, 9]]).unwrap_err(),
			ScheduleError::IndexOutOfRange {
				triangle: 0,
				index: 9,
				len: 3
			}
		);
	}
}
