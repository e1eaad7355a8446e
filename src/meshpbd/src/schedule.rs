use protocol::pr_model::{PrConstraint, PrModel, PrParticle};

use crate::coloring::color;
use crate::constraint::derive::derive_constraints;
use crate::constraint::DistanceConstraint;
use crate::error::Result;
use crate::extract::extract_particles;
use crate::mesh::Mesh;
use crate::particle::Particles;

/// Colored constraints, grouped into waves.
///
/// Constraints inside one wave share no particle and may be solved in
/// parallel. Waves must run in increasing color order within a sweep.
#[derive(Clone, Debug)]
pub struct ColoredSchedule {
	particles: Particles,
	// sorted by color, discovery order kept within a color
	constraints: Vec<DistanceConstraint>,
	// wave k spans offsets[k - 1]..offsets[k]
	offsets: Vec<usize>,
}

impl ColoredSchedule {
	pub(crate) fn new(
		particles: Particles,
		mut constraints: Vec<DistanceConstraint>,
	) -> Self {
		constraints.sort_by_key(|c| c.color());
		let max_color = constraints
			.iter()
			.filter_map(|c| c.color())
			.max()
			.unwrap_or(0) as usize;
		let mut counts = vec![0usize; max_color + 1];
		for c in constraints.iter() {
			if let Some(k) = c.color() {
				counts[k as usize] += 1;
			}
		}
		let mut offsets = Vec::with_capacity(max_color + 1);
		let mut acc = 0;
		for count in counts {
			acc += count;
			offsets.push(acc);
		}
		Self {
			particles,
			constraints,
			offsets,
		}
	}

	/// Extract, derive and color in one go.
	pub fn build(mesh: &Mesh) -> Result<Self> {
		let mut particles = extract_particles(mesh)?;
		let constraints = derive_constraints(&mut particles, &mesh.triangles)?;
		color(constraints, particles)
	}

	pub fn particles(&self) -> &Particles {
		&self.particles
	}

	pub fn constraints(&self) -> &[DistanceConstraint] {
		&self.constraints
	}

	/// Number of waves in one relaxation sweep.
	pub fn max_color(&self) -> u32 {
		(self.offsets.len() - 1) as u32
	}

	pub fn max_degree(&self) -> usize {
		self.particles.max_degree()
	}

	pub fn wave(&self, color: u32) -> &[DistanceConstraint] {
		let k = color as usize;
		if k == 0 || k >= self.offsets.len() {
			return &[];
		}
		&self.constraints[self.offsets[k - 1]..self.offsets[k]]
	}

	/// Waves in sweep order, starting at color 1.
	pub fn waves(&self) -> impl Iterator<Item = &[DistanceConstraint]> + '_ {
		self.offsets
			.windows(2)
			.map(move |w| &self.constraints[w[0]..w[1]])
	}

	pub fn pr_model(&self) -> PrModel {
		let particles = self
			.particles
			.iter()
			.map(|p| PrParticle {
				pos: p.get_original().into(),
				adjacency: p.adjacency().to_vec(),
				faces: p.faces().to_vec(),
			})
			.collect();
		let constraints = self
			.waves()
			.zip(1u32..)
			.flat_map(|(wave, color)| {
				wave.iter().map(move |c| PrConstraint {
					particles: c.ids(),
					rest_length_squared: c.rest_length_squared(),
					color,
				})
			})
			.collect();
		PrModel {
			particles,
			constraints,
			max_color: self.max_color(),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::V3;

	fn colors(schedule: &ColoredSchedule) -> Vec<([usize; 2], u32)> {
		let mut result: Vec<_> = schedule
			.constraints()
			.iter()
			.map(|c| (c.ids(), c.color().unwrap()))
			.collect();
		result.sort();
		result
	}

	fn tetrahedron() -> Mesh {
		Mesh::new(
			vec![
				V3::new(1., 1., 1.),
				V3::new(1., -1., -1.),
				V3::new(-1., 1., -1.),
				V3::new(-1., -1., 1.),
			],
			vec![[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]],
		)
	}

	#[test]
	fn test_single_triangle() {
		let mesh = Mesh::new(vec![V3::zeros(), V3::x(), V3::y()], vec![[0, 1, 2]]);
		let schedule = ColoredSchedule::build(&mesh).unwrap();
		assert_eq!(
			colors(&schedule),
			vec![([0, 1], 1), ([0, 2], 2), ([1, 2], 3)]
		);
		assert_eq!(schedule.max_color(), 3);
		assert!(schedule.max_color() as usize <= schedule.max_degree() + 1);
	}

	#[test]
	fn test_tetrahedron() {
		let schedule = ColoredSchedule::build(&tetrahedron()).unwrap();
		assert_eq!(schedule.constraints().len(), 6);
		assert!(schedule.particles().iter().all(|p| p.degree() == 3));
		for p in schedule.particles().iter() {
			let mut seen: Vec<_> = schedule
				.constraints()
				.iter()
				.filter(|c| c.touches(p.get_id()))
				.map(|c| c.color().unwrap())
				.collect();
			seen.sort();
			seen.dedup();
			assert_eq!(seen.len(), 3);
		}
		assert!(schedule.max_color() >= 3);
		assert!(schedule.max_color() <= 4);
		assert_eq!(
			colors(&schedule),
			vec![
				([0, 1], 1),
				([0, 2], 2),
				([0, 3], 3),
				([1, 2], 3),
				([2, 3], 1),
				([3, 1], 2),
			]
		);
	}

	#[test]
	fn test_waves() {
		let schedule = ColoredSchedule::build(&tetrahedron()).unwrap();
		let waves: Vec<_> = schedule.waves().collect();
		assert_eq!(waves.len(), 3);
		for (i, wave) in waves.iter().enumerate() {
			assert_eq!(*wave, schedule.wave(i as u32 + 1));
			assert_eq!(wave.len(), 2);
			assert!(wave.iter().all(|c| c.color() == Some(i as u32 + 1)));
		}
		assert!(schedule.wave(0).is_empty());
		assert!(schedule.wave(4).is_empty());
	}

	#[test]
	fn test_discovery_order_within_wave() {
		let schedule = ColoredSchedule::build(&tetrahedron()).unwrap();
		// (0, 1) discovered before (2, 3)
		let ids: Vec<_> = schedule.wave(1).iter().map(|c| c.ids()).collect();
		assert_eq!(ids, vec![[0, 1], [2, 3]]);
	}

	#[test]
	fn test_pr_model() {
		let schedule = ColoredSchedule::build(&tetrahedron()).unwrap();
		let model = schedule.pr_model();
		assert_eq!(model.max_color, 3);
		assert_eq!(model.particles.len(), 4);
		assert_eq!(model.particles[0].pos, [1., 1., 1.]);
		assert_eq!(model.particles[0].adjacency, vec![1, 2, 3]);
		assert_eq!(model.particles[0].faces, vec![[1, 2], [2, 3], [3, 1]]);
		assert_eq!(model.constraints.len(), 6);
		for (pc, c) in model.constraints.iter().zip(schedule.constraints()) {
			assert_eq!(pc.particles, c.ids());
			assert_eq!(Some(pc.color), c.color());
			assert_eq!(pc.rest_length_squared, 8.);
		}
		assert_eq!(model.wave(2).count(), 2);
	}
}
