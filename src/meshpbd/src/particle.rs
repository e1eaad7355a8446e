use crate::color_slots::ColorSlots;
use crate::V3;

#[derive(Clone, Debug)]
pub struct Particle {
	id: usize,
	original: V3,
	adjacency: Vec<usize>,
	faces: Vec<[usize; 2]>,
	pub(crate) color_slots: ColorSlots,
}

impl Particle {
	pub fn new(id: usize, original: V3) -> Self {
		Self {
			id,
			original,
			adjacency: Vec::new(),
			faces: Vec::new(),
			color_slots: ColorSlots::default(),
		}
	}

	pub fn get_id(&self) -> usize {
		self.id
	}

	pub fn get_original(&self) -> V3 {
		self.original
	}

	/// Neighbors in registration order.
	pub fn adjacency(&self) -> &[usize] {
		&self.adjacency
	}

	pub fn degree(&self) -> usize {
		self.adjacency.len()
	}

	/// Opposite corners of every incident triangle, in triangle order.
	pub fn faces(&self) -> &[[usize; 2]] {
		&self.faces
	}

	pub fn color_slots(&self) -> &ColorSlots {
		&self.color_slots
	}

	pub(crate) fn push_face(&mut self, corners: [usize; 2]) {
		self.faces.push(corners);
	}
}

/// Particle table indexed by id.
#[derive(Clone, Debug, Default)]
pub struct Particles {
	particles: Vec<Particle>,
}

impl Particles {
	pub(crate) fn from_positions(positions: &[V3]) -> Self {
		let particles = positions
			.iter()
			.enumerate()
			.map(|(id, pos)| Particle::new(id, *pos))
			.collect();
		Self { particles }
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
		self.particles.iter()
	}

	pub fn max_degree(&self) -> usize {
		self.particles.iter().map(Particle::degree).max().unwrap_or(0)
	}

	/// Link `a` and `b` in both adjacency lists. Returns false if the edge
	/// was already registered.
	///
	/// Both sides are always updated together, so looking at one side is
	/// enough to know whether the edge exists.
	pub(crate) fn register_edge(&mut self, a: usize, b: usize) -> bool {
		if self.particles[b].adjacency.contains(&a) {
			return false;
		}
		self.particles[a].adjacency.push(b);
		self.particles[b].adjacency.push(a);
		true
	}

	pub(crate) fn get_mut(&mut self, id: usize) -> &mut Particle {
		&mut self.particles[id]
	}
}

impl std::ops::Index<usize> for Particles {
	type Output = Particle;
	fn index(&self, idx: usize) -> &Self::Output {
		&self.particles[idx]
	}
}
