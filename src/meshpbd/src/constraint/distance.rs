use crate::particle::Particle;

/// Rest-length relation along one mesh edge.
///
/// Endpoints keep the orientation in which the edge was discovered. The
/// rest length is taken from the particles' original positions and never
/// changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint {
	a: usize,
	b: usize,
	rest_length_squared: f32,
	color: Option<u32>,
}

impl DistanceConstraint {
	pub fn new(p1: &Particle, p2: &Particle) -> Self {
		let l2 = (p1.get_original() - p2.get_original()).norm_squared();
		Self::new_with_l2(p1.get_id(), p2.get_id(), l2)
	}

	pub fn new_with_l2(a: usize, b: usize, rest_length_squared: f32) -> Self {
		Self {
			a,
			b,
			rest_length_squared,
			color: None,
		}
	}

	pub fn a(&self) -> usize {
		self.a
	}

	pub fn b(&self) -> usize {
		self.b
	}

	pub fn ids(&self) -> [usize; 2] {
		[self.a, self.b]
	}

	pub fn rest_length_squared(&self) -> f32 {
		self.rest_length_squared
	}

	pub fn color(&self) -> Option<u32> {
		self.color
	}

	pub fn touches(&self, id: usize) -> bool {
		self.a == id || self.b == id
	}

	pub(crate) fn set_color(&mut self, color: u32) {
		debug_assert!(self.color.is_none(), "constraint colored twice");
		self.color = Some(color);
	}
}
