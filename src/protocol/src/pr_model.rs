// pr_model: constraint schedule handed to the solver and renderer

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PrParticle {
	// rest pose
	pub pos: [f32; 3],
	pub adjacency: Vec<usize>,
	// opposite corners of each incident triangle, for normals
	pub faces: Vec<[usize; 2]>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PrConstraint {
	pub particles: [usize; 2],
	pub rest_length_squared: f32,
	pub color: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PrModel {
	pub particles: Vec<PrParticle>,
	// sorted by color
	pub constraints: Vec<PrConstraint>,
	// number of sequential waves per relaxation sweep
	pub max_color: u32,
}

impl PrModel {
	pub fn wave(&self, color: u32) -> impl Iterator<Item = &PrConstraint> {
		self.constraints.iter().filter(move |c| c.color == color)
	}
}
