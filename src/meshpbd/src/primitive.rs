//! Procedural meshes for benches and tests.

use fnv::FnvHashMap;
use tracing::debug;

use crate::mesh::Mesh;
use crate::V3;

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
	[0, 11, 5],
	[0, 5, 1],
	[0, 1, 7],
	[0, 7, 10],
	[0, 10, 11],
	[1, 5, 9],
	[5, 11, 4],
	[11, 10, 2],
	[10, 7, 6],
	[7, 1, 8],
	[3, 9, 4],
	[3, 4, 2],
	[3, 2, 6],
	[3, 6, 8],
	[3, 8, 9],
	[4, 9, 5],
	[2, 4, 11],
	[6, 2, 10],
	[8, 6, 7],
	[9, 8, 1],
];

fn icosahedron_vertices() -> [V3; 12] {
	let t = (1.0 + 5f32.sqrt()) / 2.0;
	[
		V3::new(-1., t, 0.),
		V3::new(1., t, 0.),
		V3::new(-1., -t, 0.),
		V3::new(1., -t, 0.),
		V3::new(0., -1., t),
		V3::new(0., 1., t),
		V3::new(0., -1., -t),
		V3::new(0., 1., -t),
		V3::new(t, 0., -1.),
		V3::new(t, 0., 1.),
		V3::new(-t, 0., -1.),
		V3::new(-t, 0., 1.),
	]
}

// split one face into (detail + 1)^2 triangles, unindexed
fn subdivide_face(a: V3, b: V3, c: V3, detail: usize, out: &mut Vec<V3>) {
	let cols = detail + 1;
	let mut grid: Vec<Vec<V3>> = Vec::with_capacity(cols + 1);
	for i in 0..=cols {
		let s = i as f32 / cols as f32;
		let aj = a.lerp(&c, s);
		let bj = b.lerp(&c, s);
		let rows = cols - i;
		let line = (0..=rows)
			.map(|j| {
				if rows == 0 {
					aj
				} else {
					aj.lerp(&bj, j as f32 / rows as f32)
				}
			})
			.collect();
		grid.push(line);
	}
	for i in 0..cols {
		for j in 0..2 * (cols - i) - 1 {
			let k = j / 2;
			if j % 2 == 0 {
				out.extend([grid[i][k + 1], grid[i + 1][k], grid[i][k]]);
			} else {
				out.extend([grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]);
			}
		}
	}
}

fn cell_of(p: &V3, tolerance: f32) -> [i64; 3] {
	[
		(p[0] / tolerance).floor() as i64,
		(p[1] / tolerance).floor() as i64,
		(p[2] / tolerance).floor() as i64,
	]
}

/// Merge vertices closer than `tolerance` and remap the triangles.
///
/// The first vertex seen wins, and welded vertices keep first-seen order.
/// Triangles that collapse onto a repeated vertex are dropped.
pub fn weld_vertices(
	vertices: &[V3],
	triangles: &[[usize; 3]],
	tolerance: f32,
) -> Mesh {
	let mut cells: FnvHashMap<[i64; 3], Vec<usize>> = FnvHashMap::default();
	let mut welded: Vec<V3> = Vec::new();
	let mut remap = Vec::with_capacity(vertices.len());
	for p in vertices.iter() {
		let [x, y, z] = cell_of(p, tolerance);
		let mut hit = None;
		'search: for dx in -1..=1 {
			for dy in -1..=1 {
				for dz in -1..=1 {
					let Some(ids) = cells.get(&[x + dx, y + dy, z + dz]) else {
						continue;
					};
					if let Some(&id) = ids
						.iter()
						.find(|&&id| (welded[id] - p).norm() <= tolerance)
					{
						hit = Some(id);
						break 'search;
					}
				}
			}
		}
		let id = hit.unwrap_or_else(|| {
			welded.push(*p);
			cells.entry([x, y, z]).or_default().push(welded.len() - 1);
			welded.len() - 1
		});
		remap.push(id);
	}
	let remapped: Vec<[usize; 3]> = triangles
		.iter()
		.map(|t| [remap[t[0]], remap[t[1]], remap[t[2]]])
		.filter(|[a, b, c]| a != b && b != c && a != c)
		.collect();
	debug!(
		before = vertices.len(),
		after = welded.len(),
		dropped = triangles.len() - remapped.len(),
		"vertices welded"
	);
	Mesh::new(welded, remapped)
}

/// Subdivided icosahedron projected onto a sphere.
#[derive(Clone, Debug)]
pub struct IcosphereBuilder {
	pub radius: f32,
	pub detail: usize,
	pub merge_tolerance: f32,
}

impl Default for IcosphereBuilder {
	fn default() -> Self {
		Self {
			radius: 100.0,
			detail: 5,
			merge_tolerance: 1.5,
		}
	}
}

impl IcosphereBuilder {
	pub fn with_radius(mut self, radius: f32) -> Self {
		self.radius = radius;
		self
	}

	pub fn with_detail(mut self, detail: usize) -> Self {
		self.detail = detail;
		self
	}

	pub fn with_merge_tolerance(mut self, tolerance: f32) -> Self {
		self.merge_tolerance = tolerance;
		self
	}

	pub fn build(&self) -> Mesh {
		let base = icosahedron_vertices();
		let mut soup = Vec::new();
		for &[a, b, c] in ICOSAHEDRON_FACES.iter() {
			subdivide_face(base[a], base[b], base[c], self.detail, &mut soup);
		}
		for p in soup.iter_mut() {
			*p = p.normalize() * self.radius;
		}
		let triangles: Vec<[usize; 3]> = (0..soup.len() / 3)
			.map(|i| [3 * i, 3 * i + 1, 3 * i + 2])
			.collect();
		weld_vertices(&soup, &triangles, self.merge_tolerance)
	}
}

/// Flat cloth patch in the XY plane, two triangles per cell.
#[derive(Clone, Debug)]
pub struct GridBuilder {
	pub columns: usize,
	pub rows: usize,
	pub spacing: f32,
}

impl Default for GridBuilder {
	fn default() -> Self {
		Self {
			columns: 32,
			rows: 32,
			spacing: 1.0,
		}
	}
}

impl GridBuilder {
	pub fn with_size(mut self, columns: usize, rows: usize) -> Self {
		self.columns = columns;
		self.rows = rows;
		self
	}

	pub fn with_spacing(mut self, spacing: f32) -> Self {
		self.spacing = spacing;
		self
	}

	pub fn build(&self) -> Mesh {
		let id = |x: usize, y: usize| y * self.columns + x;
		let mut vertices = Vec::with_capacity(self.columns * self.rows);
		for y in 0..self.rows {
			for x in 0..self.columns {
				vertices.push(V3::new(
					self.spacing * x as f32,
					self.spacing * y as f32,
					0.,
				));
			}
		}
		let mut triangles = Vec::new();
		for y in 1..self.rows {
			for x in 1..self.columns {
				let (i00, i10) = (id(x - 1, y - 1), id(x, y - 1));
				let (i01, i11) = (id(x - 1, y), id(x, y));
				triangles.push([i00, i10, i11]);
				triangles.push([i00, i11, i01]);
			}
		}
		Mesh::new(vertices, triangles)
	}
}
