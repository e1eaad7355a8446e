use fnv::FnvHashMap;

/// Sparse map from color to the neighbor holding that color at one particle.
#[derive(Clone, Debug, Default)]
pub struct ColorSlots {
	slots: FnvHashMap<u32, usize>,
}

impl ColorSlots {
	pub fn is_occupied(&self, color: u32) -> bool {
		self.slots.contains_key(&color)
	}

	/// Record `neighbor` at `color`. A slot is written once; returns false
	/// and leaves the slot alone if it was already taken.
	pub fn occupy(&mut self, color: u32, neighbor: usize) -> bool {
		use std::collections::hash_map::Entry;
		match self.slots.entry(color) {
			Entry::Occupied(_) => false,
			Entry::Vacant(e) => {
				e.insert(neighbor);
				true
			}
		}
	}

	pub fn neighbor(&self, color: u32) -> Option<usize> {
		self.slots.get(&color).copied()
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_occupy_once() {
		let mut slots = ColorSlots::default();
		assert!(!slots.is_occupied(1));
		assert!(slots.occupy(1, 7));
		assert!(slots.is_occupied(1));
		assert!(!slots.occupy(1, 8));
		assert_eq!(slots.neighbor(1), Some(7));
		assert_eq!(slots.neighbor(2), None);
		assert_eq!(slots.len(), 1);
	}
}
