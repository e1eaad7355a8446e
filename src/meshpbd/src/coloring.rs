//! First-fit greedy edge coloring of the constraint graph.
//!
//! Constraints are visited strictly in discovery order and each takes the
//! smallest color free at both endpoints. No reordering, no backtracking.
//! The result is valid (no particle sees a color twice) but not minimal.

use tracing::{info, trace};

use crate::constraint::DistanceConstraint;
use crate::error::{Result, ScheduleError};
use crate::particle::Particles;
use crate::schedule::ColoredSchedule;

/// Largest color first-fit can need for the edge `(a, b)`.
///
/// The other constraints at `a` hold at most `deg(a) - 1` colors and those
/// at `b` at most `deg(b) - 1`, so one of `1..=deg(a) + deg(b) - 1` is free
/// at both.
pub fn color_bound(particles: &Particles, a: usize, b: usize) -> u32 {
	(particles[a].degree() + particles[b].degree()).saturating_sub(1) as u32
}

/// Smallest color unoccupied at both `a` and `b`, searched up to
/// [`color_bound`].
pub fn first_fit(particles: &Particles, a: usize, b: usize) -> Result<u32> {
	let bound = color_bound(particles, a, b);
	let sa = particles[a].color_slots();
	let sb = particles[b].color_slots();
	(1..=bound)
		.find(|&k| !sa.is_occupied(k) && !sb.is_occupied(k))
		.ok_or(ScheduleError::ColorBoundExceeded { a, b, bound })
}

/// Assign every constraint a color and hand back the finished schedule.
pub fn color(
	mut constraints: Vec<DistanceConstraint>,
	mut particles: Particles,
) -> Result<ColoredSchedule> {
	let _span = tracing::debug_span!("color").entered();
	for con in constraints.iter_mut() {
		let [a, b] = con.ids();
		let k = first_fit(&particles, a, b)?;
		let fresh_a = particles.get_mut(a).color_slots.occupy(k, b);
		let fresh_b = particles.get_mut(b).color_slots.occupy(k, a);
		debug_assert!(fresh_a && fresh_b);
		con.set_color(k);
		trace!(a, b, color = k, "constraint colored");
	}
	let schedule = ColoredSchedule::new(particles, constraints);
	info!(
		colors = schedule.max_color(),
		max_degree = schedule.max_degree(),
		"constraints colored"
	);
	Ok(schedule)
}
