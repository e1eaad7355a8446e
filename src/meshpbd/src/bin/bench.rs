use std::path::PathBuf;
use std::time::SystemTime;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use meshpbd::primitive::{GridBuilder, IcosphereBuilder};
use meshpbd::ColoredSchedule;
use protocol::Message;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
	Icosphere,
	Grid,
}

/// Build a colored constraint schedule for a procedural mesh and time it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
	#[arg(long, value_enum, default_value = "icosphere")]
	shape: Shape,

	/// Icosphere radius
	#[arg(long, default_value = "100")]
	radius: f32,

	/// Icosphere subdivision level
	#[arg(long, default_value = "5")]
	detail: usize,

	/// Distance under which icosphere vertices are welded
	#[arg(long, default_value = "1.5")]
	merge_tolerance: f32,

	/// Grid vertices per side
	#[arg(long, default_value = "32")]
	size: usize,

	/// Grid spacing
	#[arg(long, default_value = "1")]
	spacing: f32,

	#[arg(short, long, default_value = "100")]
	repeat: usize,

	/// Write the serialized schedule here
	#[arg(short, long)]
	output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();
	let cli = Cli::parse();

	let mesh = match cli.shape {
		Shape::Icosphere => IcosphereBuilder::default()
			.with_radius(cli.radius)
			.with_detail(cli.detail)
			.with_merge_tolerance(cli.merge_tolerance)
			.build(),
		Shape::Grid => GridBuilder::default()
			.with_size(cli.size, cli.size)
			.with_spacing(cli.spacing)
			.build(),
	};
	info!(
		vertices = mesh.vertex_count(),
		triangles = mesh.triangle_count(),
		"mesh ready"
	);

	let start = SystemTime::now();
	let mut schedule = ColoredSchedule::build(&mesh)?;
	for _ in 1..cli.repeat {
		schedule = ColoredSchedule::build(&mesh)?;
	}
	let duration = SystemTime::now().duration_since(start)?.as_micros();
	info!(
		particles = schedule.particles().len(),
		constraints = schedule.constraints().len(),
		max_degree = schedule.max_degree(),
		colors = schedule.max_color(),
		mean_us = duration as f32 / cli.repeat.max(1) as f32,
		"schedule built"
	);

	if let Some(path) = cli.output {
		let bytes = Message::Schedule(schedule.pr_model()).to_bytes()?;
		std::fs::write(&path, bytes)?;
		info!(path = %path.display(), "schedule written");
	}
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_cli_defaults() {
		let cli = Cli::try_parse_from(["bench"]).unwrap();
		assert!(matches!(cli.shape, Shape::Icosphere));
		assert_eq!(cli.detail, 5);
		assert_eq!(cli.repeat, 100);
		assert!(cli.output.is_none());
	}

	#[test]
	fn test_cli_grid() {
		let cli = Cli::try_parse_from([
			"bench", "--shape", "grid", "--size", "8", "-o", "out.bin",
		])
		.unwrap();
		assert!(matches!(cli.shape, Shape::Grid));
		assert_eq!(cli.size, 8);
		assert_eq!(cli.output, Some(PathBuf::from("out.bin")));
	}
}
