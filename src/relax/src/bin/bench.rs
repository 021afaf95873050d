use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use relax::goal::{AnchorGoal, Goal, LengthGoal};
use relax::{Solver, V3};

// a jittered grid of length goals hanging from two corners
fn grid_goals(n: usize, rng: &mut StdRng) -> Vec<Box<dyn Goal>> {
	let mut pos = vec![];
	for idx in 0..n {
		for idy in 0..n {
			let z = rng.gen_range(-0.1f32..0.1);
			pos.push(V3::new(idx as f32, idy as f32, z));
		}
	}
	let mut goals = vec![];
	for idx in 0..n {
		for idy in 0..n {
			let p = pos[idx * n + idy];
			if idx + 1 < n {
				let q = pos[(idx + 1) * n + idy];
				goals.push(LengthGoal::new_with_l0(p, q, 0.8).build());
			}
			if idy + 1 < n {
				let q = pos[idx * n + idy + 1];
				goals.push(LengthGoal::new_with_l0(p, q, 0.8).build());
			}
		}
	}
	goals.push(AnchorGoal::new(pos[0]).with_weight(100.).build());
	goals.push(AnchorGoal::new(pos[n * n - 1]).with_weight(100.).build());
	goals
}

fn main() {
	let mut rng = StdRng::seed_from_u64(0);
	let mut solver = Solver::default();
	if let Err(e) = solver.add_goals(grid_goals(60, &mut rng)) {
		eprintln!("ERROR: {}", e);
		return;
	}
	let start = Instant::now();
	let iterations = 1000;
	solver.step_iterations(iterations, true);
	let duration = start.elapsed().as_secs_f32();
	eprintln!(
		"{} nodes, {} goals: {:.1} iterations/s, velocity sum {:.3e}",
		solver.node_count(),
		solver.goal_count(),
		iterations as f32 / duration,
		solver.velocity_sum(),
	);
}
