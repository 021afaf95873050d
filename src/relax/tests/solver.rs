use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use relax::goal::{AnchorGoal, Goal, GoalCore, LengthGoal, PushGoal};
use relax::interaction::{CameraBasis, PointerEvent, Ray};
use relax::{RelaxError, Solver, V3};

fn random_point(rng: &mut StdRng) -> V3 {
	V3::new(
		rng.gen_range(-10f32..10.),
		rng.gen_range(-10f32..10.),
		rng.gen_range(-10f32..10.),
	)
}

fn random_goals(seed: u64) -> Vec<Box<dyn Goal>> {
	let mut rng = StdRng::seed_from_u64(seed);
	let points: Vec<V3> = (0..40).map(|_| random_point(&mut rng)).collect();
	let mut goals = vec![];
	for _ in 0..120 {
		let a = points[rng.gen_range(0..points.len())];
		let b = points[rng.gen_range(0..points.len())];
		let l0 = rng.gen_range(0.5f32..5.);
		goals.push(LengthGoal::new_with_l0(a, b, l0).build());
	}
	goals.push(AnchorGoal::new(points[0]).with_weight(10.).build());
	goals
}

#[test]
fn length_converges() {
	let mut solver = Solver::default();
	let goal =
		LengthGoal::new_with_l0(V3::zeros(), V3::new(2., 0., 0.), 1.);
	solver.add_goal(goal.build()).unwrap();
	solver.step_iterations(200, false);
	let p = solver.positions();
	assert!(((p[1] - p[0]).norm() - 1.).abs() < 1e-3);
}

#[test]
fn length_converges_with_momentum() {
	let mut solver = Solver::default();
	let goal =
		LengthGoal::new_with_l0(V3::zeros(), V3::new(2., 0., 0.), 1.);
	solver.add_goal(goal.build()).unwrap();
	solver.step_iterations(500, true);
	let p = solver.positions();
	assert!(((p[1] - p[0]).norm() - 1.).abs() < 1e-3);
	assert!(solver.is_settled(1e-6));
}

#[test]
fn merge_threshold() {
	let mut rng = StdRng::seed_from_u64(7);
	for _ in 0..50 {
		let t = rng.gen_range(0.01f32..1.);
		let mut solver = Solver::default().with_merge_threshold(t);
		let p = random_point(&mut rng);
		solver.add_goal(AnchorGoal::new(p).build()).unwrap();
		let dir = random_point(&mut rng).normalize();
		let near = p + dir * (t * 0.5);
		let far = p + dir * (t * 2.0);
		assert_eq!(solver.register(&[near], t), vec![0]);
		assert_eq!(solver.node_count(), 1);
		assert_eq!(solver.register(&[far], t), vec![1]);
		assert_eq!(solver.node_count(), 2);
	}
}

#[test]
fn shared_nodes() {
	let mut solver = Solver::default();
	let n = solver
		.add_goals(vec![
			LengthGoal::new(V3::zeros(), V3::x()).build(),
			LengthGoal::new(V3::x(), V3::y()).build(),
			LengthGoal::new(V3::y(), V3::zeros()).build(),
		])
		.unwrap();
	assert_eq!(n, 3);
	assert_eq!(solver.node_count(), 3);
	for id in 0..3 {
		let core = solver.goal(id).unwrap().core();
		assert_eq!(core.ids().len(), core.binding().start_pos().len());
	}
	assert_eq!(solver.goal(2).unwrap().core().ids(), &[2, 0]);
}

#[test]
fn arity_rejected_before_nodes() {
	#[derive(Clone)]
	struct Triangle {
		core: GoalCore,
	}

	impl Goal for Triangle {
		fn core(&self) -> &GoalCore {
			&self.core
		}

		fn core_mut(&mut self) -> &mut GoalCore {
			&mut self.core
		}

		fn calculate(&mut self, _positions: &[V3]) {}
	}

	let mut solver = Solver::default();
	let goal = Triangle {
		core: GoalCore::new(3, vec![V3::x(), V3::y(), V3::z(), V3::zeros()]),
	};
	let r = solver.add_goals(vec![
		AnchorGoal::new(V3::zeros()).build(),
		Box::new(goal) as Box<dyn Goal>,
	]);
	assert_eq!(
		r,
		Err(RelaxError::ArityMismatch {
			expected: 3,
			actual: 4
		})
	);
	assert_eq!(solver.node_count(), 1);
	assert_eq!(solver.goal_count(), 1);
}

#[test]
fn deterministic() {
	let run = |parallel: bool| {
		let mut solver = Solver::default().with_parallel(parallel);
		solver.add_goals(random_goals(3)).unwrap();
		solver.step_iterations(300, false);
		solver.positions()
	};
	let first = run(true);
	for _ in 0..3 {
		assert_eq!(run(true), first);
	}
	assert_eq!(run(false), first);
}

#[test]
fn reset_after_steps() {
	let mut solver = Solver::default();
	solver.add_goals(random_goals(11)).unwrap();
	for steps in [1, 10, 100] {
		solver.step_iterations(steps, true);
		solver.reset();
		for node in solver.nodes() {
			assert_eq!(node.get_pos(), node.get_start_pos());
			assert_eq!(node.get_vel(), V3::zeros());
		}
	}
}

#[test]
fn drag_dominates() {
	let mut solver = Solver::default();
	let p = V3::new(0., 0., -10.);
	// pulls the node toward -x
	solver
		.add_goal(PushGoal::new(vec![p], V3::new(-1., 0., 0.)).build())
		.unwrap();
	let camera = CameraBasis::new(V3::new(0., 0., -1.), V3::y()).unwrap();
	let ray = Ray::new(V3::zeros(), V3::new(0., 0., -1.)).unwrap();
	solver
		.handle_pointer(PointerEvent::Down {
			ray,
			camera,
			range: 0.01,
		})
		.unwrap();
	let ray = Ray::through(V3::zeros(), V3::new(1., 0., -10.)).unwrap();
	let target = ray.closest_point(p);
	solver.handle_pointer(PointerEvent::Move { ray }).unwrap();
	solver.step(false);
	let q = solver.positions()[0];
	let to_ray = (target - p).normalize();
	let moved = q - p;
	assert!(moved.dot(&to_ray) > 0.);
	assert!((q - target).norm() < (p - target).norm());
	assert!(moved[0] > 0.);
}

#[test]
fn drag_cleared_by_navigation() {
	let mut solver = Solver::default();
	solver.add_goal(AnchorGoal::new(V3::new(0., 0., -3.)).build()).unwrap();
	let camera = CameraBasis::new(V3::new(0., 0., -1.), V3::y()).unwrap();
	let ray = Ray::new(V3::zeros(), V3::new(0., 0., -1.)).unwrap();
	solver
		.handle_pointer(PointerEvent::Down {
			ray,
			camera,
			range: 0.01,
		})
		.unwrap();
	assert_eq!(solver.held_node(), Some(0));
	solver
		.handle_pointer(PointerEvent::NavigationModeChanged)
		.unwrap();
	assert_eq!(solver.held_node(), None);
	solver.step(false);
	assert_eq!(solver.positions()[0], V3::new(0., 0., -3.));
}

#[test]
fn step_for_budget() {
	let mut solver = Solver::default();
	solver.add_goals(random_goals(5)).unwrap();
	assert_eq!(solver.step_for(std::time::Duration::ZERO, false), 0);
	let n = solver.step_for(std::time::Duration::from_millis(20), false);
	assert!(n > 0);
	assert_eq!(solver.iterations(), n);
}
