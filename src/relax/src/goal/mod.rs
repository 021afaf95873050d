pub mod anchor;
pub mod length;
pub mod push;

use dyn_clone::DynClone;

use crate::binding::Binding;
use crate::V3;
use protocol::pr_model::PrGoal;

pub use anchor::AnchorGoal;
pub use length::{LengthGoal, LengthType};
pub use push::PushGoal;

#[derive(Clone, Debug, PartialEq)]
pub enum GoalOutput {
	None,
	Point(V3),
	Segment(V3, V3),
	Points(Vec<V3>),
	Scalar(f32),
}

#[derive(Clone, Debug)]
pub struct GoalCore {
	binding: Binding,
	// one desired displacement per bound node, rewritten every step
	moves: Vec<V3>,
	weight: f32,
}

impl GoalCore {
	pub fn new(node_count: usize, start_pos: Vec<V3>) -> Self {
		Self {
			binding: Binding::with_count(node_count, start_pos),
			moves: vec![V3::zeros(); node_count],
			weight: 1.0,
		}
	}

	pub fn from_ids(node_ids: Vec<usize>) -> Self {
		let node_count = node_ids.len();
		Self {
			binding: Binding::from_ids(node_ids),
			moves: vec![V3::zeros(); node_count],
			weight: 1.0,
		}
	}

	pub fn with_weight(mut self, weight: f32) -> Self {
		self.weight = weight;
		self
	}

	pub fn binding(&self) -> &Binding {
		&self.binding
	}

	pub(crate) fn binding_mut(&mut self) -> &mut Binding {
		&mut self.binding
	}

	pub fn ids(&self) -> &[usize] {
		self.binding.ids()
	}

	pub fn node_count(&self) -> usize {
		self.binding.node_count()
	}

	pub fn moves(&self) -> &[V3] {
		&self.moves
	}

	// a slice, so the count always matches the bound nodes
	pub fn moves_mut(&mut self) -> &mut [V3] {
		&mut self.moves
	}

	pub fn weight(&self) -> f32 {
		self.weight
	}

	pub fn set_weight(&mut self, weight: f32) {
		self.weight = weight;
	}

	pub fn clear_moves(&mut self) {
		self.moves.iter_mut().for_each(|m| *m = V3::zeros());
	}
}

// A goal reads node positions and writes only its own moves, so all
// goals of a step can be calculated in parallel.
pub trait Goal: DynClone + Send {
	fn core(&self) -> &GoalCore;

	fn core_mut(&mut self) -> &mut GoalCore;

	fn calculate(&mut self, positions: &[V3]);

	fn output(&self, _positions: &[V3]) -> GoalOutput {
		GoalOutput::None
	}

	fn render(&self, id: usize) -> PrGoal {
		PrGoal {
			id,
			nodes: self.core().ids().to_vec(),
		}
	}
}

dyn_clone::clone_trait_object!(Goal);
