use crate::goal::{Goal, GoalCore, GoalOutput};
use crate::vector::MIN_LENGTH;
use crate::V3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LengthType {
	Normal,
	Repulsive, // only pushes apart, acts as a minimum length
	Attractive, // only pulls together, acts as a cable
}

// keeps two nodes at a rest length, each end takes half the stretch
#[derive(Clone)]
pub struct LengthGoal {
	core: GoalCore,
	l0: f32,
	ty: LengthType,
}

impl LengthGoal {
	pub fn new(p1: V3, p2: V3) -> Self {
		let l0 = (p1 - p2).magnitude();
		Self::new_with_l0(p1, p2, l0)
	}

	pub fn new_with_l0(p1: V3, p2: V3, l0: f32) -> Self {
		Self {
			core: GoalCore::new(2, vec![p1, p2]),
			l0,
			ty: LengthType::Normal,
		}
	}

	pub fn from_ids(id1: usize, id2: usize, l0: f32) -> Self {
		Self {
			core: GoalCore::from_ids(vec![id1, id2]),
			l0,
			ty: LengthType::Normal,
		}
	}

	pub fn repulsive_only(mut self) -> Self {
		self.ty = LengthType::Repulsive;
		self
	}

	pub fn attractive_only(mut self) -> Self {
		self.ty = LengthType::Attractive;
		self
	}

	pub fn with_weight(mut self, weight: f32) -> Self {
		self.core.set_weight(weight);
		self
	}

	pub fn rest_length(&self) -> f32 {
		self.l0
	}

	pub fn build(self) -> Box<dyn Goal> {
		Box::new(self)
	}
}

impl Goal for LengthGoal {
	fn core(&self) -> &GoalCore {
		&self.core
	}

	fn core_mut(&mut self) -> &mut GoalCore {
		&mut self.core
	}

	fn calculate(&mut self, positions: &[V3]) {
		let (id1, id2) = {
			let ids = self.core.ids();
			(ids[0], ids[1])
		};
		let dp = positions[id2] - positions[id1];
		let l = dp.magnitude();
		// coincident ends have no direction to push along
		if l < MIN_LENGTH {
			self.core.clear_moves();
			return;
		}
		let dl = l - self.l0;
		if self.ty == LengthType::Repulsive && dl >= 0.
			|| self.ty == LengthType::Attractive && dl <= 0.
		{
			self.core.clear_moves();
			return;
		}
		let correct = dp * (0.5 * dl / l);
		let moves = self.core.moves_mut();
		moves[0] = correct;
		moves[1] = -correct;
	}

	fn output(&self, positions: &[V3]) -> GoalOutput {
		let ids = self.core.ids();
		GoalOutput::Segment(positions[ids[0]], positions[ids[1]])
	}
}
