use crate::goal::{Goal, GoalCore, GoalOutput};
use crate::V3;

// pulls one node toward a fixed point
#[derive(Clone)]
pub struct AnchorGoal {
	core: GoalCore,
	target: V3,
}

impl AnchorGoal {
	pub fn new(pos: V3) -> Self {
		Self::new_with_target(pos, pos)
	}

	pub fn new_with_target(pos: V3, target: V3) -> Self {
		Self {
			core: GoalCore::new(1, vec![pos]),
			target,
		}
	}

	pub fn from_id(id: usize, target: V3) -> Self {
		Self {
			core: GoalCore::from_ids(vec![id]),
			target,
		}
	}

	pub fn with_weight(mut self, weight: f32) -> Self {
		self.core.set_weight(weight);
		self
	}

	pub fn set_target(&mut self, target: V3) {
		self.target = target;
	}

	pub fn build(self) -> Box<dyn Goal> {
		Box::new(self)
	}
}

impl Goal for AnchorGoal {
	fn core(&self) -> &GoalCore {
		&self.core
	}

	fn core_mut(&mut self) -> &mut GoalCore {
		&mut self.core
	}

	fn calculate(&mut self, positions: &[V3]) {
		let id = self.core.ids()[0];
		self.core.moves_mut()[0] = self.target - positions[id];
	}

	fn output(&self, _positions: &[V3]) -> GoalOutput {
		GoalOutput::Point(self.target)
	}
}
