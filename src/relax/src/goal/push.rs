use crate::goal::{Goal, GoalCore};
use crate::V3;

// constant displacement on every bound node, e.g. a load
#[derive(Clone)]
pub struct PushGoal {
	core: GoalCore,
	dp: V3,
}

impl PushGoal {
	pub fn new(start_pos: Vec<V3>, dp: V3) -> Self {
		Self {
			core: GoalCore::new(start_pos.len(), start_pos),
			dp,
		}
	}

	pub fn from_ids(ids: Vec<usize>, dp: V3) -> Self {
		Self {
			core: GoalCore::from_ids(ids),
			dp,
		}
	}

	pub fn with_weight(mut self, weight: f32) -> Self {
		self.core.set_weight(weight);
		self
	}

	pub fn build(self) -> Box<dyn Goal> {
		Box::new(self)
	}
}

impl Goal for PushGoal {
	fn core(&self) -> &GoalCore {
		&self.core
	}

	fn core_mut(&mut self) -> &mut GoalCore {
		&mut self.core
	}

	fn calculate(&mut self, _positions: &[V3]) {
		let dp = self.dp;
		self.core.moves_mut().iter_mut().for_each(|m| *m = dp);
	}
}
