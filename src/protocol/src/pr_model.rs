// pr_model: node/goal snapshot for rendering and exchange

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrNode {
	pub pos: [f32; 3],
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrGoal {
	pub id: usize,
	pub nodes: Vec<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrModel {
	pub nodes: Vec<PrNode>,
	pub goals: Vec<PrGoal>,
}

impl PrModel {
	pub fn node_len(&self) -> usize {
		self.nodes.len()
	}

	pub fn goal_len(&self) -> usize {
		self.goals.len()
	}
}
