use crate::vector::to_array;
use crate::V3;
use protocol::pr_model::PrNode;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub pos: V3,
	pub start_pos: V3,
	pub vel: V3,
}

impl Node {
	pub fn new(pos: V3) -> Self {
		Self {
			pos,
			start_pos: pos,
			vel: V3::zeros(),
		}
	}

	pub fn get_pos(&self) -> V3 {
		self.pos
	}

	pub fn get_start_pos(&self) -> V3 {
		self.start_pos
	}

	pub fn get_vel(&self) -> V3 {
		self.vel
	}

	pub fn apply_momentum(&mut self) {
		self.pos += self.vel;
	}

	// move by the averaged goal vote, feeding it into velocity when
	// momentum is on and damping velocity that opposes the move
	pub fn apply_move(&mut self, dp: V3, momentum: bool, damping: f32) {
		self.pos += dp;
		if !momentum {
			return;
		}
		self.vel += dp;
		if self.vel.dot(&dp) < 0. {
			self.vel *= damping;
		}
	}

	pub fn reset(&mut self) {
		self.pos = self.start_pos;
		self.vel = V3::zeros();
	}

	pub fn render(&self) -> PrNode {
		PrNode {
			pos: to_array(self.pos),
		}
	}
}
