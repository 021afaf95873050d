use crate::pr_model::PrModel;

#[derive(Debug)]
pub enum UserEvent {
	Update(PrModel, UpdateInfo),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateInfo {
	// busy time / frame time of the last frame
	pub load: f32,
	pub iterations: usize,
	pub node_len: usize,
	pub goal_len: usize,
}
