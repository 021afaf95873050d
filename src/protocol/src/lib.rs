pub mod pr_model;
pub mod user_event;
use pr_model::PrModel;

use serde::{Deserialize, Serialize};

pub type CodecResult<T> = bincode::Result<T>;

#[derive(Debug, Serialize, Deserialize)]
pub enum Message {
	WorldUpdate(PrModel),
	Nop,
}

impl Message {
	pub fn to_bytes(&self) -> CodecResult<Vec<u8>> {
		bincode::serialize(&self)
	}

	pub fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
		bincode::deserialize(bytes)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use pr_model::{PrGoal, PrNode};

	#[test]
	fn test_world_update_bytes() {
		let model = PrModel {
			nodes: vec![
				PrNode { pos: [0., 1., 2.] },
				PrNode { pos: [3., 4., 5.] },
			],
			goals: vec![PrGoal {
				id: 0,
				nodes: vec![0, 1],
			}],
		};
		let bytes = Message::WorldUpdate(model.clone()).to_bytes().unwrap();
		match Message::from_bytes(&bytes).unwrap() {
			Message::WorldUpdate(m) => assert_eq!(m, model),
			Message::Nop => panic!("decoded Nop"),
		}
	}

	#[test]
	fn test_truncated_bytes() {
		let bytes = Message::WorldUpdate(PrModel::default()).to_bytes().unwrap();
		assert!(Message::from_bytes(&bytes[..bytes.len() - 1]).is_err());
	}
}
