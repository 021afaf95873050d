use crate::error::{RelaxError, Result};
use crate::V3;

// Registration half shared by goals and binders: the positions a
// plug-in asks for and the node indices the solver hands back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Binding {
	node_count: usize,
	start_pos: Vec<V3>,
	// set once by the solver, fixed afterwards
	node_ids: Option<Vec<usize>>,
}

impl Binding {
	pub fn new(start_pos: Vec<V3>) -> Self {
		Self::with_count(start_pos.len(), start_pos)
	}

	pub fn with_count(node_count: usize, start_pos: Vec<V3>) -> Self {
		Self {
			node_count,
			start_pos,
			node_ids: None,
		}
	}

	// already bound by index, nothing to deduplicate
	pub fn from_ids(node_ids: Vec<usize>) -> Self {
		Self {
			node_count: node_ids.len(),
			start_pos: Vec::new(),
			node_ids: Some(node_ids),
		}
	}

	pub fn node_count(&self) -> usize {
		self.node_count
	}

	pub fn start_pos(&self) -> &[V3] {
		&self.start_pos
	}

	pub fn is_bound(&self) -> bool {
		self.node_ids.is_some()
	}

	pub fn ids(&self) -> &[usize] {
		self.node_ids.as_deref().unwrap_or(&[])
	}

	pub(crate) fn set_ids(&mut self, node_ids: Vec<usize>) {
		debug_assert_eq!(node_ids.len(), self.node_count);
		self.node_ids = Some(node_ids);
	}

	pub fn check(&self, node_len: usize) -> Result<()> {
		let mismatch = |actual| RelaxError::ArityMismatch {
			expected: self.node_count,
			actual,
		};
		match &self.node_ids {
			None => {
				if self.start_pos.len() != self.node_count {
					return Err(mismatch(self.start_pos.len()));
				}
			}
			Some(ids) => {
				if ids.len() != self.node_count {
					return Err(mismatch(ids.len()));
				}
				if !self.start_pos.is_empty()
					&& self.start_pos.len() != self.node_count
				{
					return Err(mismatch(self.start_pos.len()));
				}
				if let Some(&index) = ids.iter().find(|&&id| id >= node_len) {
					return Err(RelaxError::NodeOutOfBounds {
						index,
						count: node_len,
					});
				}
			}
		}
		Ok(())
	}
}
