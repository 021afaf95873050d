use crate::binder::Binder;
use crate::binding::Binding;
use crate::goal::GoalOutput;
use crate::V3;

#[derive(Clone)]
pub struct PolylineBinder {
	binding: Binding,
}

impl PolylineBinder {
	pub fn new(points: Vec<V3>) -> Self {
		Self {
			binding: Binding::new(points),
		}
	}

	pub fn build(self) -> Box<dyn Binder> {
		Box::new(self)
	}
}

impl Binder for PolylineBinder {
	fn binding(&self) -> &Binding {
		&self.binding
	}

	fn binding_mut(&mut self) -> &mut Binding {
		&mut self.binding
	}

	fn geometry(&self, positions: &[V3]) -> GoalOutput {
		GoalOutput::Points(
			self.binding.ids().iter().map(|&id| positions[id]).collect(),
		)
	}
}
