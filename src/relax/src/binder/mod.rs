pub mod polyline;

use dyn_clone::DynClone;

use crate::binding::Binding;
use crate::goal::GoalOutput;
use crate::V3;

pub use polyline::PolylineBinder;

// Read-side consumer of node positions: registered like a goal but
// never votes in a step.
pub trait Binder: DynClone + Send {
	fn binding(&self) -> &Binding;

	fn binding_mut(&mut self) -> &mut Binding;

	fn geometry(&self, positions: &[V3]) -> GoalOutput;
}

dyn_clone::clone_trait_object!(Binder);
