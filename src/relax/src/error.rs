use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelaxError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelaxError {
	#[error("expected {expected} node positions, got {actual}")]
	ArityMismatch { expected: usize, actual: usize },
	#[error("degenerate geometry: {0}")]
	DegenerateGeometry(&'static str),
	#[error("node index {index} out of bounds (count: {count})")]
	NodeOutOfBounds { index: usize, count: usize },
	#[error("goal index {index} out of bounds (count: {count})")]
	GoalOutOfBounds { index: usize, count: usize },
	#[error("binder index {index} out of bounds (count: {count})")]
	BinderOutOfBounds { index: usize, count: usize },
}
