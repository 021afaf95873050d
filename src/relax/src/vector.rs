use crate::error::{RelaxError, Result};
use crate::V3;

// below this length a direction is treated as zero
pub const MIN_LENGTH: f32 = 1e-12;

pub fn try_normalize(v: V3, what: &'static str) -> Result<V3> {
	v.try_normalize(MIN_LENGTH)
		.ok_or(RelaxError::DegenerateGeometry(what))
}

pub fn to_array(v: V3) -> [f32; 3] {
	[v[0], v[1], v[2]]
}
