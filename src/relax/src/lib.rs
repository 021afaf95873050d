pub mod binder;
pub mod binding;
pub mod controller_message;
pub mod error;
pub mod goal;
pub mod interaction;
pub mod node;
pub mod solver;
pub mod vector;

pub type V3 = nalgebra::Vector3<f32>;

pub use error::{RelaxError, Result};
pub use solver::Solver;
