use crate::error::{RelaxError, Result};
use crate::vector::{try_normalize, MIN_LENGTH};
use crate::V3;

type V2 = nalgebra::Vector2<f32>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
	origin: V3,
	dir: V3,
}

impl Ray {
	pub fn new(origin: V3, dir: V3) -> Result<Self> {
		let dir = try_normalize(dir, "pointer ray direction")?;
		Ok(Self { origin, dir })
	}

	pub fn through(origin: V3, target: V3) -> Result<Self> {
		Self::new(origin, target - origin)
	}

	pub fn origin(&self) -> V3 {
		self.origin
	}

	pub fn dir(&self) -> V3 {
		self.dir
	}

	pub fn closest_point(&self, p: V3) -> V3 {
		self.origin + self.dir * (p - self.origin).dot(&self.dir)
	}

	// displacement taking p onto the ray's line
	pub fn pull(&self, p: V3) -> V3 {
		let v = p - self.origin;
		self.dir * v.dot(&self.dir) - v
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBasis {
	forward: V3,
	right: V3,
	up: V3,
}

impl CameraBasis {
	pub fn new(look: V3, up: V3) -> Result<Self> {
		let forward = try_normalize(look, "camera look direction")?;
		let right =
			try_normalize(forward.cross(&up), "camera up parallel to look")?;
		Ok(Self {
			forward,
			right,
			up: right.cross(&forward),
		})
	}

	pub fn forward(&self) -> V3 {
		self.forward
	}

	pub fn right(&self) -> V3 {
		self.right
	}

	pub fn up(&self) -> V3 {
		self.up
	}

	fn project(&self, v: V3, depth: f32) -> V2 {
		V2::new(v.dot(&self.right), v.dot(&self.up)) / depth
	}
}

// Screen-space pick: directions from the ray origin to each node are
// compared with the ray direction after projecting both onto the camera
// plane, all divided by the view depth of the ray direction.
pub fn nearest_node(
	positions: &[V3],
	ray: &Ray,
	camera: &CameraBasis,
	range: f32,
) -> Result<Option<usize>> {
	let depth = ray.dir.dot(&camera.forward);
	if depth.abs() < MIN_LENGTH {
		return Err(RelaxError::DegenerateGeometry(
			"pointer ray parallel to the view plane",
		));
	}
	let c = camera.project(ray.dir, depth);
	let mut min_dist = f32::INFINITY;
	let mut min_id = None;
	for (id, pos) in positions.iter().enumerate() {
		let v = pos - ray.origin;
		// behind the pointer
		if v.dot(&ray.dir) <= 0. {
			continue;
		}
		let dist = (camera.project(v.normalize(), depth) - c).norm_squared();
		if dist < min_dist {
			min_id = Some(id);
			min_dist = dist;
		}
	}
	Ok(if min_dist < range { min_id } else { None })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
	Down {
		ray: Ray,
		camera: CameraBasis,
		range: f32,
	},
	Move {
		ray: Ray,
	},
	Up,
	CameraChanged,
	NavigationModeChanged,
}

#[derive(Clone, Debug, Default)]
pub struct Interaction {
	held: Option<usize>,
	ray: Option<Ray>,
}

impl Interaction {
	pub fn handle(&mut self, event: PointerEvent, positions: &[V3]) -> Result<()> {
		match event {
			PointerEvent::Down { ray, camera, range } => {
				self.clear();
				self.held = nearest_node(positions, &ray, &camera, range)?;
				self.ray = Some(ray);
			}
			PointerEvent::Move { ray } => {
				self.ray = Some(ray);
			}
			PointerEvent::Up
			| PointerEvent::CameraChanged
			| PointerEvent::NavigationModeChanged => self.clear(),
		}
		Ok(())
	}

	pub fn clear(&mut self) {
		self.held = None;
		self.ray = None;
	}

	pub fn held(&self) -> Option<usize> {
		self.held
	}

	pub fn ray(&self) -> Option<Ray> {
		self.ray
	}

	pub fn drag_move(&self, positions: &[V3]) -> Option<(usize, V3)> {
		let id = self.held?;
		let ray = self.ray?;
		let pos = positions.get(id)?;
		Some((id, ray.pull(*pos)))
	}
}
