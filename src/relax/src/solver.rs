use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use crate::binder::Binder;
use crate::binding::Binding;
use crate::controller_message::ControllerMessage;
use crate::error::{RelaxError, Result};
use crate::goal::{Goal, GoalOutput};
use crate::interaction::{Interaction, PointerEvent};
use crate::node::Node;
use crate::V3;
use protocol::pr_model::PrModel;
use protocol::{CodecResult, Message};
use protocol::user_event::{UpdateInfo, UserEvent};

pub struct Solver {
	pub merge_threshold: f32,
	pub drag_weight: f32,
	pub damping: f32,
	pub momentum: bool,
	pub parallel: bool,
	pub frame_iterations: usize,
	pub frame_time: Duration,
	iteration: usize,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
	quit: bool,

	nodes: Vec<Node>,
	goals: Vec<Box<dyn Goal>>,
	binders: Vec<Box<dyn Binder>>,
	interaction: Interaction,
	controller: Option<Receiver<ControllerMessage>>,
}

impl Default for Solver {
	fn default() -> Self {
		Self {
			merge_threshold: 1e-4,
			drag_weight: 30.0,
			damping: 0.9,
			momentum: true,
			parallel: true,
			frame_iterations: 10,
			frame_time: Duration::from_millis(20),
			iteration: 0,
			forward_frames: -1,
			quit: false,

			nodes: Vec::new(),
			goals: Vec::new(),
			binders: Vec::new(),
			interaction: Interaction::default(),
			controller: None,
		}
	}
}

impl Solver {
	pub fn with_merge_threshold(mut self, merge_threshold: f32) -> Self {
		self.merge_threshold = merge_threshold;
		self
	}

	pub fn with_drag_weight(mut self, drag_weight: f32) -> Self {
		self.drag_weight = drag_weight;
		self
	}

	pub fn with_damping(mut self, damping: f32) -> Self {
		self.damping = damping;
		self
	}

	pub fn with_momentum(mut self, momentum: bool) -> Self {
		self.momentum = momentum;
		self
	}

	pub fn with_parallel(mut self, parallel: bool) -> Self {
		self.parallel = parallel;
		self
	}

	pub fn with_frame_iterations(mut self, frame_iterations: usize) -> Self {
		self.frame_iterations = frame_iterations;
		self
	}

	pub fn with_frame_time(mut self, frame_time: Duration) -> Self {
		self.frame_time = frame_time;
		self
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 1; // provide first frame
		self
	}

	// first node closer than tolerance, in creation order
	pub fn find_node(&self, pos: V3, tolerance: f32) -> Option<usize> {
		let tol2 = tolerance * tolerance;
		self.nodes
			.iter()
			.position(|node| (node.get_pos() - pos).norm_squared() < tol2)
	}

	pub fn register(
		&mut self,
		positions: &[V3],
		merge_threshold: f32,
	) -> Vec<usize> {
		let mut ids = Vec::with_capacity(positions.len());
		for &pos in positions {
			let id = match self.find_node(pos, merge_threshold) {
				Some(id) => id,
				None => {
					self.nodes.push(Node::new(pos));
					self.nodes.len() - 1
				}
			};
			ids.push(id);
		}
		ids
	}

	fn bind(&mut self, binding: &mut Binding) -> Result<()> {
		binding.check(self.nodes.len())?;
		if !binding.is_bound() {
			let ids = self.register(binding.start_pos(), self.merge_threshold);
			binding.set_ids(ids);
		}
		Ok(())
	}

	pub fn add_goal(&mut self, mut goal: Box<dyn Goal>) -> Result<usize> {
		if let Err(e) = self.bind(goal.core_mut().binding_mut()) {
			eprintln!("WARN: rejected goal: {}", e);
			return Err(e);
		}
		self.goals.push(goal);
		Ok(self.goals.len() - 1)
	}

	// each goal is registered on its own, a rejected goal leaves the
	// ones before it in place
	pub fn add_goals<I>(&mut self, goals: I) -> Result<usize>
	where
		I: IntoIterator<Item = Box<dyn Goal>>,
	{
		let goal_len = self.goals.len();
		let node_len = self.nodes.len();
		for goal in goals {
			self.add_goal(goal)?;
		}
		eprintln!(
			"INFO: add goals: {} goals, {} new nodes",
			self.goals.len() - goal_len,
			self.nodes.len() - node_len,
		);
		Ok(self.goals.len() - goal_len)
	}

	pub fn add_binder(&mut self, mut binder: Box<dyn Binder>) -> Result<usize> {
		if let Err(e) = self.bind(binder.binding_mut()) {
			eprintln!("WARN: rejected binder: {}", e);
			return Err(e);
		}
		self.binders.push(binder);
		Ok(self.binders.len() - 1)
	}

	fn solve_goals(&mut self, positions: &[V3]) {
		if self.parallel {
			use rayon::prelude::*;
			self.goals
				.par_iter_mut()
				.for_each(|goal| goal.calculate(positions));
		} else {
			self.goals
				.iter_mut()
				.for_each(|goal| goal.calculate(positions));
		}
	}

	pub fn step(&mut self, momentum: bool) {
		if momentum {
			for node in self.nodes.iter_mut() {
				node.apply_momentum();
			}
		}
		let positions = self.positions();
		// returns once every goal is done
		self.solve_goals(&positions);

		let mut move_sum = vec![V3::zeros(); self.nodes.len()];
		let mut weight_sum = vec![0f32; self.nodes.len()];
		for goal in self.goals.iter() {
			let core = goal.core();
			let weight = core.weight();
			for (&id, dp) in core.ids().iter().zip(core.moves()) {
				move_sum[id] += *dp * weight;
				weight_sum[id] += weight;
			}
		}
		if let Some((id, dp)) = self.interaction.drag_move(&positions) {
			move_sum[id] += dp * self.drag_weight;
			weight_sum[id] += self.drag_weight;
		}

		for (node, (dp, w)) in self
			.nodes
			.iter_mut()
			.zip(move_sum.into_iter().zip(weight_sum.into_iter()))
		{
			if w > 0. {
				node.apply_move(dp / w, momentum, self.damping);
			}
		}
		self.iteration += 1;
	}

	pub fn step_iterations(&mut self, iterations: usize, momentum: bool) {
		for _ in 0..iterations {
			self.step(momentum);
		}
	}

	// the budget is only checked between whole iterations
	pub fn step_for(&mut self, budget: Duration, momentum: bool) -> usize {
		let start_time = Instant::now();
		let mut count = 0;
		while start_time.elapsed() < budget {
			self.step(momentum);
			count += 1;
		}
		count
	}

	pub fn reset(&mut self) {
		for node in self.nodes.iter_mut() {
			node.reset();
		}
		self.interaction.clear();
		self.iteration = 0;
	}

	pub fn clear(&mut self) {
		eprintln!(
			"INFO: clear: {} nodes, {} goals, {} binders",
			self.nodes.len(),
			self.goals.len(),
			self.binders.len(),
		);
		self.nodes.clear();
		self.goals.clear();
		self.binders.clear();
		self.interaction.clear();
		self.iteration = 0;
	}

	pub fn positions(&self) -> Vec<V3> {
		self.nodes.iter().map(|node| node.get_pos()).collect()
	}

	pub fn node(&self, index: usize) -> Result<&Node> {
		self.nodes.get(index).ok_or(RelaxError::NodeOutOfBounds {
			index,
			count: self.nodes.len(),
		})
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn goal_count(&self) -> usize {
		self.goals.len()
	}

	pub fn binder_count(&self) -> usize {
		self.binders.len()
	}

	pub fn goal(&self, index: usize) -> Result<&(dyn Goal + 'static)> {
		let count = self.goals.len();
		self.goals
			.get(index)
			.map(|goal| goal.as_ref())
			.ok_or(RelaxError::GoalOutOfBounds { index, count })
	}

	// weights may be changed between steps through this, node ids stay
	// as registered
	pub fn goal_mut(
		&mut self,
		index: usize,
	) -> Result<&mut (dyn Goal + 'static)> {
		let count = self.goals.len();
		match self.goals.get_mut(index) {
			Some(goal) => Ok(goal.as_mut()),
			None => Err(RelaxError::GoalOutOfBounds { index, count }),
		}
	}

	pub fn goal_output(&self, index: usize) -> Result<GoalOutput> {
		let positions = self.positions();
		Ok(self.goal(index)?.output(&positions))
	}

	pub fn binder_geometry(&self, index: usize) -> Result<GoalOutput> {
		let binder = self.binders.get(index).ok_or(RelaxError::BinderOutOfBounds {
			index,
			count: self.binders.len(),
		})?;
		Ok(binder.geometry(&self.positions()))
	}

	pub fn velocity_sum(&self) -> f32 {
		self.nodes.iter().map(|node| node.get_vel().norm_squared()).sum()
	}

	pub fn is_settled(&self, threshold: f32) -> bool {
		self.velocity_sum() < threshold
	}

	pub fn iterations(&self) -> usize {
		self.iteration
	}

	pub fn held_node(&self) -> Option<usize> {
		self.interaction.held()
	}

	pub fn release(&mut self) {
		self.interaction.clear();
	}

	pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<()> {
		let positions = self.positions();
		let result = self.interaction.handle(event, &positions);
		if let Err(e) = &result {
			eprintln!("WARN: pointer {:?}: {}", event, e);
		}
		result
	}

	pub fn handle_message(&mut self, msg: ControllerMessage) -> Result<()> {
		match msg {
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
				} else {
					self.forward_frames = 0;
				}
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames += 1;
				}
			}
			ControllerMessage::Pointer(event) => self.handle_pointer(event)?,
			ControllerMessage::SetMomentum(momentum) => self.momentum = momentum,
			ControllerMessage::Reset => self.reset(),
			ControllerMessage::Quit => self.quit = true,
		}
		Ok(())
	}

	pub fn is_paused(&self) -> bool {
		self.forward_frames == 0
	}

	pub fn attach(&mut self) -> Sender<ControllerMessage> {
		let (tx, rx) = channel();
		self.controller = Some(rx);
		tx
	}

	pub fn detach(&mut self) {
		self.controller = None;
		self.interaction.clear();
	}

	pub fn is_attached(&self) -> bool {
		self.controller.is_some()
	}

	// apply every pending controller message, returns how many
	pub fn poll(&mut self) -> usize {
		let mut count = 0;
		loop {
			let msg = match self.controller.as_ref().map(|rx| rx.try_recv()) {
				None | Some(Err(TryRecvError::Empty)) => break,
				Some(Err(TryRecvError::Disconnected)) => {
					eprintln!("INFO: controller disconnected");
					self.detach();
					break;
				}
				Some(Ok(msg)) => msg,
			};
			// a bad message is logged where it fails and skipped
			let _ = self.handle_message(msg);
			count += 1;
		}
		count
	}

	pub fn pr_model(&self) -> PrModel {
		PrModel {
			nodes: self.nodes.iter().map(|node| node.render()).collect(),
			goals: self
				.goals
				.iter()
				.enumerate()
				.map(|(id, goal)| goal.render(id))
				.collect(),
		}
	}

	// snapshot wrapped in the wire envelope, for viewers in another process
	pub fn encode_snapshot(&self) -> CodecResult<Vec<u8>> {
		Message::WorldUpdate(self.pr_model()).to_bytes()
	}

	pub fn run(&mut self) {
		self.step_iterations(self.frame_iterations, self.momentum);
	}

	pub fn run_thread(
		&mut self,
		tx: Sender<UserEvent>,
		rx: Receiver<ControllerMessage>,
	) {
		self.controller = Some(rx);
		self.quit = false;
		let mut first_frame = true;
		loop {
			let start_time = Instant::now();
			self.poll();
			if self.quit || !self.is_attached() {
				break;
			}
			if self.forward_frames != 0 {
				if self.forward_frames > 0 {
					self.forward_frames -= 1;
				}
				if !first_frame {
					self.run();
				} else {
					first_frame = false;
				}
				let info = UpdateInfo {
					load: start_time.elapsed().as_secs_f32()
						/ self.frame_time.as_secs_f32(),
					iterations: self.iteration,
					node_len: self.nodes.len(),
					goal_len: self.goals.len(),
				};
				if tx.send(UserEvent::Update(self.pr_model(), info)).is_err() {
					eprintln!("INFO: update receiver closed");
					break;
				}
			}
			let dt = start_time.elapsed();
			if dt < self.frame_time {
				std::thread::sleep(self.frame_time - dt);
			}
		}
		self.detach();
	}
}
