use crate::interaction::PointerEvent;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	Pointer(PointerEvent),
	SetMomentum(bool),
	Reset,
	Quit,
}
