use super::{FsmState, Stopping};
use crate::Fsup;
use shared::{fsup_hal::RangeSample, ControllerState};

// Reserved emergency-stop path; no transitions are wired in.
impl<'f> ControllerState<FsmState, Fsup<'f>, RangeSample> for Stopping {
    fn update(
        &mut self,
        _fsup: &mut Fsup<'f>,
        _dt: f32,
        _sample: &RangeSample,
    ) -> Option<FsmState> {
        None
    }

    fn enter_state(&mut self, _fsup: &mut Fsup<'f>) {
        // Nothing
    }

    fn exit_state(&mut self, _fsup: &mut Fsup<'f>) {
        // Nothing
    }
}

impl Stopping {
    pub fn new() -> FsmState {
        FsmState::Stopping(Self {})
    }
}
