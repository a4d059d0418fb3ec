use super::{FsmState, Idle, LowUnlock};
use crate::{gesture, silprintln, Fsup};
use shared::{fsup_hal::RangeSample, ControllerState};

impl<'f> ControllerState<FsmState, Fsup<'f>, RangeSample> for Idle {
    fn update(
        &mut self,
        fsup: &mut Fsup<'f>,
        _dt: f32,
        sample: &RangeSample,
    ) -> Option<FsmState> {
        if gesture::armed(sample.up, fsup.config.arm_threshold_mm) {
            silprintln!("FSUP: armed, waiting for hand to be removed");
            return Some(LowUnlock::new());
        }

        None
    }

    fn enter_state(&mut self, _fsup: &mut Fsup<'f>) {
        // Nothing
    }

    fn exit_state(&mut self, _fsup: &mut Fsup<'f>) {
        // Nothing
    }
}

impl Idle {
    pub fn new() -> FsmState {
        FsmState::Idle(Self {})
    }
}
