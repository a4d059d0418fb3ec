use super::{FsmState, LowUnlock, Unlocked};
use crate::{gesture, Fsup};
use shared::{fsup_hal::RangeSample, ControllerState};

impl<'f> ControllerState<FsmState, Fsup<'f>, RangeSample> for LowUnlock {
    fn update(
        &mut self,
        fsup: &mut Fsup<'f>,
        _dt: f32,
        sample: &RangeSample,
    ) -> Option<FsmState> {
        if gesture::released(sample.up, fsup.config.release_threshold_mm) {
            return Some(Unlocked::new());
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

impl LowUnlock {
    pub fn new() -> FsmState {
        FsmState::LowUnlock(Self {})
    }
}
