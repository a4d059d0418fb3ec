use super::{FsmState, TakingOff, Unlocked};
use crate::{silprintln, Fsup};
use shared::{fsup_hal::RangeSample, ControllerState};

impl<'f> ControllerState<FsmState, Fsup<'f>, RangeSample> for Unlocked {
    fn update(
        &mut self,
        _fsup: &mut Fsup<'f>,
        _dt: f32,
        _sample: &RangeSample,
    ) -> Option<FsmState> {
        Some(TakingOff::new())
    }

    fn enter_state(&mut self, _fsup: &mut Fsup<'f>) {
        silprintln!("FSUP: unlocked");
    }

    fn exit_state(&mut self, _fsup: &mut Fsup<'f>) {
        // Nothing
    }
}

impl Unlocked {
    pub fn new() -> FsmState {
        FsmState::Unlocked(Self {})
    }
}
