use super::{Braking, FsmState, Interrupted};
use crate::Fsup;
use shared::{fsup_hal::RangeSample, ControllerState};

impl<'f> ControllerState<FsmState, Fsup<'f>, RangeSample> for Braking {
    fn update(
        &mut self,
        fsup: &mut Fsup<'f>,
        _dt: f32,
        _sample: &RangeSample,
    ) -> Option<FsmState> {
        let target = fsup.nav_target;
        let velocity = fsup.config.nominal_velocity_mps;

        if fsup.brake.step(fsup.driver, target, velocity) {
            return Some(Interrupted::new());
        }

        None
    }

    fn enter_state(&mut self, fsup: &mut Fsup<'f>) {
        fsup.brake.reset();
    }

    fn exit_state(&mut self, _fsup: &mut Fsup<'f>) {
        // Nothing
    }
}

impl Braking {
    pub fn new() -> FsmState {
        FsmState::Braking(Self {})
    }
}
