use super::{FsmState, Grounded, Landing};
use crate::{silprintln, Fsup};
use shared::{fsup_hal::RangeSample, ControllerState};

impl<'f> ControllerState<FsmState, Fsup<'f>, RangeSample> for Landing {
    fn update(
        &mut self,
        fsup: &mut Fsup<'f>,
        _dt: f32,
        _sample: &RangeSample,
    ) -> Option<FsmState> {
        if fsup.driver.is_trajectory_finished() {
            return Some(Grounded::new());
        }

        None
    }

    fn enter_state(&mut self, fsup: &mut Fsup<'f>) {
        silprintln!("FSUP: landing initiated at {} s", fsup.clock.now_s());
        let duration_s = fsup.config.land_duration_s;
        fsup.driver.land(0.0, duration_s);
    }

    fn exit_state(&mut self, _fsup: &mut Fsup<'f>) {
        // Nothing
    }
}

impl Landing {
    pub fn new() -> FsmState {
        FsmState::Landing(Self {})
    }
}
