use super::{FsmState, Hovering, TakingOff};
use crate::{silprintln, Fsup};
use shared::{fsup_hal::RangeSample, ControllerState};

impl<'f> ControllerState<FsmState, Fsup<'f>, RangeSample> for TakingOff {
    fn update(
        &mut self,
        fsup: &mut Fsup<'f>,
        _dt: f32,
        _sample: &RangeSample,
    ) -> Option<FsmState> {
        if fsup.driver.is_trajectory_finished() {
            silprintln!("FSUP: reached steady height at {} s", fsup.clock.now_s());
            return Some(Hovering::new());
        }

        None
    }

    fn enter_state(&mut self, fsup: &mut Fsup<'f>) {
        silprintln!("FSUP: takeoff initiated at {} s", fsup.clock.now_s());
        let height_m = fsup.config.takeoff_height_m;
        let duration_s = fsup.config.takeoff_duration_s;
        fsup.driver.takeoff(height_m, duration_s);
    }

    fn exit_state(&mut self, _fsup: &mut Fsup<'f>) {
        // Nothing
    }
}

impl TakingOff {
    pub fn new() -> FsmState {
        FsmState::TakingOff(Self {})
    }
}
