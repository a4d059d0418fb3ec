use super::{Braking, Flying, FsmState, Hovering};
use crate::{proximity, Fsup};
use shared::{fsup_hal::RangeSample, ControllerState};

impl<'f> ControllerState<FsmState, Fsup<'f>, RangeSample> for Flying {
    fn update(
        &mut self,
        fsup: &mut Fsup<'f>,
        _dt: f32,
        sample: &RangeSample,
    ) -> Option<FsmState> {
        // Outbound leg complete; land out.
        if fsup.driver.is_trajectory_finished() {
            fsup.land_flag = true;
            return Some(Hovering::new());
        }

        let interrupt = proximity::analyze(fsup.config.bubble_radius_mm, sample);
        if interrupt.is_triggered() {
            fsup.pending_interrupt = interrupt;
            return Some(Braking::new());
        }

        None
    }

    fn enter_state(&mut self, fsup: &mut Fsup<'f>) {
        let target = fsup.nav_target;
        let duration_s = fsup.config.cruise_duration_s;
        fsup.driver
            .go_to(target.x, target.y, 0.0, 0.0, duration_s, true, true);
    }

    fn exit_state(&mut self, _fsup: &mut Fsup<'f>) {
        // Nothing
    }
}

impl Flying {
    pub fn new() -> FsmState {
        FsmState::Flying(Self {})
    }
}
