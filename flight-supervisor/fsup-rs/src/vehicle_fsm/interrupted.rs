use super::{FsmState, Hovering, Interrupted};
use crate::{silprintln, Fsup};
use shared::{
    fsup_hal::{ObstacleInterrupt, RangeSample},
    ControllerState,
};

impl<'f> ControllerState<FsmState, Fsup<'f>, RangeSample> for Interrupted {
    fn update(
        &mut self,
        fsup: &mut Fsup<'f>,
        _dt: f32,
        _sample: &RangeSample,
    ) -> Option<FsmState> {
        // Ceiling interrupt: land immediately, no response handling.
        if fsup.pending_interrupt == ObstacleInterrupt::Up {
            silprintln!("FSUP: ceiling interrupt, emergency land");
            fsup.land_flag = true;
            return Some(Hovering::new());
        }

        respond(fsup.pending_interrupt);

        if fsup.pending_interrupt.is_triggered() {
            fsup.land_flag = true;
            return Some(Hovering::new());
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

impl Interrupted {
    pub fn new() -> FsmState {
        FsmState::Interrupted(Self {})
    }
}

// No corrective maneuver is defined for lateral obstacles; the craft
// halts in place and the response is telemetry only.
fn respond(interrupt: ObstacleInterrupt) {
    match interrupt {
        ObstacleInterrupt::Forward => {
            silprintln!("FSUP: obstacle ahead");
        }
        ObstacleInterrupt::Backward => {
            silprintln!("FSUP: obstacle behind");
        }
        ObstacleInterrupt::Left => {
            silprintln!("FSUP: obstacle to the left");
        }
        ObstacleInterrupt::Right => {
            silprintln!("FSUP: obstacle to the right");
        }
        ObstacleInterrupt::None | ObstacleInterrupt::Up => {}
    }
}
