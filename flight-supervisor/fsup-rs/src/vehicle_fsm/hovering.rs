use super::{Flying, FsmState, Hovering, Landing};
use crate::{silprintln, Fsup};
use shared::{
    fsup_hal::{ObstacleInterrupt, RangeSample},
    ControllerState,
};

impl<'f> ControllerState<FsmState, Fsup<'f>, RangeSample> for Hovering {
    fn update(
        &mut self,
        fsup: &mut Fsup<'f>,
        _dt: f32,
        _sample: &RangeSample,
    ) -> Option<FsmState> {
        if fsup.land_flag {
            return Some(Landing::new());
        }

        // Hold position briefly to stabilize before the outbound leg.
        if fsup.clock.now_ms() >= fsup.hover_deadline_ms {
            silprintln!("FSUP: outbound leg started at {} s", fsup.clock.now_s());
            return Some(Flying::new());
        }

        None
    }

    fn enter_state(&mut self, fsup: &mut Fsup<'f>) {
        fsup.pending_interrupt = ObstacleInterrupt::None;
        fsup.hover_deadline_ms = fsup.clock.now_ms() + fsup.config.hover_hold_ms;
    }

    fn exit_state(&mut self, _fsup: &mut Fsup<'f>) {
        // Nothing
    }
}

impl Hovering {
    pub fn new() -> FsmState {
        FsmState::Hovering(Self {})
    }
}
