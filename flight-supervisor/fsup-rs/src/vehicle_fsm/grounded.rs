use super::{FsmState, Grounded, Idle};
use crate::{silprintln, Fsup};
use shared::{fsup_hal::RangeSample, ControllerState};

impl<'f> ControllerState<FsmState, Fsup<'f>, RangeSample> for Grounded {
    fn update(
        &mut self,
        fsup: &mut Fsup<'f>,
        _dt: f32,
        _sample: &RangeSample,
    ) -> Option<FsmState> {
        fsup.land_flag = false;
        Some(Idle::new())
    }

    fn enter_state(&mut self, _fsup: &mut Fsup<'f>) {
        silprintln!("FSUP: grounded");
    }

    fn exit_state(&mut self, _fsup: &mut Fsup<'f>) {
        // Nothing
    }
}

impl Grounded {
    pub fn new() -> FsmState {
        FsmState::Grounded(Self {})
    }
}
