//! The tick-driven flight state machine. One module per state; entry
//! actions live in `enter_state` and therefore fire exactly once per
//! state visit.

use crate::Fsup;
use shared::{
    fsup_hal::{FlightState, RangeSample},
    ControllerFsm, ControllerState,
};

mod braking;
mod flying;
mod grounded;
mod hovering;
mod idle;
mod interrupted;
mod landing;
mod low_unlock;
mod stopping;
mod taking_off;
mod unlocked;

#[derive(Debug)]
pub struct Idle;

#[derive(Debug)]
pub struct LowUnlock;

#[derive(Debug)]
pub struct Unlocked;

#[derive(Debug)]
pub struct TakingOff;

#[derive(Debug)]
pub struct Hovering;

#[derive(Debug)]
pub struct Flying;

#[derive(Debug)]
pub struct Braking;

#[derive(Debug)]
pub struct Interrupted;

#[derive(Debug)]
pub struct Landing;

#[derive(Debug)]
pub struct Grounded;

/// Reserved emergency-stop state. Nothing transitions into or out of
/// it; it must stay a no-op if ever entered.
#[derive(Debug)]
pub struct Stopping;

#[derive(Debug)]
pub enum FsmState {
    Idle(Idle),
    LowUnlock(LowUnlock),
    Unlocked(Unlocked),
    TakingOff(TakingOff),
    Hovering(Hovering),
    Flying(Flying),
    Braking(Braking),
    Interrupted(Interrupted),
    Landing(Landing),
    Grounded(Grounded),
    Stopping(Stopping),
}

impl<'a> ControllerFsm<FsmState, Fsup<'a>, FlightState, RangeSample> for FsmState {
    fn to_controller_state(&mut self) -> &mut dyn ControllerState<FsmState, Fsup<'a>, RangeSample> {
        match self {
            FsmState::Idle(state) => state,
            FsmState::LowUnlock(state) => state,
            FsmState::Unlocked(state) => state,
            FsmState::TakingOff(state) => state,
            FsmState::Hovering(state) => state,
            FsmState::Flying(state) => state,
            FsmState::Braking(state) => state,
            FsmState::Interrupted(state) => state,
            FsmState::Landing(state) => state,
            FsmState::Grounded(state) => state,
            FsmState::Stopping(state) => state,
        }
    }

    fn hal_state(&self) -> FlightState {
        match self {
            FsmState::Idle(_) => FlightState::Idle,
            FsmState::LowUnlock(_) => FlightState::LowUnlock,
            FsmState::Unlocked(_) => FlightState::Unlocked,
            FsmState::TakingOff(_) => FlightState::TakingOff,
            FsmState::Hovering(_) => FlightState::Hovering,
            FsmState::Flying(_) => FlightState::Flying,
            FsmState::Braking(_) => FlightState::Braking,
            FsmState::Interrupted(_) => FlightState::Interrupted,
            FsmState::Landing(_) => FlightState::Landing,
            FsmState::Grounded(_) => FlightState::Grounded,
            FsmState::Stopping(_) => FlightState::Stopping,
        }
    }
}
