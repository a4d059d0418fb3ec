// Define no_std except for testing and sil feature
#![cfg_attr(not(any(test, feature = "sil")), no_std)]
#![deny(unsafe_code)]

pub mod braking;
pub mod gesture;
pub mod proximity;
pub mod vehicle_fsm;

#[cfg(any(test, feature = "sil"))]
macro_rules! silprintln {
    () => { println!() };
    ($($arg:tt)*) => { println!($($arg)*) };
}

#[cfg(not(any(test, feature = "sil")))]
macro_rules! silprintln {
    () => {};
    ($($arg:tt)*) => {};
}

pub(crate) use silprintln;

use braking::BrakeController;
use mint::Vector2;
use shared::{
    fsup_hal::{
        Clock, FlightCommandDriver, FlightState, FsupConfig, FsupTelemetryFrame,
        ObstacleInterrupt, RangeArray, RangeSample,
    },
    ControllerEntity, EventLogger,
};
use vehicle_fsm::FsmState;

pub struct Fsup<'a> {
    pub config: FsupConfig,
    pub driver: &'a mut dyn FlightCommandDriver,
    pub ranges: &'a mut dyn RangeArray,
    pub clock: &'a mut dyn Clock,
    pub telemetry: &'a mut dyn EventLogger<FsupTelemetryFrame>,

    pub pending_interrupt: ObstacleInterrupt,
    pub nav_target: Vector2<f32>,
    pub brake: BrakeController,
    pub land_flag: bool,
    pub hover_deadline_ms: u64,

    vehicle: Option<ControllerEntity<FsmState, Fsup<'a>, FlightState, RangeSample>>,
    last_sample: RangeSample,
    time_since_last_telemetry: f32,
}

impl<'a> Fsup<'a> {
    pub fn new(
        driver: &'a mut dyn FlightCommandDriver,
        ranges: &'a mut dyn RangeArray,
        clock: &'a mut dyn Clock,
        telemetry: &'a mut dyn EventLogger<FsupTelemetryFrame>,
    ) -> Self {
        let config = FsupConfig::default();

        let mut fsup = Self {
            config,
            driver,
            ranges,
            clock,
            telemetry,
            pending_interrupt: ObstacleInterrupt::None,
            nav_target: config.nav_target,
            brake: BrakeController::new(),
            land_flag: false,
            hover_deadline_ms: 0,
            vehicle: None,
            last_sample: RangeSample::default(),
            time_since_last_telemetry: 0.0,
        };

        fsup.vehicle = Some(ControllerEntity::new(
            &mut fsup,
            vehicle_fsm::Idle::new(),
        ));

        fsup
    }

    /// One control-loop tick: sample all five ranges, advance the
    /// state machine once, emit telemetry. The caller owns the fixed
    /// tick cadence.
    pub fn update(&mut self, dt: f32) {
        let sample = self.ranges.sample();
        self.last_sample = sample;

        let state_before = self.flight_state();

        if let Some(mut vehicle) = self.vehicle.take() {
            vehicle.update(self, dt, &sample);
            self.vehicle = Some(vehicle);
        }

        let state_after = self.flight_state();
        if state_after != state_before {
            silprintln!("FSUP: {:?} -> {:?}", state_before, state_after);
            let frame = self.generate_telemetry_frame();
            self.telemetry.log_event(&frame);
        }

        self.time_since_last_telemetry += dt;
        if self.time_since_last_telemetry >= self.config.telemetry_rate_s {
            self.time_since_last_telemetry = 0.0;
            let frame = self.generate_telemetry_frame();
            self.telemetry.log_event(&frame);
        }
    }

    pub fn flight_state(&self) -> FlightState {
        self.vehicle
            .as_ref()
            .map(|fsm| fsm.hal_state())
            .unwrap_or(FlightState::Idle)
    }

    pub fn generate_telemetry_frame(&self) -> FsupTelemetryFrame {
        FsupTelemetryFrame {
            timestamp: self.clock.now_ms(),
            flight_state: self.flight_state(),
            pending_interrupt: self.pending_interrupt,
            ranges: self.last_sample,
            brake_factor: self.brake.factor(),
            land_flag: self.land_flag,
        }
    }

    /// Swap in a new flight profile between flights. Not meant to be
    /// called while airborne.
    pub fn configure(&mut self, config: FsupConfig) {
        self.nav_target = config.nav_target;
        self.config = config;
    }
}
