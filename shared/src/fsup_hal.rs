use core::any::Any;

use mint::Vector2;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// Externally visible state of the flight supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum FlightState {
    Idle,
    LowUnlock,
    Unlocked,
    TakingOff,
    Hovering,
    Flying,
    Braking,
    Interrupted,
    Landing,
    Grounded,
    Stopping,
}

/// Which range sensor tripped the clearance bubble, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum ObstacleInterrupt {
    None,
    Forward,
    Backward,
    Left,
    Right,
    Up,
}

impl ObstacleInterrupt {
    pub fn is_triggered(&self) -> bool {
        !matches!(self, ObstacleInterrupt::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumCountMacro, EnumIter)]
pub enum RangeDirection {
    Up,
    Front,
    Right,
    Back,
    Left,
}

/// One tick's worth of multiranger readings, in millimeters.
/// A zero reading means invalid/out-of-range, not "touching".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSample {
    pub up: u16,
    pub front: u16,
    pub right: u16,
    pub back: u16,
    pub left: u16,
}

impl RangeSample {
    pub fn get(&self, direction: RangeDirection) -> u16 {
        match direction {
            RangeDirection::Up => self.up,
            RangeDirection::Front => self.front,
            RangeDirection::Right => self.right,
            RangeDirection::Back => self.back,
            RangeDirection::Left => self.left,
        }
    }
}

/// Per-flight configuration. Fixed once a flight has started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FsupConfig {
    pub takeoff_height_m: f32,
    pub takeoff_duration_s: f32,
    pub land_duration_s: f32,
    pub cruise_duration_s: f32,
    pub nominal_velocity_mps: f32,
    pub bubble_radius_mm: u16,
    pub arm_threshold_mm: u16,
    pub release_threshold_mm: u16,
    pub hover_hold_ms: u64,
    pub nav_target: Vector2<f32>,
    pub telemetry_rate_s: f32,
}

impl FsupConfig {
    pub const fn default() -> Self {
        Self {
            takeoff_height_m: 1.1,
            takeoff_duration_s: 1.0,
            land_duration_s: 1.5,
            cruise_duration_s: 2.0,
            nominal_velocity_mps: 1.0,
            bubble_radius_mm: 50,
            arm_threshold_mm: 100,
            release_threshold_mm: 300,
            hover_hold_ms: 1000,
            nav_target: Vector2 { x: 2.0, y: 0.0 },
            telemetry_rate_s: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FsupTelemetryFrame {
    pub timestamp: u64,
    pub flight_state: FlightState,
    pub pending_interrupt: ObstacleInterrupt,
    pub ranges: RangeSample,
    pub brake_factor: f32,
    pub land_flag: bool,
}

/// High-level trajectory commander. Commands are fire-and-forget;
/// completion is polled through `is_trajectory_finished`. Issuing a
/// new command supersedes any in-flight one.
pub trait FlightCommandDriver {
    fn takeoff(&mut self, height_m: f32, duration_s: f32);
    #[allow(clippy::too_many_arguments)]
    fn go_to(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        yaw: f32,
        duration_s: f32,
        relative: bool,
        linear_heading: bool,
    );
    fn land(&mut self, height_m: f32, duration_s: f32);
    fn disable_trajectory(&mut self);
    fn is_trajectory_finished(&self) -> bool;

    fn as_mut_any(&mut self) -> &mut dyn Any;
}

pub trait RangeArray {
    /// Latest distance reading in millimeters. Zero means
    /// invalid/out-of-range.
    fn read(&self, direction: RangeDirection) -> u16;

    fn sample(&self) -> RangeSample {
        RangeSample {
            up: self.read(RangeDirection::Up),
            front: self.read(RangeDirection::Front),
            right: self.read(RangeDirection::Right),
            back: self.read(RangeDirection::Back),
            left: self.read(RangeDirection::Left),
        }
    }

    fn as_mut_any(&mut self) -> &mut dyn Any;
}

pub trait Clock {
    /// Monotonic, non-decreasing milliseconds.
    fn now_ms(&self) -> u64;

    fn now_s(&self) -> u64 {
        self.now_ms() / 1000
    }

    fn as_mut_any(&mut self) -> &mut dyn Any;
}
