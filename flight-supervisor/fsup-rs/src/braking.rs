//! Velocity-ramped braking of an in-flight trajectory.
//!
//! Rather than cutting the trajectory dead, the controller cancels the
//! active plan and re-issues the same displacement with progressively
//! longer durations, shrinking the commanded velocity by a fixed step
//! each tick until the craft has effectively stopped.

use crate::silprintln;
use mint::Vector2;
use shared::fsup_hal::FlightCommandDriver;

/// Velocity factor reduction applied on every braking tick.
pub const BRAKE_STEP: f32 = 0.25;

/// Below this factor the ramp is considered fully decelerated.
pub const BRAKE_STOP_THRESHOLD: f32 = 0.1;

/// Floor for re-planned trajectory durations, guarding against a
/// degenerate (zero-displacement) target.
pub const MIN_BRAKE_DURATION_S: f32 = 0.125;

/// Ramp point at which the slower trajectory is re-issued even if the
/// commander already reports the previous one finished.
const REISSUE_CHECKPOINT: f32 = 0.75;

/// Tracks partial deceleration across ticks. The factor starts at 1.0
/// (full commanded speed) and is only meaningful during a braking
/// episode; `reset` must run before the episode starts.
#[derive(Debug)]
pub struct BrakeController {
    factor: f32,
}

impl BrakeController {
    pub fn new() -> Self {
        Self { factor: 1.0 }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn reset(&mut self) {
        self.factor = 1.0;
    }

    /// Advances the ramp by one tick. Returns true exactly once the
    /// factor has dropped below the stop threshold and the commander
    /// reports the final re-planned trajectory finished.
    pub fn step(
        &mut self,
        driver: &mut dyn FlightCommandDriver,
        target: Vector2<f32>,
        nominal_velocity_mps: f32,
    ) -> bool {
        if self.factor >= BRAKE_STOP_THRESHOLD {
            if libm::fabsf(self.factor - 1.0) < f32::EPSILON {
                driver.disable_trajectory();
                silprintln!("BRAKE: trajectory disabled");
            }

            self.factor -= BRAKE_STEP;
        }

        if self.factor < BRAKE_STOP_THRESHOLD {
            if driver.is_trajectory_finished() {
                silprintln!("BRAKE: brake achieved");
                return true;
            }
        } else if !driver.is_trajectory_finished()
            || libm::fabsf(self.factor - REISSUE_CHECKPOINT) < f32::EPSILON
        {
            let magnitude = nalgebra::Vector2::from(target).norm();
            let duration_s = if magnitude < f32::EPSILON {
                MIN_BRAKE_DURATION_S
            } else {
                let duration_s = magnitude / (nominal_velocity_mps * self.factor);
                if duration_s < MIN_BRAKE_DURATION_S {
                    MIN_BRAKE_DURATION_S
                } else {
                    duration_s
                }
            };

            silprintln!("BRAKE: velocity factor {}", self.factor);
            driver.go_to(target.x, target.y, 0.0, 0.0, duration_s, true, true);
        }

        false
    }
}

impl Default for BrakeController {
    fn default() -> Self {
        Self::new()
    }
}
