//! Proximity-interrupt analysis over the five-direction multiranger.

use shared::fsup_hal::{ObstacleInterrupt, RangeSample};

/// Checks every direction against the clearance bubble and picks the
/// interrupt to act on.
///
/// The checks run in a fixed order and each violation overwrites the
/// previous pick, so when several directions are inside the bubble at
/// once the last-evaluated one wins: left outranks backward outranks
/// right outranks forward outranks up. Callers depend on this
/// ordering; do not reorder the checks.
pub fn analyze(bubble_radius_mm: u16, sample: &RangeSample) -> ObstacleInterrupt {
    let mut interrupt = ObstacleInterrupt::None;

    if sample.up < bubble_radius_mm {
        interrupt = ObstacleInterrupt::Up;
    }
    if sample.front < bubble_radius_mm {
        interrupt = ObstacleInterrupt::Forward;
    }
    if sample.right < bubble_radius_mm {
        interrupt = ObstacleInterrupt::Right;
    }
    if sample.back < bubble_radius_mm {
        interrupt = ObstacleInterrupt::Backward;
    }
    if sample.left < bubble_radius_mm {
        interrupt = ObstacleInterrupt::Left;
    }

    interrupt
}
