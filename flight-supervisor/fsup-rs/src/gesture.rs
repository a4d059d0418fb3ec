//! Hand-gesture arming over the up-facing range sensor.
//!
//! Arming wants "something held very close above"; confirmation wants
//! it withdrawn well clear. The gap between the two thresholds is a
//! hysteresis band so a hand hovering near one edge cannot chatter
//! the gate.

/// True when something sits closer than `arm_threshold_mm` above the
/// craft. A zero reading is a sensor fault or out-of-range sentinel
/// and never arms.
pub fn armed(up_mm: u16, arm_threshold_mm: u16) -> bool {
    up_mm > 0 && up_mm < arm_threshold_mm
}

/// True once the up sensor reads past `release_threshold_mm`,
/// confirming the hand has been withdrawn.
pub fn released(up_mm: u16, release_threshold_mm: u16) -> bool {
    up_mm > release_threshold_mm
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::fsup_hal::FsupConfig;

    #[test]
    fn armed_only_inside_low_band() {
        let arm = FsupConfig::default().arm_threshold_mm;

        assert!(!armed(0, arm));
        assert!(armed(1, arm));
        assert!(armed(50, arm));
        assert!(armed(99, arm));
        assert!(!armed(100, arm));
        assert!(!armed(150, arm));
        assert!(!armed(400, arm));
    }

    #[test]
    fn released_only_above_high_threshold() {
        let release = FsupConfig::default().release_threshold_mm;

        assert!(!released(0, release));
        assert!(!released(150, release));
        assert!(!released(300, release));
        assert!(released(301, release));
        assert!(released(2000, release));
    }

    #[test]
    fn hysteresis_band_satisfies_neither_predicate() {
        let config = FsupConfig::default();

        for up_mm in [100u16, 200, 300] {
            assert!(!armed(up_mm, config.arm_threshold_mm));
            assert!(!released(up_mm, config.release_threshold_mm));
        }
    }
}
