use fsup_rs::Fsup;
use shared::fsup_hal::{FlightState, FsupTelemetryFrame, ObstacleInterrupt, RangeDirection};
use shared::fsup_mock::{ClockMock, FlightCommandMock, IssuedCommand, RangeArrayMock};
use shared::{EventLogger, RingEventLogger, CONTROL_LOOP_PERIOD_MS};

const DT: f32 = CONTROL_LOOP_PERIOD_MS as f32 / 1000.0;

type TelemetryRing = RingEventLogger<FsupTelemetryFrame, 4096>;

fn fixture_mocks() -> (FlightCommandMock, RangeArrayMock, ClockMock, TelemetryRing) {
    let mut telemetry = TelemetryRing::new();
    telemetry.set_logging_enabled(true);

    (
        FlightCommandMock::new(),
        RangeArrayMock::new(),
        ClockMock::new(),
        telemetry,
    )
}

fn tick(fsup: &mut Fsup, ticks: u32) {
    for _ in 0..ticks {
        fsup.update(DT);
        clock(fsup).advance_ms(CONTROL_LOOP_PERIOD_MS);
    }
}

fn driver<'a>(fsup: &'a mut Fsup) -> &'a mut FlightCommandMock {
    fsup.driver
        .as_mut_any()
        .downcast_mut()
        .expect("driver mock")
}

fn ranges<'a>(fsup: &'a mut Fsup) -> &'a mut RangeArrayMock {
    fsup.ranges
        .as_mut_any()
        .downcast_mut()
        .expect("range mock")
}

fn clock<'a>(fsup: &'a mut Fsup) -> &'a mut ClockMock {
    fsup.clock.as_mut_any().downcast_mut().expect("clock mock")
}

/// Walks the supervisor from Idle to Flying: arm gesture, release,
/// takeoff, stabilization hold, outbound go-to.
fn fly_out(fsup: &mut Fsup) {
    ranges(fsup).set(RangeDirection::Up, 50);
    tick(fsup, 1);
    ranges(fsup).set(RangeDirection::Up, 400);
    tick(fsup, 2);
    assert_eq!(fsup.flight_state(), FlightState::TakingOff);

    driver(fsup).set_trajectory_finished(true);
    tick(fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Hovering);

    // Ride out the stabilization hold.
    tick(fsup, 101);
    assert_eq!(fsup.flight_state(), FlightState::Flying);
    assert!(matches!(
        driver(fsup).last_command(),
        Some(IssuedCommand::GoTo { .. })
    ));
}

#[test]
fn gesture_walk_arms_and_unlocks() {
    let (mut cmd, mut rng, mut clk, mut tel) = fixture_mocks();
    let mut fsup = Fsup::new(&mut cmd, &mut rng, &mut clk, &mut tel);

    assert_eq!(fsup.flight_state(), FlightState::Idle);

    // Nothing above the craft: stays idle.
    tick(&mut fsup, 5);
    assert_eq!(fsup.flight_state(), FlightState::Idle);

    // Hand placed close above.
    ranges(&mut fsup).set(RangeDirection::Up, 50);
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::LowUnlock);

    // Inside the hysteresis band: neither armed nor released.
    ranges(&mut fsup).set(RangeDirection::Up, 250);
    tick(&mut fsup, 3);
    assert_eq!(fsup.flight_state(), FlightState::LowUnlock);

    // Hand withdrawn.
    ranges(&mut fsup).set(RangeDirection::Up, 400);
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Unlocked);

    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::TakingOff);
}

#[test]
fn zero_up_reading_never_arms() {
    let (mut cmd, mut rng, mut clk, mut tel) = fixture_mocks();
    let mut fsup = Fsup::new(&mut cmd, &mut rng, &mut clk, &mut tel);

    ranges(&mut fsup).set(RangeDirection::Up, 0);
    tick(&mut fsup, 10);
    assert_eq!(fsup.flight_state(), FlightState::Idle);
}

#[test]
fn takeoff_command_issued_exactly_once_across_held_ticks() {
    let (mut cmd, mut rng, mut clk, mut tel) = fixture_mocks();
    let mut fsup = Fsup::new(&mut cmd, &mut rng, &mut clk, &mut tel);

    ranges(&mut fsup).set(RangeDirection::Up, 50);
    tick(&mut fsup, 1);
    ranges(&mut fsup).set(RangeDirection::Up, 400);
    tick(&mut fsup, 2);
    assert_eq!(fsup.flight_state(), FlightState::TakingOff);

    // Trajectory never finishes; the takeoff must not be re-issued.
    tick(&mut fsup, 20);
    assert_eq!(fsup.flight_state(), FlightState::TakingOff);
    assert_eq!(driver(&mut fsup).num_commands(), 1);
    assert_eq!(
        driver(&mut fsup).command(0),
        Some(IssuedCommand::Takeoff {
            height_m: 1.1,
            duration_s: 1.0
        })
    );
}

#[test]
fn nominal_mission_lands_out_and_returns_to_idle() {
    let (mut cmd, mut rng, mut clk, mut tel) = fixture_mocks();
    let mut fsup = Fsup::new(&mut cmd, &mut rng, &mut clk, &mut tel);

    fly_out(&mut fsup);

    // Outbound leg completes without obstacles.
    driver(&mut fsup).set_trajectory_finished(true);
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Hovering);

    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Landing);
    assert!(matches!(
        driver(&mut fsup).last_command(),
        Some(IssuedCommand::Land { .. })
    ));

    // Held in Landing until touchdown; land issued exactly once.
    let commands_before = driver(&mut fsup).num_commands();
    tick(&mut fsup, 10);
    assert_eq!(fsup.flight_state(), FlightState::Landing);
    assert_eq!(driver(&mut fsup).num_commands(), commands_before);

    driver(&mut fsup).set_trajectory_finished(true);
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Grounded);

    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Idle);
    assert!(!fsup.land_flag);
}

#[test]
fn frontal_obstacle_brakes_then_lands_out() {
    let (mut cmd, mut rng, mut clk, mut tel) = fixture_mocks();
    let mut fsup = Fsup::new(&mut cmd, &mut rng, &mut clk, &mut tel);

    fly_out(&mut fsup);
    driver(&mut fsup).clear_commands();

    ranges(&mut fsup).set(RangeDirection::Front, 10);
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Braking);
    assert_eq!(fsup.pending_interrupt, ObstacleInterrupt::Forward);

    // Four ramp ticks: disable, then re-plans at factors 0.75/0.5/0.25.
    tick(&mut fsup, 4);
    assert_eq!(fsup.flight_state(), FlightState::Braking);
    assert_eq!(
        driver(&mut fsup).command(0),
        Some(IssuedCommand::DisableTrajectory)
    );
    assert_eq!(driver(&mut fsup).num_commands(), 4);

    let expected_durations = [2.0f32 / 0.75, 2.0 / 0.5, 2.0 / 0.25];
    for (index, expected) in expected_durations.iter().enumerate() {
        match driver(&mut fsup).command(index + 1) {
            Some(IssuedCommand::GoTo { duration_s, .. }) => {
                assert!((duration_s - expected).abs() < 1e-5);
            }
            other => panic!("expected go_to at {}, got {:?}", index + 1, other),
        }
    }

    // Final slow trajectory completes; braking resolves.
    driver(&mut fsup).set_trajectory_finished(true);
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Interrupted);

    // Lateral interrupts get a telemetry-only response, then land out.
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Hovering);
    assert_eq!(fsup.pending_interrupt, ObstacleInterrupt::None);
    assert!(fsup.land_flag);

    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Landing);

    driver(&mut fsup).set_trajectory_finished(true);
    tick(&mut fsup, 2);
    assert_eq!(fsup.flight_state(), FlightState::Idle);
    assert!(!fsup.land_flag);
}

#[test]
fn right_obstacle_halts_then_lands_out() {
    let (mut cmd, mut rng, mut clk, mut tel) = fixture_mocks();
    let mut fsup = Fsup::new(&mut cmd, &mut rng, &mut clk, &mut tel);

    fly_out(&mut fsup);

    ranges(&mut fsup).set(RangeDirection::Right, 20);
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Braking);
    assert_eq!(fsup.pending_interrupt, ObstacleInterrupt::Right);

    tick(&mut fsup, 4);
    driver(&mut fsup).set_trajectory_finished(true);
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Interrupted);

    // Side obstacles get the halt-in-place response and land out.
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Hovering);
    assert_eq!(fsup.pending_interrupt, ObstacleInterrupt::None);
    assert!(fsup.land_flag);
}

#[test]
fn ceiling_interrupt_takes_emergency_land_path() {
    let (mut cmd, mut rng, mut clk, mut tel) = fixture_mocks();
    let mut fsup = Fsup::new(&mut cmd, &mut rng, &mut clk, &mut tel);

    fly_out(&mut fsup);

    ranges(&mut fsup).set(RangeDirection::Up, 10);
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Braking);
    assert_eq!(fsup.pending_interrupt, ObstacleInterrupt::Up);

    tick(&mut fsup, 4);
    driver(&mut fsup).set_trajectory_finished(true);
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Interrupted);

    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Hovering);
    assert!(fsup.land_flag);

    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Landing);
}

#[test]
fn left_obstacle_outranks_all_others() {
    let (mut cmd, mut rng, mut clk, mut tel) = fixture_mocks();
    let mut fsup = Fsup::new(&mut cmd, &mut rng, &mut clk, &mut tel);

    fly_out(&mut fsup);

    // Up is the closer obstacle but left is evaluated last.
    ranges(&mut fsup).set(RangeDirection::Up, 40);
    ranges(&mut fsup).set(RangeDirection::Left, 30);
    tick(&mut fsup, 1);

    assert_eq!(fsup.flight_state(), FlightState::Braking);
    assert_eq!(fsup.pending_interrupt, ObstacleInterrupt::Left);
}

#[test]
fn interrupt_only_pending_while_reacting() {
    let (mut cmd, mut rng, mut clk, mut tel) = fixture_mocks();
    let mut fsup = Fsup::new(&mut cmd, &mut rng, &mut clk, &mut tel);

    let reacting = [
        FlightState::Flying,
        FlightState::Braking,
        FlightState::Interrupted,
    ];

    let mut check = |fsup: &mut Fsup| {
        let state = fsup.flight_state();
        if fsup.pending_interrupt.is_triggered() {
            assert!(
                reacting.contains(&state),
                "interrupt pending in {:?}",
                state
            );
        }
    };

    fly_out(&mut fsup);
    check(&mut fsup);

    ranges(&mut fsup).set(RangeDirection::Back, 20);
    for _ in 0..6 {
        tick(&mut fsup, 1);
        check(&mut fsup);
    }

    // Obstacle clears while the craft settles and lands out.
    ranges(&mut fsup).set_all_clear();
    driver(&mut fsup).set_trajectory_finished(true);
    for _ in 0..8 {
        tick(&mut fsup, 1);
        check(&mut fsup);
        driver(&mut fsup).set_trajectory_finished(true);
    }

    assert_eq!(fsup.flight_state(), FlightState::Idle);
}

#[test]
fn wider_bubble_from_reconfiguration_is_honored() {
    let (mut cmd, mut rng, mut clk, mut tel) = fixture_mocks();
    let mut fsup = Fsup::new(&mut cmd, &mut rng, &mut clk, &mut tel);

    let mut config = fsup.config;
    config.bubble_radius_mm = 100;
    fsup.configure(config);

    fly_out(&mut fsup);

    // 60 mm clears the stock 50 mm bubble but not the widened one.
    ranges(&mut fsup).set(RangeDirection::Front, 60);
    tick(&mut fsup, 1);
    assert_eq!(fsup.flight_state(), FlightState::Braking);
    assert_eq!(fsup.pending_interrupt, ObstacleInterrupt::Forward);
}

#[test]
fn mission_emits_telemetry_frames() {
    let (mut cmd, mut rng, mut clk, mut tel) = fixture_mocks();

    {
        let mut fsup = Fsup::new(&mut cmd, &mut rng, &mut clk, &mut tel);
        fly_out(&mut fsup);
    }

    // Transition frames plus the periodic cadence over the hold.
    assert!(tel.events_logged() > 10);
    assert!(tel.bytes_logged() > 0);
}
