use core::any::Any;

use crate::fsup_hal::{Clock, FlightCommandDriver, RangeArray, RangeDirection, RangeSample};

pub const COMMAND_LOG_SIZE: usize = 32;

/// Readings the mock reports when nothing has been scripted; far
/// enough to stay outside every threshold in play.
pub const CLEAR_RANGE_MM: u16 = 2000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IssuedCommand {
    Takeoff {
        height_m: f32,
        duration_s: f32,
    },
    GoTo {
        x: f32,
        y: f32,
        z: f32,
        yaw: f32,
        duration_s: f32,
        relative: bool,
        linear_heading: bool,
    },
    Land {
        height_m: f32,
        duration_s: f32,
    },
    DisableTrajectory,
}

/// Scripted trajectory commander. Records every issued command and
/// reports a test-controlled trajectory-finished flag. Issuing a new
/// motion command clears the flag, matching the real commander where
/// a fresh trajectory supersedes the finished one.
#[derive(Debug)]
pub struct FlightCommandMock {
    commands: [Option<IssuedCommand>; COMMAND_LOG_SIZE],
    num_commands: usize,
    trajectory_finished: bool,
}

impl FlightCommandDriver for FlightCommandMock {
    fn takeoff(&mut self, height_m: f32, duration_s: f32) {
        self.push(IssuedCommand::Takeoff {
            height_m,
            duration_s,
        });
        self.trajectory_finished = false;
    }

    fn go_to(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        yaw: f32,
        duration_s: f32,
        relative: bool,
        linear_heading: bool,
    ) {
        self.push(IssuedCommand::GoTo {
            x,
            y,
            z,
            yaw,
            duration_s,
            relative,
            linear_heading,
        });
        self.trajectory_finished = false;
    }

    fn land(&mut self, height_m: f32, duration_s: f32) {
        self.push(IssuedCommand::Land {
            height_m,
            duration_s,
        });
        self.trajectory_finished = false;
    }

    fn disable_trajectory(&mut self) {
        self.push(IssuedCommand::DisableTrajectory);
    }

    fn is_trajectory_finished(&self) -> bool {
        self.trajectory_finished
    }

    fn as_mut_any(&mut self) -> &mut dyn Any {
        self
    }
}

impl FlightCommandMock {
    pub fn new() -> Self {
        Self {
            commands: [None; COMMAND_LOG_SIZE],
            num_commands: 0,
            trajectory_finished: false,
        }
    }

    fn push(&mut self, command: IssuedCommand) {
        if self.num_commands < COMMAND_LOG_SIZE {
            self.commands[self.num_commands] = Some(command);
            self.num_commands += 1;
        }
    }

    pub fn set_trajectory_finished(&mut self, finished: bool) {
        self.trajectory_finished = finished;
    }

    pub fn num_commands(&self) -> usize {
        self.num_commands
    }

    pub fn command(&self, index: usize) -> Option<IssuedCommand> {
        self.commands.get(index).copied().flatten()
    }

    pub fn last_command(&self) -> Option<IssuedCommand> {
        if self.num_commands == 0 {
            return None;
        }

        self.commands[self.num_commands - 1]
    }

    pub fn clear_commands(&mut self) {
        self.commands = [None; COMMAND_LOG_SIZE];
        self.num_commands = 0;
    }
}

impl Default for FlightCommandMock {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct RangeArrayMock {
    sample: RangeSample,
}

impl RangeArray for RangeArrayMock {
    fn read(&self, direction: RangeDirection) -> u16 {
        self.sample.get(direction)
    }

    fn as_mut_any(&mut self) -> &mut dyn Any {
        self
    }
}

impl RangeArrayMock {
    pub fn new() -> Self {
        Self {
            sample: RangeSample {
                up: CLEAR_RANGE_MM,
                front: CLEAR_RANGE_MM,
                right: CLEAR_RANGE_MM,
                back: CLEAR_RANGE_MM,
                left: CLEAR_RANGE_MM,
            },
        }
    }

    pub fn set(&mut self, direction: RangeDirection, distance_mm: u16) {
        match direction {
            RangeDirection::Up => self.sample.up = distance_mm,
            RangeDirection::Front => self.sample.front = distance_mm,
            RangeDirection::Right => self.sample.right = distance_mm,
            RangeDirection::Back => self.sample.back = distance_mm,
            RangeDirection::Left => self.sample.left = distance_mm,
        }
    }

    pub fn set_all_clear(&mut self) {
        self.sample = RangeSample {
            up: CLEAR_RANGE_MM,
            front: CLEAR_RANGE_MM,
            right: CLEAR_RANGE_MM,
            back: CLEAR_RANGE_MM,
            left: CLEAR_RANGE_MM,
        };
    }
}

impl Default for RangeArrayMock {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct ClockMock {
    now_ms: u64,
}

impl Clock for ClockMock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn as_mut_any(&mut self) -> &mut dyn Any {
        self
    }
}

impl ClockMock {
    pub fn new() -> Self {
        Self { now_ms: 0 }
    }

    pub fn advance_ms(&mut self, delta_ms: u64) {
        self.now_ms += delta_ms;
    }
}

impl Default for ClockMock {
    fn default() -> Self {
        Self::new()
    }
}
