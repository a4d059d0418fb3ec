use core::marker::PhantomData;

use postcard::to_slice;
use serde::Serialize;

pub const SERIALIZE_BUFFER_SIZE: usize = 128;

pub trait EventLogger<T> {
    fn log_event(&mut self, event: &T);
    fn events_logged(&self) -> u32;
    fn bytes_logged(&self) -> u32;
    fn set_logging_enabled(&mut self, enabled: bool);
}

/// Serializes events into a fixed ring buffer as length-prefixed
/// postcard records. Oldest bytes are overwritten once the ring wraps.
pub struct RingEventLogger<T, const N: usize> {
    buffer: [u8; N],
    head: usize,
    logging_enabled: bool,
    bytes_logged: u32,
    events_logged: u32,
    _marker: PhantomData<T>,
}

impl<T, const N: usize> EventLogger<T> for RingEventLogger<T, N>
where
    T: Serialize,
{
    fn log_event(&mut self, event: &T) {
        if !self.logging_enabled {
            return;
        }

        let mut scratch = [0u8; SERIALIZE_BUFFER_SIZE];
        let serialized = to_slice(event, &mut scratch).expect("Failed to serialize event");

        self.put_byte(serialized.len() as u8);
        for byte in serialized.iter() {
            self.put_byte(*byte);
        }

        self.bytes_logged += (serialized.len() + 1) as u32;
        self.events_logged += 1;
    }

    fn events_logged(&self) -> u32 {
        self.events_logged
    }

    fn bytes_logged(&self) -> u32 {
        self.bytes_logged
    }

    fn set_logging_enabled(&mut self, enabled: bool) {
        self.logging_enabled = enabled;
    }
}

impl<T, const N: usize> RingEventLogger<T, N>
where
    T: Serialize,
{
    pub fn new() -> Self {
        Self {
            buffer: [0u8; N],
            head: 0,
            logging_enabled: false,
            bytes_logged: 0,
            events_logged: 0,
            _marker: PhantomData,
        }
    }

    fn put_byte(&mut self, byte: u8) {
        self.buffer[self.head] = byte;
        self.head = (self.head + 1) % N;
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }
}

impl<T, const N: usize> Default for RingEventLogger<T, N>
where
    T: Serialize,
{
    fn default() -> Self {
        Self::new()
    }
}
