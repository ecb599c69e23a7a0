use std::time::Instant;

/// Monotonic seconds since a session started.
pub trait Clock {
    fn elapsed_secs(&self) -> f32;
}

/// Wall clock started when the session is built.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    start: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for SessionClock {
    fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}
