use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate frame pacing for the main loop
pub struct FrameClock {
    frame_duration: Duration,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        FrameClock {
            frame_duration: Duration::from_secs(1) / target_fps.max(1),
            last_frame: Instant::now(),
        }
    }

    /// Sleeps out the rest of the frame and returns the elapsed milliseconds.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last_frame.elapsed();
        if elapsed < self.frame_duration {
            thread::sleep(self.frame_duration - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;
        dt.as_secs_f32() * 1000.0
    }

    pub fn frame_ms(&self) -> f32 {
        self.frame_duration.as_secs_f32() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_waits_at_least_one_frame() {
        let mut clock = FrameClock::new(60);
        let dt = clock.tick();
        assert!(dt >= clock.frame_ms() - 0.5);
    }
}
