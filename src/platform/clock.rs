//! Frame pacing for the native driver

use std::time::{Duration, Instant};

/// Caps the loop at a target frame rate and reports elapsed seconds
#[derive(Debug)]
pub struct FrameClock {
    frame_interval: Duration,
    last: Instant,
    realtime: bool,
}

impl FrameClock {
    /// Clock that sleeps out the remainder of each frame
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_interval: Self::interval_for(target_fps),
            last: Instant::now(),
            realtime: true,
        }
    }

    /// Clock that never sleeps and always reports exactly one frame interval
    pub fn fixed(target_fps: u32) -> Self {
        Self {
            realtime: false,
            ..Self::new(target_fps)
        }
    }

    fn interval_for(target_fps: u32) -> Duration {
        Duration::from_secs_f64(1.0 / target_fps.max(1) as f64)
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Block until the frame interval has elapsed; returns the frame `dt`
    pub fn tick(&mut self) -> f32 {
        if !self.realtime {
            return self.frame_interval.as_secs_f32();
        }

        let elapsed = self.last.elapsed();
        if elapsed < self.frame_interval {
            std::thread::sleep(self.frame_interval - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_interval() {
        let mut clock = FrameClock::fixed(50);
        assert!((clock.tick() - 0.02).abs() < 1e-6);
        assert!((clock.tick() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_realtime_clock_waits_at_least_one_interval() {
        let mut clock = FrameClock::new(200);
        let dt = clock.tick();
        assert!(dt >= 0.005 - 1e-4);
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let clock = FrameClock::fixed(0);
        assert_eq!(clock.frame_interval(), Duration::from_secs(1));
    }
}
