//! Frame timing

/// Turns absolute animation-frame timestamps into per-frame deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame; the next delta will be zero
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    /// Milliseconds since the previous timestamp (zero on the first frame)
    pub fn delta(&mut self, timestamp_ms: f64) -> f64 {
        let delta = match self.last_ms {
            Some(last) => timestamp_ms - last,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        delta
    }
}
