use std::{fmt::Display, time::Instant};

/// Wall-clock stopwatch feeding the report's timing fields.
pub struct Stopwatch {
    time: Instant,
    label: &'static str,
}

impl Stopwatch {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            time: Instant::now(),
        }
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn reset(&mut self) {
        self.time = Instant::now();
    }

    /// Elapsed time in seconds.
    pub fn seconds(&self) -> f64 {
        self.time.elapsed().as_secs_f64()
    }
}

impl Display for Stopwatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let duration = self.time.elapsed();

        if duration.as_secs() > 60 {
            write!(
                f,
                "{}: {:0>2}:{:0>2}min",
                self.label,
                duration.as_secs() / 60,
                duration.as_secs() % 60
            )
        } else {
            write!(f, "{}: {}ms", self.label, duration.as_millis())
        }
    }
}
