use crate::{config::InteractionConfig, error::InteractionError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterTarget {
    value: f64,
    fractional: bool,
}

impl CounterTarget {
    /// Parses a `data-target` value such as `42` or `3.5`.
    pub fn parse(raw: &str) -> Result<Self, InteractionError> {
        let value = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| InteractionError::InvalidCounterTarget(raw.to_string()))?;

        Ok(Self {
            value,
            fractional: value.fract() != 0.0,
        })
    }

    pub fn format(self, value: f64) -> String {
        if self.fractional {
            format!("{value:.2}")
        } else {
            format!("{:.0}", value.trunc())
        }
    }
}

/// Frames of a single counter climbing from zero to its target.
///
/// Every frame is the text to render; the last frame is always the exact target.
pub struct CounterAnimation {
    target: CounterTarget,
    total_steps: u64,
    step: u64,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, config: &InteractionConfig) -> Self {
        let frame_ms = config.counter_frame_ms.max(1);
        let total_steps = if target.value > 0.0 {
            config.counter_duration_ms.div_ceil(frame_ms).max(1)
        } else {
            1
        };

        Self {
            target,
            total_steps,
            step: 0,
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.total_steps {
            return None;
        }

        self.step += 1;
        if self.step == self.total_steps {
            return Some(self.target.format(self.target.value));
        }

        let current = self.target.value * self.step as f64 / self.total_steps as f64;
        Some(self.target.format(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total_steps - self.step).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Fires once, the first time the stats container is visible enough.
#[derive(Debug)]
pub struct StatsTrigger {
    threshold: f64,
    fired: bool,
}

impl StatsTrigger {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            threshold: config.stats_threshold,
            fired: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn on_visibility(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.fired || !is_intersecting || ratio < self.threshold {
            return false;
        }

        self.fired = true;
        true
    }
}
