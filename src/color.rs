//! Row Colors
//!
//! Random display colors for new rows, drawn from an injectable source.

/// Uniform source of values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// `Math.random()` of the hosting browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Replays a fixed list of values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

const MAX_RGB: f64 = 16_777_215.0;

/// Sample a 24-bit color and format it as lower-case `#rrggbb`
pub fn random_hex_color(rng: &mut dyn RandomSource) -> String {
    let unit = rng.next_unit().clamp(0.0, 1.0);
    let rgb = (unit * MAX_RGB).floor() as u32;
    format!("#{:06x}", rgb)
}
