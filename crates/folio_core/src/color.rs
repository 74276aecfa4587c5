//! Deterministic placeholder colors.
//!
//! Colors come from a seeded linear congruential generator that is passed by
//! value: every draw returns the drawn value together with the advanced
//! generator. No global or time-based randomness is involved, so the same seed
//! and count always yield the same sequence.

const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Seed(pub u64);

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: Seed) -> Self {
        Self { state: seed.0 }
    }

    pub fn state(&self) -> u64 {
        self.state
    }

    /// Upper 32 bits of the next state; the low bits of an LCG cycle too quickly.
    pub fn next_u32(self) -> (u32, Lcg) {
        let state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        ((state >> 32) as u32, Lcg { state })
    }

    /// Uniform draw in `[0, 1)`.
    pub fn next_unit(self) -> (f64, Lcg) {
        let (raw, next) = self.next_u32();
        (f64::from(raw) / 4_294_967_296.0, next)
    }

    /// Uniform draw in `[low, high)`.
    pub fn next_in(self, (low, high): (f64, f64)) -> (f64, Lcg) {
        let (unit, next) = self.next_unit();
        (low + unit * (high - low), next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Degrees.
    pub hue: f64,
    /// Fraction in `[0, 1]`.
    pub saturation: f64,
    /// Fraction in `[0, 1]`.
    pub lightness: f64,
}

impl Hsl {
    pub fn to_css(&self) -> String {
        format!(
            "hsl({:.1}, {:.1}%, {:.1}%)",
            self.hue,
            self.saturation * 100.0,
            self.lightness * 100.0
        )
    }
}

/// Half-open ranges each color component is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBand {
    pub hue: (f64, f64),
    pub saturation: (f64, f64),
    pub lightness: (f64, f64),
}

impl Default for ColorBand {
    /// Muted purple-blue band.
    fn default() -> Self {
        Self {
            hue: (250.0, 266.0),
            saturation: (0.25, 0.75),
            lightness: (0.25, 0.35),
        }
    }
}

impl ColorBand {
    pub fn draw(&self, rng: Lcg) -> (Hsl, Lcg) {
        let (hue, rng) = rng.next_in(self.hue);
        let (saturation, rng) = rng.next_in(self.saturation);
        let (lightness, rng) = rng.next_in(self.lightness);
        (
            Hsl {
                hue,
                saturation,
                lightness,
            },
            rng,
        )
    }
}

/// Exactly `count` colors for positions `0..count` under `seed`.
pub fn assign_colors(seed: Seed, band: &ColorBand, count: usize) -> Vec<Hsl> {
    let mut rng = Lcg::new(seed);
    let mut colors = Vec::with_capacity(count);
    for _ in 0..count {
        let (color, next) = band.draw(rng);
        colors.push(color);
        rng = next;
    }
    colors
}
