use rand::Rng;

/// Closed range an attribute is drawn from, uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..self.max)
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Uniform draw in `[0, upper)`, collapsing to 0 for empty ranges.
#[inline]
pub fn up_to<R: Rng + ?Sized>(rng: &mut R, upper: f32) -> f32 {
    Span::new(0.0, upper).sample(rng)
}

/// Random travel direction, `1.0` or `-1.0`.
#[inline]
pub fn direction<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}
