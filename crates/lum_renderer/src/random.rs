//! Deterministic per-pixel random numbers.
//!
//! Each pixel seeds its own generator from an integer hash of its linear
//! index, so lanes never share generator state and a render is
//! reproducible regardless of how lanes are scheduled.

const LCG_A: u64 = 1103515245;
const LCG_C: u64 = 12345;
/// Modulus `2^31`.
const LCG_M: u64 = 1 << 31;

/// Integer avalanche hash (add/shift/xor mixing) on 32 bits.
#[inline]
pub fn hash(x: u32) -> u32 {
    let mut h = x;
    h = h.wrapping_add(h << 10);
    h ^= h >> 6;
    h = h.wrapping_add(h << 3);
    h ^= h >> 11;
    h = h.wrapping_add(h << 15);
    h
}

/// Linear congruential generator, `state' = (a * state + c) mod 2^31`.
///
/// State is a plain value: copying a generator forks an identical
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Start from an explicit state.
    pub fn new(state: u32) -> Self {
        Self { state }
    }

    /// Seed for the pixel with linear index `pixel`.
    pub fn for_pixel(pixel: u32) -> Self {
        Self::new(hash(pixel))
    }

    /// Current state.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance and return the new 31-bit state.
    #[inline]
    pub fn step(&mut self) -> u32 {
        // a * state < 2^63, and 2^31 divides 2^64, so the mask is exact
        let next = (LCG_A * self.state as u64 + LCG_C) & (LCG_M - 1);
        self.state = next as u32;
        self.state
    }

    /// Advance and return `state' / 2^31` in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.step() as f64 / LCG_M as f64
    }

    /// Advance and return a value in `[0, 1)`.
    ///
    /// Keeps the top 24 bits of the state so the result never rounds up
    /// to 1.0 in single precision.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (self.step() >> 7) as f32 * (1.0 / (1u32 << 24) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_values() {
        assert_eq!(hash(0), 0);
        // Distinct neighbours map far apart
        assert_ne!(hash(1), hash(2));
        assert_ne!(hash(1) >> 16, hash(2) >> 16);
    }

    #[test]
    fn test_lcg_first_step() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.step(), 12345);
        assert_eq!(rng.step(), ((1103515245u64 * 12345 + 12345) % (1u64 << 31)) as u32);
    }

    #[test]
    fn test_same_pixel_same_sequence() {
        let mut a = Lcg::for_pixel(4242);
        let mut b = Lcg::for_pixel(4242);
        for _ in 0..1000 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn test_different_pixels_diverge() {
        let mut a = Lcg::for_pixel(10);
        let mut b = Lcg::for_pixel(11);
        let same = (0..100).filter(|_| a.step() == b.step()).count();
        assert!(same < 5);
    }

    #[test]
    fn test_draws_in_unit_interval() {
        let mut rng = Lcg::for_pixel(99);
        for _ in 0..10_000 {
            let f = rng.next_f32();
            assert!((0.0..1.0).contains(&f));
            let d = rng.next_f64();
            assert!((0.0..1.0).contains(&d));
        }

        // Largest possible state still maps below one
        let mut top = Lcg::new(0);
        top.state = (LCG_M - 1) as u32;
        assert!(((top.state >> 7) as f32 / (1u32 << 24) as f32) < 1.0);
    }

    #[test]
    fn test_draw_mean() {
        let mut rng = Lcg::for_pixel(1);
        let n = 20_000;
        let mean = (0..n).map(|_| rng.next_f64()).sum::<f64>() / n as f64;
        assert!((mean - 0.5).abs() < 0.02, "mean = {}", mean);
    }
}
