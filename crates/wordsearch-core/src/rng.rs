//! Linear congruential generator shared by puzzle and solution views.
//!
//! The recurrence is evaluated in double precision. `state * 1103515245`
//! overflows the 53-bit mantissa and gets rounded before the modulo, and the
//! published puzzles depend on that rounding, so integer arithmetic here would
//! produce different grids.

const MULTIPLIER: f64 = 1103515245.0;
const INCREMENT: f64 = 12345.0;
const MODULUS: f64 = 2147483648.0;

/// Seeded pseudo-random source for placement and filler letters
#[derive(Debug, Clone)]
pub struct Lcg {
    state: f64,
}

impl Lcg {
    /// Create a generator from an explicit seed
    pub fn with_seed(seed: u64) -> Self {
        Self { state: seed as f64 }
    }

    /// Create a generator seeded from the platform entropy source
    pub fn from_entropy() -> Self {
        Self::with_seed(Self::entropy_seed())
    }

    /// Draw a fresh seed in `[0, 2^31)`
    pub fn entropy_seed() -> u64 {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        u64::from_le_bytes(seed_bytes) % (MODULUS as u64)
    }

    /// Advance and return a value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state / MODULUS
    }

    /// `floor(next * span)`; `span` may be zero or negative for impossible ranges
    pub fn next_offset(&mut self, span: i64) -> i64 {
        (self.next_f64() * span as f64).floor() as i64
    }

    /// Uniform index into a collection of `len` items
    pub fn next_index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64).floor() as usize
    }

    /// Pick one element of a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_index(items.len())]
    }

    /// Current raw state
    pub fn state(&self) -> f64 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sequence_seed_1() {
        let mut rng = Lcg::with_seed(1);
        let states: Vec<f64> = (0..5)
            .map(|_| {
                rng.next_f64();
                rng.state()
            })
            .collect();
        assert_eq!(
            states,
            vec![1103527590.0, 377401600.0, 333417792.0, 314102912.0, 611429056.0]
        );
    }

    #[test]
    fn test_reference_sequence_keeps_float_rounding() {
        let mut rng = Lcg::with_seed(123456);
        let states: Vec<f64> = (0..5)
            .map(|_| {
                rng.next_f64();
                rng.state()
            })
            .collect();
        assert_eq!(
            states,
            vec![1362953593.0, 591160064.0, 2027968256.0, 470235904.0, 1158565696.0]
        );

        // Exact integer arithmetic departs from the reference on the second draw
        let exact = (1362953593u64 * 1103515245 + 12345) % (1 << 31);
        assert_ne!(exact as f64, states[1]);
    }

    #[test]
    fn test_values_in_unit_interval() {
        let mut rng = Lcg::with_seed(42);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_pick_and_index_bounds() {
        let mut rng = Lcg::with_seed(7);
        let items = [1, 2, 3];
        for _ in 0..100 {
            assert!(items.contains(rng.pick(&items)));
            assert!(rng.next_index(26) < 26);
        }
    }

    #[test]
    fn test_entropy_seed_in_range() {
        assert!(Lcg::entropy_seed() < 1 << 31);
    }
}
