use crate::Generator;
use shortly_core::ShortCode;
use std::sync::atomic::{AtomicU32, Ordering};

const CODE_SPACE_MASK: u32 = 0x00FF_FFFF;

/// A deterministic generator that counts through the code space.
///
/// This generator produces sequential codes like "000000", "000001", etc.
/// and wraps around after "ffffff". It is meant for tests and local runs
/// where predictable codes are useful; production deployments should use
/// [`RandomHexGenerator`](crate::RandomHexGenerator).
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU32,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU32::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl SeqGenerator {
    /// Creates a generator starting at "000000".
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator starting from a specific counter value.
    pub fn with_offset(offset: u32) -> Self {
        Self {
            counter: AtomicU32::new(offset & CODE_SPACE_MASK),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let count = self.counter.fetch_add(1, Ordering::SeqCst) & CODE_SPACE_MASK;
        let [_, hi, mid, lo] = count.to_be_bytes();
        ShortCode::from_bytes([hi, mid, lo])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_sequential_codes() {
        let generator = SeqGenerator::new();

        assert_eq!(generator.generate().as_str(), "000000");
        assert_eq!(generator.generate().as_str(), "000001");
        assert_eq!(generator.generate().as_str(), "000002");
    }

    #[test]
    fn with_offset() {
        let generator = SeqGenerator::with_offset(0xab12cd);

        assert_eq!(generator.generate().as_str(), "ab12cd");
        assert_eq!(generator.generate().as_str(), "ab12ce");
    }

    #[test]
    fn wraps_at_end_of_code_space() {
        let generator = SeqGenerator::with_offset(0xffffff);

        assert_eq!(generator.generate().as_str(), "ffffff");
        assert_eq!(generator.generate().as_str(), "000000");
    }

    #[test]
    fn clone_preserves_counter_state() {
        let generator = SeqGenerator::new();
        generator.generate();
        generator.generate();

        let cloned = generator.clone();

        assert_eq!(generator.generate().as_str(), "000002");
        assert_eq!(cloned.generate().as_str(), "000002");
    }
}
