use crate::Generator;
use shortly_core::shortcode::CODE_BYTES;
use shortly_core::ShortCode;

/// Draws three bytes from the thread-local CSPRNG and renders them as hex.
///
/// The code space is 2^24, and collisions with stored codes are not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomHexGenerator;

impl RandomHexGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomHexGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        // ThreadRng is a ChaCha-based CSPRNG reseeded from the OS
        let bytes: [u8; CODE_BYTES] = rand::random();
        ShortCode::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_short_hex(code: &str) -> bool {
        code.len() == 6
            && code
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn generated_codes_are_six_lowercase_hex_chars() {
        let generator = RandomHexGenerator::new();
        for _ in 0..1_000 {
            let code = generator.generate();
            assert!(is_short_hex(code.as_str()), "bad code: {code}");
        }
    }

    #[test]
    fn generated_codes_pass_validation() {
        let generator = RandomHexGenerator::new();
        let code = generator.generate();
        assert_eq!(ShortCode::new(code.as_str()).unwrap(), code);
    }

    #[test]
    fn generated_codes_vary() {
        let generator = RandomHexGenerator::new();
        let codes: HashSet<String> = (0..64).map(|_| generator.generate().into()).collect();
        // 64 draws from 2^24 values: a handful of duplicates at most
        assert!(codes.len() > 60);
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomHexGenerator>();
    }
}
