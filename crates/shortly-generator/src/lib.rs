pub mod random;
pub mod seq;

pub use random::RandomHexGenerator;
pub use seq::SeqGenerator;

use shortly_core::ShortCode;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage,
/// so nothing guarantees that a generated code is not already taken.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Produces the next short code.
    fn generate(&self) -> Self::Output;
}
