use thiserror::Error;

/// A caller broke one of the model's documented preconditions.
///
/// The model never guesses: any parameter outside its domain is reported
/// instead of silently producing a wrong register. The one deliberate
/// exception is the trust boundary of the modular add/subtract ops, which
/// accept out-of-range lane values and return the same unchecked result the
/// hardware would.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Transpose granularity must be 32, 64 or 128 bits.
    #[error("invalid granularity: {0} bits (expected 32, 64 or 128)")]
    Granularity(usize),

    /// Repack element width must lie in `1..=32` bits.
    #[error("invalid element width: {0} bits (expected 1..=32)")]
    ElementWidth(usize),

    /// Broadcast lane index must lie in `0..=7`.
    #[error("invalid lane index: {0} (expected 0..=7)")]
    LaneIndex(usize),

    /// Shift amount exceeds the operation's range.
    #[error("shift amount {amount} out of range (max {max})")]
    ShiftAmount { amount: usize, max: usize },

    /// Montgomery constants only exist for odd moduli.
    #[error("montgomery constants require an odd modulus, got {0}")]
    EvenModulus(u32),

    /// Supplied Montgomery constants were not derived from this modulus.
    #[error("montgomery constants inconsistent with modulus {m}")]
    MontgomeryParams {
        /// The modulus the constants were checked against.
        m: u32,
    },
}
