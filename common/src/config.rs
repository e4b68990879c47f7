/// How a failed derivation reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail the call with the error.
    #[default]
    Strict,
    /// Turn the error into "no result" so a batch can skip the entry.
    Lenient,
}

impl ErrorMode {
    pub fn is_lenient(self) -> bool {
        self == ErrorMode::Lenient
    }
}

/// Where a team number is cut into the second and third octets.
///
/// | digits | `Standard`           | `SplitThreeDigit`    |
/// |--------|----------------------|----------------------|
/// | 1-2    | `0`, number          | `0`, number          |
/// | 3      | `0`, number          | first digit, last 2  |
/// | 4      | first 2, last 2      | first 2, last 2      |
/// | 5      | first 3, last 2      | first 3, last 2      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitPolicy {
    #[default]
    Standard,
    SplitThreeDigit,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub mode: ErrorMode,
    pub policy: SplitPolicy,
    /// Output reduction level, 0 prints everything.
    pub quiet: u8,
}
