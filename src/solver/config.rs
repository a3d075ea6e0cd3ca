//! Solver limits

/// Length limits applied to racks and dictionary words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Longest rack accepted by a search
    pub max_rack_length: usize,
    /// Longest dictionary word kept at load time and accepted by lookup
    pub max_word_length: usize,
}

impl SolverConfig {
    /// Default rack limit, matching a full tray plus a few board letters
    pub const DEFAULT_MAX_RACK_LENGTH: usize = 10;
    /// Default word limit, the width of a standard board
    pub const DEFAULT_MAX_WORD_LENGTH: usize = 15;

    #[must_use]
    pub const fn new(max_rack_length: usize, max_word_length: usize) -> Self {
        Self {
            max_rack_length,
            max_word_length,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_RACK_LENGTH,
            Self::DEFAULT_MAX_WORD_LENGTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let config = SolverConfig::default();
        assert_eq!(config.max_rack_length, 10);
        assert_eq!(config.max_word_length, 15);
    }
}
