//! Effective settings for one run.

/// What a run generates. Starts from the built-in defaults and is
/// overridden by explicit flags; nothing is persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub include_special: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            number_of_passwords: 1,
            include_special: false,
        }
    }
}
