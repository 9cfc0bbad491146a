//! Process exit codes.

use igniter_config::ConfigError;

/// The command did what was asked.
pub(crate) const SUCCESS: u8 = 0;

/// I/O trouble, oversized input or anything else outside the pipeline.
pub(crate) const FAILURE: u8 = 1;

/// Exit code for a pipeline rejection. Each kind gets its own code.
pub(crate) fn code_for(err: &ConfigError) -> u8 {
    match err {
        ConfigError::Empty => 2,
        ConfigError::CloudConfig => 3,
        ConfigError::Script => 4,
        ConfigError::Invalid { .. } => 5,
        ConfigError::UnknownVersion => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let mut codes = vec![
            SUCCESS,
            FAILURE,
            code_for(&ConfigError::Empty),
            code_for(&ConfigError::CloudConfig),
            code_for(&ConfigError::Script),
            code_for(&ConfigError::Invalid {
                reason: String::new(),
                position: None,
            }),
            code_for(&ConfigError::UnknownVersion),
        ];
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }
}
