//! Validator settings, read from the environment when needed.

use std::env;

use log::warn;

use crate::consts::MAX_REMARKS_WORDS_VAR;
use crate::utils::validation::MAX_REMARKS_WORDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub max_remarks_words: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_remarks_words: MAX_REMARKS_WORDS,
        }
    }
}

impl ValidatorConfig {
    /// Loads `.env` if present, then applies `FORM_MAX_REMARKS_WORDS`.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_value(env::var(MAX_REMARKS_WORDS_VAR).ok().as_deref())
    }

    fn from_value(raw: Option<&str>) -> Self {
        let mut config = Self::default();
        let Some(raw) = raw else {
            return config;
        };

        match raw.trim().parse::<usize>() {
            Ok(words) if words > 0 => config.max_remarks_words = words,
            _ => warn!(
                "Ignoring {}={:?}, keeping {} words",
                MAX_REMARKS_WORDS_VAR, raw, config.max_remarks_words
            ),
        }
        config
    }
}
