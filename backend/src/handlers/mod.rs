//! HTTP handlers for VCA Paspoort

mod certificate;
mod employee;
mod health;

pub use certificate::*;
pub use employee::*;
pub use health::*;

use serde::Deserialize;
use shared::Language;

/// Language selection shared by every endpoint
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    /// Language preference: "nl" or "en"
    pub lang: Option<String>,
}

impl LangQuery {
    pub fn language(&self) -> Language {
        self.lang
            .as_deref()
            .map(Language::from_code)
            .unwrap_or_default()
    }
}
