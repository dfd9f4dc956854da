use serde_json::Value;

use crate::utils::pretty_json;

pub const LOADING_TEXT: &str = "Loading...";
pub const RESULTS_PLACEHOLDER: &str = "This text area should contain operation results";

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigLoad {
    Loading,
    Loaded(String),
    Error(String),
}

/// State owned by one mounted `ConfigViewer`.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    pub config: ConfigLoad,
    /// Always empty; nothing produces a payload yet.
    pub payload_text: String,
    /// Always empty; nothing produces operation results yet.
    pub results: Vec<Value>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            config: ConfigLoad::Loading,
            payload_text: String::new(),
            results: Vec::new(),
        }
    }
}

impl DisplayState {
    /// Text bound to the configuration panel. A failed load keeps the
    /// placeholder; the reason is exposed through [`DisplayState::error`].
    pub fn config_text(&self) -> &str {
        match &self.config {
            ConfigLoad::Loaded(text) => text.as_str(),
            ConfigLoad::Loading | ConfigLoad::Error(_) => LOADING_TEXT,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.config {
            ConfigLoad::Error(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    pub fn results_text(&self) -> &'static str {
        RESULTS_PLACEHOLDER
    }

    pub fn is_loading(&self) -> bool {
        self.config == ConfigLoad::Loading
    }

    /// Applies the outcome of the configuration fetch. Only the first outcome
    /// counts; `Loaded` and `Error` are final.
    pub fn resolve(mut self, outcome: Result<Value, String>) -> Self {
        if !self.is_loading() {
            return self;
        }
        self.config = match outcome {
            Ok(document) => ConfigLoad::Loaded(pretty_json(&document)),
            Err(reason) => ConfigLoad::Error(reason),
        };
        self
    }
}
