use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("element `{0}` is not mounted")]
    Missing(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("landing content is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("feature grid needs exactly {expected} cards, found {found}")]
    FeatureCount { expected: usize, found: usize },
}
