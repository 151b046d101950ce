//! Errors surfaced to JavaScript.

use tabstack_config::ConfigError;
use wasm_bindgen::JsValue;

/// Failure of the `initialize` entry point.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Options object has the wrong shape.
    #[error("Invalid options: {0}")]
    Options(#[from] serde_wasm_bindgen::Error),
    /// Options failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A browser global is unavailable (e.g. running outside a window).
    #[error("{0} is not available")]
    Missing(&'static str),
    /// A DOM call threw.
    #[error("{context}: {message}")]
    Js {
        /// What was being attempted.
        context: &'static str,
        /// Stringified exception.
        message: String,
    },
}

impl WebError {
    /// Wrap a thrown JavaScript value.
    pub(crate) fn js(context: &'static str, value: &JsValue) -> Self {
        Self::Js {
            context,
            message: value.as_string().unwrap_or_else(|| format!("{value:?}")),
        }
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages() {
        assert_eq!(WebError::Missing("window").to_string(), "window is not available");

        let err: WebError =
            ConfigError::Validation("hash_prefix cannot contain '#'".to_owned()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: hash_prefix cannot contain '#'"
        );
    }
}
