//! Presentation tokens.
//!
//! Options such as `current_style` name a presentation token that is toggled
//! on elements. Two spellings are recognized:
//!
//! - `:ncCurrent` - a leading colon names a data attribute. The camelCase
//!   name is split into kebab-case and prefixed, giving `data-nc-current`.
//! - `current` - anything else is a plain CSS class.

use std::fmt;

/// A parsed presentation token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleToken {
    /// CSS class name.
    Class(String),
    /// Full data attribute name, including the `data-` prefix.
    Data(String),
}

impl StyleToken {
    /// Parse a token from its option spelling.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstack_config::StyleToken;
    ///
    /// assert_eq!(
    ///     StyleToken::new(":ncTabBar"),
    ///     StyleToken::Data("data-nc-tab-bar".to_owned())
    /// );
    /// assert_eq!(StyleToken::new("tabs"), StyleToken::Class("tabs".to_owned()));
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        match raw.strip_prefix(':') {
            Some(name) => Self::Data(data_attribute_name(name)),
            None => Self::Class(raw.to_owned()),
        }
    }

    /// Returns true if the token names nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Class(name) => name.is_empty(),
            Self::Data(name) => name == "data-",
        }
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(name) => write!(f, ".{name}"),
            Self::Data(name) => write!(f, "[{name}]"),
        }
    }
}

/// Convert `ncCurrent` into `data-nc-current`.
fn data_attribute_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    out.push_str("data-");
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
