//! Named-placeholder template substitution.
//!
//! Templates use `$name` or `${name}` placeholders, with `$$` producing a
//! literal dollar sign. Substitution is a single left-to-right scan; there is
//! no nesting, no conditionals, and no recursion into substituted values.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CookbookError;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:\$|\{(?P<braced>[A-Za-z_][A-Za-z0-9_]*)\}|(?P<named>[A-Za-z_][A-Za-z0-9_]*))")
        .unwrap()
});

/// A page template with named placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Substitute every placeholder from `values`.
    ///
    /// A placeholder with no corresponding value is an error; extra values
    /// are ignored.
    pub fn substitute(&self, values: &HashMap<&str, String>) -> Result<String, CookbookError> {
        let mut out = String::with_capacity(self.text.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(&self.text) {
            let whole = caps.get(0).expect("match always has a group 0");
            out.push_str(&self.text[last..whole.start()]);
            last = whole.end();

            match caps.name("braced").or_else(|| caps.name("named")) {
                Some(name) => {
                    let value = values.get(name.as_str()).ok_or_else(|| {
                        CookbookError::MissingPlaceholder(name.as_str().to_string())
                    })?;
                    out.push_str(value);
                }
                // "$$" escape
                None => out.push('$'),
            }
        }

        out.push_str(&self.text[last..]);
        Ok(out)
    }
}
