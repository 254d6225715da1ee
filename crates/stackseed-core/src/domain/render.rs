//! `{{VARIABLE}}` substitution for generated config files.

use std::collections::HashMap;

/// Context for rendering parameterized file content.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "Real Estate Website" | Setup file |
/// | `PROJECT_NAME_SNAKE` | "real_estate_website" | Computed |
/// | `PROJECT_NAME_KEBAB` | "real-estate-website" | Computed |
/// | `PROJECT_NAME_PASCAL` | "RealEstateWebsite" | Computed |
///
/// Custom variables are added with [`RenderContext::with_variable`].
#[derive(Debug, Clone)]
pub struct RenderContext {
    project_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = HashMap::new();

        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert("PROJECT_NAME_SNAKE".to_string(), to_snake_case(&name));
        vars.insert("PROJECT_NAME_KEBAB".to_string(), to_kebab_case(&name));
        vars.insert("PROJECT_NAME_PASCAL".to_string(), to_pascal_case(&name));

        Self {
            project_name: name,
            variables: vars,
        }
    }

    /// Add a custom variable, consuming self and returning a new context.
    ///
    /// Custom variables can override built-ins.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// - `{{UNKNOWN}}` stays as literal `{{UNKNOWN}}`
    /// - Repeated placeholders are all replaced
    /// - Substituted values are not rescanned
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let key = &after[..end];
                    match self.variables.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

/// Split on separators (`-`, `_`, whitespace) and lower→upper transitions.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in input.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

pub(crate) fn to_snake_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

pub(crate) fn to_kebab_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

pub(crate) fn to_pascal_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect()
}
