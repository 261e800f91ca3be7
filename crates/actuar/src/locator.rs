//! Parameterized locators for element selection.
//!
//! A [`Locator`] pairs a [`LocatorKind`] with a template string. The template
//! may contain `{name}` placeholders which are substituted at resolution time
//! to produce the final [`ResolvedLocator`] consumed by the finder:
//!
//! ```
//! use actuar::locator::{Locator, LocatorArgs, LocatorKind};
//!
//! let button = Locator::new(LocatorKind::XPath, "//button[@name=\"{button_name}\"]");
//! assert!(button.is_parameterized());
//!
//! let target = button
//!     .resolve(&LocatorArgs::new().with("button_name", "save"))
//!     .unwrap();
//! assert_eq!(target.value, "//button[@name=\"save\"]");
//! ```
//!
//! Locators are immutable; resolving never mutates them and two locators built
//! from the same template always report the same placeholder names.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::result::{ActuarError, ActuarResult};

/// Element selection strategy, matching the W3C WebDriver location strategies.
///
/// Closed set; the backend converts each variant to its native representation
/// with an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocatorKind {
    /// Element id attribute
    Id,
    /// Element name attribute
    Name,
    /// XPath expression
    XPath,
    /// Single CSS class name
    ClassName,
    /// CSS selector
    Css,
    /// Tag name
    Tag,
    /// Exact anchor text
    LinkText,
    /// Substring of anchor text
    PartialLinkText,
}

impl LocatorKind {
    /// The wire-level "using" string for this strategy
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::XPath => "xpath",
            Self::ClassName => "class name",
            Self::Css => "css selector",
            Self::Tag => "tag name",
            Self::LinkText => "link text",
            Self::PartialLinkText => "partial link text",
        }
    }
}

impl std::fmt::Display for LocatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extract `{name}` placeholders from a template, in declaration order.
///
/// Single left-to-right pass. Duplicate names are preserved as they occur and
/// `{}` yields an empty name. Unbalanced braces end the scan instead of
/// raising: once no further `{`/`}` pair can be formed, extraction is done.
#[must_use]
pub fn extract_parameters(template: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut cursor = 0;
    loop {
        let Some(open) = find_from(template, '{', cursor) else {
            break;
        };
        let Some(close) = find_from(template, '}', cursor + 1) else {
            break;
        };
        if open > close {
            // stray '}' before the next '{'
            break;
        }
        params.push(template[open + 1..close].to_string());
        cursor = close;
    }
    params
}

fn find_from(text: &str, needle: char, start: usize) -> Option<usize> {
    let mut start = start.min(text.len());
    while !text.is_char_boundary(start) {
        start += 1;
    }
    text[start..].find(needle).map(|i| start + i)
}

/// Arguments supplied when resolving a parameterized locator.
///
/// A plain name-to-value map with a builder for call-site readability:
///
/// ```
/// use actuar::locator::LocatorArgs;
///
/// let args = LocatorArgs::new().with("row", "3").with("col", "7");
/// assert_eq!(args.get("row"), Some("3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatorArgs {
    values: HashMap<String, String>,
}

impl LocatorArgs {
    /// Create an empty argument set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Insert an argument in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up an argument by placeholder name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether an argument with this name is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Whether no arguments were supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of supplied arguments
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocatorArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for LocatorArgs {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// A fully resolved locator, ready for the element-locating facility.
///
/// Every placeholder of the originating template has been substituted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedLocator {
    /// Selection strategy
    pub kind: LocatorKind,
    /// Concrete selector value
    pub value: String,
}

impl ResolvedLocator {
    /// Create a resolved locator directly, bypassing templating
    #[must_use]
    pub fn new(kind: LocatorKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for ResolvedLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.kind, self.value)
    }
}

/// A typed, possibly templated reference to how an element should be found.
///
/// Commonly defined once per page object and resolved many times with
/// different argument sets. Resolution is cheap, idempotent and free of side
/// effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    kind: LocatorKind,
    template: String,
    parameters: Vec<String>,
}

impl Locator {
    /// Create a locator from a kind and a template string
    #[must_use]
    pub fn new(kind: LocatorKind, template: impl Into<String>) -> Self {
        let template = template.into();
        let parameters = extract_parameters(&template);
        Self {
            kind,
            template,
            parameters,
        }
    }

    /// Shorthand for an id locator
    #[must_use]
    pub fn id(template: impl Into<String>) -> Self {
        Self::new(LocatorKind::Id, template)
    }

    /// Shorthand for a name locator
    #[must_use]
    pub fn name(template: impl Into<String>) -> Self {
        Self::new(LocatorKind::Name, template)
    }

    /// Shorthand for an XPath locator
    #[must_use]
    pub fn xpath(template: impl Into<String>) -> Self {
        Self::new(LocatorKind::XPath, template)
    }

    /// Shorthand for a CSS selector locator
    #[must_use]
    pub fn css(template: impl Into<String>) -> Self {
        Self::new(LocatorKind::Css, template)
    }

    /// Selection strategy
    #[must_use]
    pub const fn kind(&self) -> LocatorKind {
        self.kind
    }

    /// The raw template string
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Placeholder names in declaration order, duplicates preserved
    #[must_use]
    pub fn parameter_names(&self) -> &[String] {
        &self.parameters
    }

    /// Whether the template contains any placeholders
    #[must_use]
    pub fn is_parameterized(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Resolve without arguments.
    ///
    /// Convenience for non-parameterized locators.
    ///
    /// # Errors
    ///
    /// Returns [`ActuarError::MissingArguments`] if the locator is
    /// parameterized.
    pub fn target(&self) -> ActuarResult<ResolvedLocator> {
        self.resolve(&LocatorArgs::new())
    }

    /// Substitute `args` into the template and return the `(kind, value)`
    /// pair for the element-locating facility.
    ///
    /// Non-parameterized locators ignore `args` entirely and return the
    /// template unchanged. Extra argument keys beyond the required names are
    /// silently ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ActuarError::MissingArguments`] listing every required
    /// placeholder name absent from `args`.
    pub fn resolve(&self, args: &LocatorArgs) -> ActuarResult<ResolvedLocator> {
        if !self.is_parameterized() {
            return Ok(ResolvedLocator::new(self.kind, self.template.clone()));
        }
        let missing: Vec<String> = self
            .required_names()
            .filter(|name| !args.contains(name))
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(ActuarError::MissingArguments {
                template: self.template.clone(),
                missing,
            });
        }
        let mut value = self.template.clone();
        for name in self.required_names() {
            if let Some(arg) = args.get(name) {
                value = value.replace(&format!("{{{name}}}"), arg);
            }
        }
        Ok(ResolvedLocator::new(self.kind, value))
    }

    /// Distinct placeholder names, first occurrence order
    fn required_names(&self) -> impl Iterator<Item = &str> + '_ {
        let mut seen = Vec::new();
        self.parameters.iter().filter_map(move |name| {
            if seen.contains(&name.as_str()) {
                None
            } else {
                seen.push(name.as_str());
                Some(name.as_str())
            }
        })
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.kind, self.template)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod extractor_tests {
        use super::*;

        #[test]
        fn test_extract_empty() {
            let params = extract_parameters("/foo[@bar=\"baz\"]");
            assert!(params.is_empty());
        }

        #[test]
        fn test_extract_one() {
            let params = extract_parameters("/foo[@bar=\"{baz}\"]");
            assert_eq!(params, vec!["baz"]);
        }

        #[test]
        fn test_extract_two() {
            let params = extract_parameters("/foo[@bar=\"{baz}-{faz}\"]");
            assert_eq!(params, vec!["baz", "faz"]);
        }

        #[test]
        fn test_extract_three_adjacent() {
            let params = extract_parameters("/foo[@bar=\"{baz}-{faz}{gaz}\"]");
            assert_eq!(params, vec!["baz", "faz", "gaz"]);
        }

        #[test]
        fn test_extract_duplicates_preserved() {
            let params = extract_parameters("{a}-{b}-{a}");
            assert_eq!(params, vec!["a", "b", "a"]);
        }

        #[test]
        fn test_extract_empty_name() {
            let params = extract_parameters("x{}y");
            assert_eq!(params, vec![""]);
        }

        #[test]
        fn test_extract_unclosed_brace_stops() {
            let params = extract_parameters("{a}-{unclosed");
            assert_eq!(params, vec!["a"]);
        }

        #[test]
        fn test_extract_stray_close_before_open_stops() {
            // a '}' between the cursor and the next '{' ends the scan
            let params = extract_parameters("a}b{c}");
            assert!(params.is_empty());
        }

        #[test]
        fn test_extract_is_deterministic() {
            let template = "//section[@class='{css_class}' and contains(., '{post_title}')]";
            assert_eq!(extract_parameters(template), extract_parameters(template));
        }
    }

    mod locator_tests {
        use super::*;

        #[test]
        fn test_construct() {
            let locator = Locator::new(LocatorKind::Id, "foo");
            assert_eq!(locator.kind(), LocatorKind::Id);
            assert_eq!(locator.kind().as_str(), "id");
            assert_eq!(locator.template(), "foo");
        }

        #[test]
        fn test_non_parameterized() {
            let locator = Locator::xpath("//foo[@bar=\"baz\"]");
            assert!(!locator.is_parameterized());
            assert!(locator.parameter_names().is_empty());
            let target = locator.target().unwrap();
            assert_eq!(target.kind, LocatorKind::XPath);
            assert_eq!(target.value, "//foo[@bar=\"baz\"]");
        }

        #[test]
        fn test_non_parameterized_ignores_extra_args() {
            let locator = Locator::css("div.card");
            let target = locator
                .resolve(&LocatorArgs::new().with("unused", "x"))
                .unwrap();
            assert_eq!(target.value, "div.card");
        }

        #[test]
        fn test_parameterized() {
            let locator = Locator::xpath("//foo[@bar=\"{baz}\"]//jimmy[{choo}]");
            assert!(locator.is_parameterized());
            assert_eq!(locator.parameter_names(), ["baz", "choo"]);
            let target = locator
                .resolve(&LocatorArgs::new().with("baz", "a").with("choo", "b"))
                .unwrap();
            assert_eq!(target.kind, LocatorKind::XPath);
            assert_eq!(target.value, "//foo[@bar=\"a\"]//jimmy[b]");
        }

        #[test]
        fn test_repeated_placeholder_substituted_everywhere() {
            let locator = Locator::xpath("//a[{n}]/b[{n}]");
            let target = locator.resolve(&LocatorArgs::new().with("n", "2")).unwrap();
            assert_eq!(target.value, "//a[2]/b[2]");
        }

        #[test]
        fn test_extra_args_ignored() {
            let locator = Locator::xpath("//a[.='{label}']");
            let args = LocatorArgs::new().with("label", "Blog").with("junk", "x");
            assert_eq!(locator.resolve(&args).unwrap().value, "//a[.='Blog']");
        }

        #[test]
        fn test_empty_args_reports_all_required() {
            let locator = Locator::xpath("//foo[@bar=\"{baz}\"]//jimmy[{choo}]");
            let err = locator.target().unwrap_err();
            match err {
                ActuarError::MissingArguments { template, missing } => {
                    assert_eq!(template, "//foo[@bar=\"{baz}\"]//jimmy[{choo}]");
                    assert_eq!(missing, vec!["baz", "choo"]);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        #[test]
        fn test_partial_args_reports_missing_name() {
            let locator = Locator::xpath("//foo[@bar=\"{baz}\"]//jimmy[{choo}]");
            let err = locator
                .resolve(&LocatorArgs::new().with("baz", "a"))
                .unwrap_err();
            match err {
                ActuarError::MissingArguments { missing, .. } => {
                    assert_eq!(missing, vec!["choo"]);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        #[test]
        fn test_resolve_is_idempotent() {
            let locator = Locator::xpath("//a[.='{label}']");
            let names_before = locator.parameter_names().to_vec();
            let args = LocatorArgs::new().with("label", "Blog");
            let first = locator.resolve(&args).unwrap();
            let second = locator.resolve(&args).unwrap();
            assert_eq!(first, second);
            assert_eq!(locator.parameter_names(), names_before.as_slice());
            assert_eq!(locator.template(), "//a[.='{label}']");
        }

        #[test]
        fn test_same_template_same_parameters() {
            let a = Locator::xpath("//x[{i}]/{j}");
            let b = Locator::xpath("//x[{i}]/{j}");
            assert_eq!(a.parameter_names(), b.parameter_names());
        }

        #[test]
        fn test_display() {
            let locator = Locator::id("login");
            assert_eq!(locator.to_string(), "id=login");
            assert_eq!(locator.target().unwrap().to_string(), "id=login");
        }
    }

    mod kind_tests {
        use super::*;

        #[test]
        fn test_wire_strings() {
            assert_eq!(LocatorKind::Id.as_str(), "id");
            assert_eq!(LocatorKind::Name.as_str(), "name");
            assert_eq!(LocatorKind::XPath.as_str(), "xpath");
            assert_eq!(LocatorKind::ClassName.as_str(), "class name");
            assert_eq!(LocatorKind::Css.as_str(), "css selector");
            assert_eq!(LocatorKind::Tag.as_str(), "tag name");
            assert_eq!(LocatorKind::LinkText.as_str(), "link text");
            assert_eq!(LocatorKind::PartialLinkText.as_str(), "partial link text");
        }

        #[test]
        fn test_serde_round_trip() {
            let json = serde_json::to_string(&LocatorKind::PartialLinkText).unwrap();
            assert_eq!(json, "\"partial_link_text\"");
            let kind: LocatorKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, LocatorKind::PartialLinkText);
        }
    }

    mod args_tests {
        use super::*;

        #[test]
        fn test_from_array() {
            let args = LocatorArgs::from([("a", "1"), ("b", "2")]);
            assert_eq!(args.len(), 2);
            assert_eq!(args.get("b"), Some("2"));
        }

        #[test]
        fn test_from_iterator() {
            let args: LocatorArgs = vec![("k", "v")].into_iter().collect();
            assert!(args.contains("k"));
            assert!(!args.is_empty());
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn extraction_never_panics(template in ".*") {
                let _ = extract_parameters(&template);
            }

            #[test]
            fn extracted_names_contain_no_close_brace(template in ".*") {
                // the closing brace is always the first one after the cursor,
                // so it can never end up inside a name
                for name in extract_parameters(&template) {
                    let contains_close_brace = name.contains('}');
                    prop_assert!(!contains_close_brace);
                }
            }

            #[test]
            fn balanced_single_placeholder_found(name in "[a-z_]{1,12}") {
                let template = format!("//div[@id=\"{{{name}}}\"]");
                prop_assert_eq!(extract_parameters(&template), vec![name]);
            }
        }
    }
}
