//! Localized message templates with `%%PLACEHOLDER%%` substitution.

mod en_us;

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::LazyLock;

use rand::seq::IndexedRandom;
use regex::{Captures, Regex};
use tracing::warn;

use crate::error::DialogError;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%%([A-Z_]+)%%").expect("Invalid placeholder regex"));

/// Regional default for each base language tag.
const REGIONAL_DEFAULTS: &[(&str, &str)] = &[("en", "en-US")];

/// Template parameters: placeholder name and the value substituted for it.
pub type Params<'a> = &'a [(&'a str, &'a dyn Display)];

struct LocaleMessages {
    messages: HashMap<&'static str, &'static str>,
    hints: &'static [&'static str],
}

/// All message templates, keyed by locale.
pub struct MessageCatalog {
    locales: HashMap<&'static str, LocaleMessages>,
    default_locale: String,
}

impl MessageCatalog {
    /// Catalog with the built-in locales.
    pub fn new(default_locale: impl Into<String>) -> Self {
        let mut locales = HashMap::new();
        locales.insert(
            "en-US",
            LocaleMessages {
                messages: en_us::MESSAGES.iter().copied().collect(),
                hints: en_us::HINTS,
            },
        );
        Self {
            locales,
            default_locale: default_locale.into(),
        }
    }

    /// Pick the catalog locale that serves `requested`.
    ///
    /// Exact match first, then the regional default sharing the base language
    /// tag, then the configured default.
    pub fn resolve_locale(&self, requested: &str) -> &str {
        if let Some((key, _)) = self.locales.get_key_value(requested) {
            return *key;
        }
        let base = requested.split(['-', '_']).next().unwrap_or(requested);
        let regional = REGIONAL_DEFAULTS
            .iter()
            .find(|(lang, _)| lang.eq_ignore_ascii_case(base))
            .map(|(_, locale)| *locale)
            .filter(|locale| self.locales.contains_key(*locale));
        match regional {
            Some(locale) => locale,
            None => {
                warn!(locale = %requested, "No catalog for locale, using default");
                &self.default_locale
            }
        }
    }

    /// Render `key` for `locale`, substituting the given parameters.
    ///
    /// Placeholders without a matching parameter are left in place.
    pub fn render(&self, locale: &str, key: &str, params: Params<'_>) -> Result<String, DialogError> {
        let template = self.template(locale, key)?;
        if params.is_empty() {
            return Ok(template.to_string());
        }
        let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
            params
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        });
        Ok(rendered.into_owned())
    }

    /// Render a template that takes no parameters.
    pub fn text(&self, locale: &str, key: &str) -> Result<String, DialogError> {
        self.render(locale, key, &[])
    }

    /// A random usage hint for display devices.
    pub fn random_hint(&self, locale: &str) -> Option<&'static str> {
        self.locales
            .get(self.resolve_locale(locale))
            .and_then(|messages| messages.hints.choose(&mut rand::rng()))
            .copied()
    }

    fn template(&self, locale: &str, key: &str) -> Result<&'static str, DialogError> {
        let resolved = self.resolve_locale(locale);
        self.locales
            .get(resolved)
            .and_then(|messages| messages.messages.get(key))
            .copied()
            .ok_or_else(|| DialogError::MissingMessage {
                key: key.to_string(),
                locale: resolved.to_string(),
            })
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new("en-US")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_params() {
        let catalog = MessageCatalog::default();
        let text = catalog
            .render(
                "en-US",
                "SCORE_NUMBER_ERROR",
                &[("SCORE", &"SAT"), ("RANGELOW", &400), ("RANGEHIGH", &1600)],
            )
            .unwrap();
        assert!(text.contains("between 400 and 1600"));
        assert!(text.contains(">SAT</say-as>"));
        assert!(!text.contains("%%"));
    }

    #[test]
    fn test_unknown_placeholder_is_left_untouched() {
        let catalog = MessageCatalog::default();
        let text = catalog
            .render("en-US", "FAVORITES_ADDED", &[("OTHER", &"x")])
            .unwrap();
        assert!(text.contains("%%SCHOOL%%"));
    }

    #[test]
    fn test_missing_key() {
        let catalog = MessageCatalog::default();
        let err = catalog.text("en-US", "NOT_A_KEY").unwrap_err();
        assert!(matches!(
            err,
            DialogError::MissingMessage { ref key, .. } if key == "NOT_A_KEY"
        ));
    }

    #[test]
    fn test_regional_fallback_for_same_language() {
        let catalog = MessageCatalog::default();
        assert_eq!(catalog.resolve_locale("en-GB"), "en-US");
        assert_eq!(catalog.resolve_locale("en-IN"), "en-US");
        assert_eq!(
            catalog.text("en-AU", "GOODBYE").unwrap(),
            catalog.text("en-US", "GOODBYE").unwrap()
        );
    }

    #[test]
    fn test_other_language_uses_default_locale() {
        let catalog = MessageCatalog::default();
        assert_eq!(catalog.resolve_locale("de-DE"), "en-US");
        assert!(catalog.text("de-DE", "WELCOME_MENU").is_ok());
    }

    #[test]
    fn test_previously_undefined_keys_exist() {
        let catalog = MessageCatalog::default();
        for key in ["PROFILE_RESET", "PROFILE_RESET_NEXT", "REFINE_SEARCH_NO_MATCH"] {
            assert!(catalog.text("en-US", key).is_ok(), "{key} missing");
        }
    }

    #[test]
    fn test_no_unclosed_say_as_tags() {
        for (key, template) in en_us::MESSAGES {
            let opens = template.matches("<say-as").count();
            let closes = template.matches("</say-as>").count();
            assert_eq!(opens, closes, "unbalanced say-as in {key}");
        }
    }

    #[test]
    fn test_random_hint() {
        let catalog = MessageCatalog::default();
        let hint = catalog.random_hint("en-US").unwrap();
        assert!(en_us::HINTS.contains(&hint));
    }
}
