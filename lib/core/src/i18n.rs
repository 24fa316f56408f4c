//! Built-in message catalog for the internationalization demo.

use std::fmt;
use std::str::FromStr;

/// Errors from locale parsing and message lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The tag does not name a supported locale.
    UnsupportedLocale { tag: String },
    /// Neither the requested nor the default locale has the key.
    MissingMessage { locale: Locale, key: String },
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLocale { tag } => write!(f, "unsupported locale: {tag}"),
            Self::MissingMessage { locale, key } => {
                write!(f, "no message '{key}' for locale {locale}")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// A supported locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
}

impl Locale {
    /// All supported locales, default first.
    pub const ALL: [Self; 3] = [Self::En, Self::Es, Self::Fr];

    /// Returns the language tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Returns the locale's name in its own language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }

    /// Picks the first supported locale from a preference list.
    #[must_use]
    pub fn negotiate<'a>(preferred: impl IntoIterator<Item = &'a str>) -> Self {
        preferred
            .into_iter()
            .find_map(|tag| tag.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    /// Parses a language tag such as `fr`, `fr-CA` or `ES_mx`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.trim().split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(primary))
            .ok_or_else(|| I18nError::UnsupportedLocale { tag: s.to_string() })
    }
}

type Messages = &'static [(&'static str, &'static str)];

const EN: Messages = &[
    ("i18n.title", "Internationalization"),
    ("i18n.greeting", "Hello, and welcome!"),
    (
        "i18n.description",
        "This page renders its text from a small message catalog.",
    ),
    ("i18n.choose", "Choose a language"),
    ("i18n.switched", "Language switched to {language}"),
];

const ES: Messages = &[
    ("i18n.title", "Internacionalización"),
    ("i18n.greeting", "¡Hola y bienvenido!"),
    (
        "i18n.description",
        "Esta página muestra su texto desde un pequeño catálogo de mensajes.",
    ),
    ("i18n.choose", "Elige un idioma"),
    ("i18n.switched", "Idioma cambiado a {language}"),
];

// Partial on purpose: missing keys fall back to English.
const FR: Messages = &[
    ("i18n.title", "Internationalisation"),
    ("i18n.greeting", "Bonjour et bienvenue !"),
    ("i18n.choose", "Choisissez une langue"),
    ("i18n.switched", "Langue changée en {language}"),
];

const TABLES: &[(Locale, Messages)] = &[(Locale::En, EN), (Locale::Es, ES), (Locale::Fr, FR)];

/// Read-only message catalog.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    tables: &'static [(Locale, Messages)],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The catalog compiled into the application.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { tables: TABLES }
    }

    fn find(&self, locale: Locale, key: &str) -> Option<&'static str> {
        self.tables
            .iter()
            .find(|(l, _)| *l == locale)
            .and_then(|(_, messages)| messages.iter().find(|(k, _)| *k == key))
            .map(|(_, message)| *message)
    }

    /// Looks up `key`, falling back to the default locale.
    ///
    /// # Errors
    ///
    /// Returns `MissingMessage` when neither locale defines the key.
    pub fn lookup(&self, locale: Locale, key: &str) -> Result<&'static str, I18nError> {
        self.find(locale, key)
            .or_else(|| self.find(Locale::default(), key))
            .ok_or_else(|| I18nError::MissingMessage {
                locale,
                key: key.to_string(),
            })
    }

    /// Looks up `key` and substitutes `{name}` placeholders.
    ///
    /// # Errors
    ///
    /// Returns `MissingMessage` when neither locale defines the key.
    pub fn format(
        &self,
        locale: Locale,
        key: &str,
        args: &[(&str, &str)],
    ) -> Result<String, I18nError> {
        let template = self.lookup(locale, key)?;
        Ok(args.iter().fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("fr-CA".parse::<Locale>(), Ok(Locale::Fr));
        assert_eq!("ES_mx".parse::<Locale>(), Ok(Locale::Es));
        assert!(matches!(
            "de".parse::<Locale>(),
            Err(I18nError::UnsupportedLocale { .. })
        ));
    }

    #[test]
    fn negotiate_picks_first_supported() {
        assert_eq!(Locale::negotiate(["de-DE", "fr", "es"]), Locale::Fr);
        assert_eq!(Locale::negotiate(["de", "ja"]), Locale::En);
        assert_eq!(Locale::negotiate(Vec::<&str>::new()), Locale::En);
    }

    #[test]
    fn lookup_uses_requested_locale() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.lookup(Locale::Es, "i18n.choose"),
            Ok("Elige un idioma")
        );
    }

    #[test]
    fn lookup_falls_back_to_default_locale() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.lookup(Locale::Fr, "i18n.description"),
            catalog.lookup(Locale::En, "i18n.description")
        );
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = Catalog::builtin()
            .lookup(Locale::Fr, "i18n.nope")
            .expect_err("key is not defined");
        assert_eq!(err.to_string(), "no message 'i18n.nope' for locale fr");
    }

    #[test]
    fn format_substitutes_placeholders() {
        let text = Catalog::builtin()
            .format(Locale::En, "i18n.switched", &[("language", "Español")])
            .expect("message exists");
        assert_eq!(text, "Language switched to Español");
    }

    #[test]
    fn every_locale_has_title_and_greeting() {
        let catalog = Catalog::builtin();
        for locale in Locale::ALL {
            assert!(catalog.find(locale, "i18n.title").is_some());
            assert!(catalog.find(locale, "i18n.greeting").is_some());
        }
    }
}
