use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display language of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "TR")]
    Tr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

    /// Short tag shown in the language switcher ("EN", "TR")
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Tr => "TR",
        }
    }

    /// Name of the language in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Tr => "Türkçe",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale tag: {0:?}")]
pub struct LocaleError(pub String);

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EN" => Ok(Locale::En),
            "TR" => Ok(Locale::Tr),
            _ => Err(LocaleError(s.to_string())),
        }
    }
}

/// A value carried once per supported language.
///
/// Entity data (descriptions, tags) is stored this way instead of going
/// through the shared string table, so each record stays self-contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub tr: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, tr: T) -> Self {
        Self { en, tr }
    }

    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Tr => &self.tr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_tags() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("tr".parse::<Locale>().unwrap(), Locale::Tr);
        assert_eq!(" Tr ".parse::<Locale>().unwrap(), Locale::Tr);

        let err = "DE".parse::<Locale>().unwrap_err();
        assert_eq!(err, LocaleError("DE".to_string()));
    }

    #[test]
    fn test_tag_round_trips_through_display() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_localized_get() {
        let greeting = Localized::new("Hello", "Merhaba");
        assert_eq!(*greeting.get(Locale::En), "Hello");
        assert_eq!(*greeting.get(Locale::Tr), "Merhaba");
    }

    #[test]
    fn test_serde_uses_upper_case_tags() {
        assert_eq!(serde_json::to_string(&Locale::Tr).unwrap(), "\"TR\"");
        let parsed: Locale = serde_json::from_str("\"EN\"").unwrap();
        assert_eq!(parsed, Locale::En);
    }
}
