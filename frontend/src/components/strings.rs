use loklok_shared::{dictionary, DataError, Dictionary, Locale};
use std::ops::Deref;

/// Handle on a locale's static string table.
///
/// Tables are loaded once per locale, so props compare by address rather
/// than walking every string on each render.
#[derive(Debug, Clone, Copy)]
pub struct Strings(&'static Dictionary);

impl Strings {
    pub fn load(locale: Locale) -> Result<Self, DataError> {
        dictionary(locale).map(Strings)
    }
}

impl PartialEq for Strings {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Deref for Strings {
    type Target = Dictionary;

    fn deref(&self) -> &Dictionary {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_locale_compares_equal() {
        let a = Strings::load(Locale::Tr).unwrap();
        let b = Strings::load(Locale::Tr).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Strings::load(Locale::En).unwrap());
        assert_eq!(a.nav.home, "Ana Sayfa");
    }
}
