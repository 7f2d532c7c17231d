use crate::animal::{Animal, AnimalId};
use crate::locale::Locale;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while loading the embedded data documents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("animal roster is malformed: {0}")]
    Roster(String),
    #[error("adoption statistics are malformed: {0}")]
    Stats(String),
    #[error("string table for {locale} is malformed: {message}")]
    Dictionary { locale: Locale, message: String },
    #[error("animal id {0} appears more than once in the roster")]
    DuplicateAnimal(AnimalId),
}

/// One bar of the adoption chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptionDatum {
    /// Month label
    pub name: String,
    pub value: u32,
}

/// The static roster and chart series, in table order
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    animals: Vec<Animal>,
    adoption_stats: Vec<AdoptionDatum>,
}

impl Catalog {
    pub fn new(animals: Vec<Animal>, adoption_stats: Vec<AdoptionDatum>) -> Result<Self, DataError> {
        let mut seen = HashSet::new();
        for animal in &animals {
            if !seen.insert(animal.id) {
                return Err(DataError::DuplicateAnimal(animal.id));
            }
        }
        Ok(Self { animals, adoption_stats })
    }

    pub fn parse(roster_json: &str, stats_json: &str) -> Result<Self, DataError> {
        let animals: Vec<Animal> =
            serde_json::from_str(roster_json).map_err(|e| DataError::Roster(e.to_string()))?;
        let adoption_stats: Vec<AdoptionDatum> =
            serde_json::from_str(stats_json).map_err(|e| DataError::Stats(e.to_string()))?;
        Self::new(animals, adoption_stats)
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn adoption_stats(&self) -> &[AdoptionDatum] {
        &self.adoption_stats
    }

    pub fn find(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.iter().find(|animal| animal.id == id)
    }
}

static CATALOG: Lazy<Result<Catalog, DataError>> = Lazy::new(|| {
    Catalog::parse(
        include_str!("../data/animals.json"),
        include_str!("../data/adoption_stats.json"),
    )
});

/// The embedded site catalog, parsed on first access
pub fn catalog() -> Result<&'static Catalog, DataError> {
    CATALOG.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::test_support::animal;
    use crate::animal::Species;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = catalog().unwrap();
        assert!(catalog.animals().len() > 3, "home preview needs more than 3 animals to be meaningful");
        assert!(catalog.animals().iter().any(|a| a.species == Species::Dog));
        assert!(catalog.animals().iter().any(|a| a.species == Species::Cat));
        assert!(catalog.animals().iter().any(|a| a.adopted));
        assert_eq!(catalog.adoption_stats().len(), 6);
    }

    #[test]
    fn test_every_animal_is_fully_translated() {
        for animal in catalog().unwrap().animals() {
            for locale in Locale::ALL {
                assert!(!animal.description(locale).is_empty(), "{} lacks {} description", animal.name, locale);
                assert!(!animal.tags(locale).is_empty(), "{} lacks {} tags", animal.name, locale);
            }
        }
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![animal(1, Species::Dog), animal(1, Species::Cat)], vec![]);
        assert_eq!(result.unwrap_err(), DataError::DuplicateAnimal(1));
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::new(vec![animal(4, Species::Dog), animal(9, Species::Cat)], vec![]).unwrap();
        assert_eq!(catalog.find(9).map(|a| a.species), Some(Species::Cat));
        assert!(catalog.find(5).is_none());
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(Catalog::parse("{", "[]"), Err(DataError::Roster(_))));
        assert!(matches!(Catalog::parse("[]", "[{\"name\": 3}]"), Err(DataError::Stats(_))));
    }
}
