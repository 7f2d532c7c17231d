use crate::locale::{Locale, Localized};
use serde::{Deserialize, Serialize};

pub type AnimalId = u32;

/// Kind of animal, used by the category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

/// An adoptable animal from the shelter roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub breed: String,
    /// Free-form age label, e.g. "2 Years"
    pub age: String,
    #[serde(rename = "type")]
    pub species: Species,
    pub gender: Gender,
    pub size: Size,
    /// Image URL
    pub image: String,
    pub description: Localized<String>,
    pub tags: Localized<Vec<String>>,
    /// Already found a home; cannot be adopted again
    #[serde(default)]
    pub adopted: bool,
}

impl Animal {
    pub fn description(&self, locale: Locale) -> &str {
        self.description.get(locale)
    }

    pub fn tags(&self, locale: Locale) -> &[String] {
        self.tags.get(locale)
    }

    pub fn is_adoptable(&self) -> bool {
        !self.adopted
    }
}
