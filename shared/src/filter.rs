use crate::animal::{Animal, Species};
use crate::view::ViewState;
use serde::{Deserialize, Serialize};

/// Category tab selected above the animal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Dog,
    Cat,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 3] = [CategoryFilter::All, CategoryFilter::Dog, CategoryFilter::Cat];

    pub fn matches(&self, animal: &Animal) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Dog => animal.species == Species::Dog,
            CategoryFilter::Cat => animal.species == Species::Cat,
        }
    }
}

/// Animals matching `filter`, in roster order
pub fn filter_animals(roster: &[Animal], filter: CategoryFilter) -> Vec<&Animal> {
    roster.iter().filter(|animal| filter.matches(animal)).collect()
}

/// Cards shown for the current layout: the whole filtered list in the
/// gallery, the first `preview_limit` on the home page.
pub fn display_animals<'a>(filtered: &[&'a Animal], view: ViewState, preview_limit: usize) -> Vec<&'a Animal> {
    match view {
        ViewState::Gallery => filtered.to_vec(),
        ViewState::Home => filtered.iter().take(preview_limit).copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::test_support::animal;

    fn roster() -> Vec<Animal> {
        vec![
            animal(1, Species::Dog),
            animal(2, Species::Cat),
            animal(3, Species::Dog),
            animal(4, Species::Dog),
            animal(5, Species::Cat),
            animal(6, Species::Dog),
        ]
    }

    fn ids(animals: &[&Animal]) -> Vec<u32> {
        animals.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_filter_is_ordered_subsequence() {
        let roster = roster();
        for filter in CategoryFilter::ALL {
            let expected: Vec<u32> = roster.iter().filter(|a| filter.matches(a)).map(|a| a.id).collect();
            assert_eq!(ids(&filter_animals(&roster, filter)), expected);
        }
        assert_eq!(ids(&filter_animals(&roster, CategoryFilter::All)), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ids(&filter_animals(&roster, CategoryFilter::Dog)), vec![1, 3, 4, 6]);
        assert_eq!(ids(&filter_animals(&roster, CategoryFilter::Cat)), vec![2, 5]);
    }

    #[test]
    fn test_home_shows_prefix_of_gallery() {
        let roster = roster();
        for filter in CategoryFilter::ALL {
            let filtered = filter_animals(&roster, filter);
            let gallery = display_animals(&filtered, ViewState::Gallery, 3);
            let home = display_animals(&filtered, ViewState::Home, 3);

            assert_eq!(ids(&gallery), ids(&filtered));
            assert_eq!(home.len(), filtered.len().min(3));
            assert_eq!(ids(&home), ids(&gallery[..home.len()]));
        }
    }

    #[test]
    fn test_short_dog_list_scenario() {
        let roster = vec![animal(1, Species::Dog), animal(2, Species::Cat), animal(3, Species::Dog)];
        let filtered = filter_animals(&roster, CategoryFilter::Dog);
        assert_eq!(ids(&filtered), vec![1, 3]);
        assert_eq!(ids(&display_animals(&filtered, ViewState::Home, 3)), vec![1, 3]);
    }

    #[test]
    fn test_empty_roster() {
        let filtered = filter_animals(&[], CategoryFilter::Cat);
        assert!(display_animals(&filtered, ViewState::Home, 3).is_empty());
    }
}
