use crate::animal::{Animal, AnimalId};

/// The modal surface currently shown above the layout.
///
/// A single variant replaces separate "selected animal" and "adopt open"
/// flags, so contradictory combinations cannot be represented. `Adopt` keeps
/// the animal it was opened for; the detail view it replaced is not restored
/// when the form closes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Detail(AnimalId),
    Adopt(AnimalId),
    Donate { prefill: Option<String> },
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::None)
    }

    /// Animal the visible modal is about, if any
    pub fn selected_animal(&self) -> Option<AnimalId> {
        match self {
            Overlay::Detail(id) | Overlay::Adopt(id) => Some(*id),
            _ => None,
        }
    }

    /// Each transition returns whether the overlay changed.
    pub fn open_detail(&mut self, id: AnimalId) -> bool {
        if self.is_open() {
            return false;
        }
        *self = Overlay::Detail(id);
        true
    }

    pub fn close_detail(&mut self) -> bool {
        self.reset_if(|overlay| matches!(overlay, Overlay::Detail(_)))
    }

    /// Replace the detail view with the adoption form.
    ///
    /// No-op unless `animal` is the one being shown and still adoptable.
    pub fn open_adopt(&mut self, animal: &Animal) -> bool {
        let showing = matches!(*self, Overlay::Detail(id) if id == animal.id);
        if !showing || !animal.is_adoptable() {
            return false;
        }
        *self = Overlay::Adopt(animal.id);
        true
    }

    pub fn close_adopt(&mut self) -> bool {
        self.reset_if(|overlay| matches!(overlay, Overlay::Adopt(_)))
    }

    pub fn open_donate(&mut self, prefill: Option<String>) -> bool {
        if self.is_open() {
            return false;
        }
        *self = Overlay::Donate { prefill };
        true
    }

    pub fn close_donate(&mut self) -> bool {
        self.reset_if(|overlay| matches!(overlay, Overlay::Donate { .. }))
    }

    fn reset_if(&mut self, predicate: impl Fn(&Overlay) -> bool) -> bool {
        if predicate(self) {
            *self = Overlay::None;
            true
        } else {
            false
        }
    }
}
