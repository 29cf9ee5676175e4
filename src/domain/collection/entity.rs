use serde::{Deserialize, Serialize};

use crate::domain::artwork::Artwork;

/// The user's saved artworks for this session.
/// Insertion order is the order items were added; ids are unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collection {
    items: Vec<Artwork>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Artwork] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Artwork> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append unless an artwork with the same id is already saved
    pub fn add(&mut self, artwork: Artwork) -> bool {
        if self.contains(&artwork.id) {
            return false;
        }
        self.items.push(artwork);
        true
    }

    /// Remove by id; returns the removed artwork if it was present
    pub fn remove(&mut self, id: &str) -> Option<Artwork> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Swap in a newer copy of an already-saved artwork, keeping its position
    pub fn replace(&mut self, artwork: Artwork) -> bool {
        match self.items.iter_mut().find(|item| item.id == artwork.id) {
            Some(slot) => {
                *slot = artwork;
                true
            }
            None => false,
        }
    }
}

/// Artworks picked in the current view but not yet saved.
/// Ordered by first selection; ids are unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionSet {
    items: Vec<Artwork>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Artwork] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Select if absent, deselect if present. Returns true when the
    /// artwork is selected afterwards.
    pub fn toggle(&mut self, artwork: Artwork) -> bool {
        if let Some(index) = self.items.iter().position(|item| item.id == artwork.id) {
            self.items.remove(index);
            false
        } else {
            self.items.push(artwork);
            true
        }
    }

    pub fn replace(&mut self, artwork: Artwork) -> bool {
        match self.items.iter_mut().find(|item| item.id == artwork.id) {
            Some(slot) => {
                *slot = artwork;
                true
            }
            None => false,
        }
    }

    /// Empty the selection, handing back what was selected in order
    pub fn drain(&mut self) -> Vec<Artwork> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artwork::SourceKind;

    fn artwork(native_id: &str) -> Artwork {
        Artwork::new(SourceKind::Vam, native_id, None, None, None)
    }

    #[test]
    fn test_collection_rejects_duplicate_ids() {
        let mut collection = Collection::new();
        assert!(collection.add(artwork("O1")));
        assert!(!collection.add(artwork("O1")));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_collection_remove_absent_is_noop() {
        let mut collection = Collection::new();
        collection.add(artwork("O1"));
        assert!(collection.remove("vam-O2").is_none());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_collection_replace_keeps_position() {
        let mut collection = Collection::new();
        collection.add(artwork("O1"));
        collection.add(artwork("O2"));

        let mut updated = artwork("O1");
        updated.description = Some("Enriched".to_string());
        assert!(collection.replace(updated));

        assert_eq!(collection.items()[0].description.as_deref(), Some("Enriched"));
        assert_eq!(collection.items()[1].id, "vam-O2");
    }

    #[test]
    fn test_selection_toggle_is_idempotent_pairwise() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle(artwork("O1")));
        assert!(!selection.toggle(artwork("O1")));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_drain_preserves_order() {
        let mut selection = SelectionSet::new();
        selection.toggle(artwork("O2"));
        selection.toggle(artwork("O1"));

        let drained: Vec<String> = selection.drain().into_iter().map(|a| a.id).collect();
        assert_eq!(drained, vec!["vam-O2", "vam-O1"]);
        assert!(selection.is_empty());
    }
}
