//! Normalized search queries over the Pokemon dataset

/// How matching rows are selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// All matching rows, ordered by the dataset's "order" column
    All,
    /// A single row chosen at random by the data store
    RandomOne,
}

/// A normalized query: optional name filter plus selection mode.
///
/// The filter is trimmed at construction; a filter that is empty after
/// trimming counts as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonQuery {
    name_filter: Option<String>,
    selection: SelectionMode,
}

impl PokemonQuery {
    pub fn new(name_filter: Option<String>, selection: SelectionMode) -> Self {
        let name_filter = name_filter
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());
        Self {
            name_filter,
            selection,
        }
    }

    pub fn name_filter(&self) -> Option<&str> {
        self.name_filter.as_deref()
    }

    pub fn selection(&self) -> SelectionMode {
        self.selection
    }

    pub fn is_random(&self) -> bool {
        self.selection == SelectionMode::RandomOne
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_trimmed() {
        let query = PokemonQuery::new(Some("  pika  ".to_string()), SelectionMode::All);
        assert_eq!(query.name_filter(), Some("pika"));
    }

    #[test]
    fn test_blank_filter_counts_as_absent() {
        let query = PokemonQuery::new(Some("   ".to_string()), SelectionMode::All);
        assert_eq!(query.name_filter(), None);

        let query = PokemonQuery::new(Some(String::new()), SelectionMode::All);
        assert_eq!(query.name_filter(), None);
    }

    #[test]
    fn test_missing_filter() {
        let query = PokemonQuery::new(None, SelectionMode::RandomOne);
        assert_eq!(query.name_filter(), None);
        assert!(query.is_random());
    }

    #[test]
    fn test_selection_mode() {
        assert!(!PokemonQuery::new(None, SelectionMode::All).is_random());
        assert!(PokemonQuery::new(None, SelectionMode::RandomOne).is_random());
    }
}
