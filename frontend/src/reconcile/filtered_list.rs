/// Item exposing the single field the list search matches against.
pub trait Searchable {
    fn search_key(&self) -> &str;
}

/// Raw rows as fetched plus the subset matching the current search term.
/// Filtering always starts from the raw rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredList<T> {
    raw: Vec<T>,
    filtered: Vec<T>,
    term: String,
}

impl<T> Default for FilteredList<T> {
    fn default() -> Self {
        Self {
            raw: Vec::new(),
            filtered: Vec::new(),
            term: String::new(),
        }
    }
}

impl<T: Searchable + Clone> FilteredList<T> {
    pub fn new(raw: Vec<T>) -> Self {
        let mut list = Self::default();
        list.set_raw(raw);
        list
    }

    /// Replace the fetched rows; the active term is re-applied.
    pub fn set_raw(&mut self, raw: Vec<T>) {
        self.raw = raw;
        self.refilter();
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.refilter();
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn raw(&self) -> &[T] {
        &self.raw
    }

    pub fn items(&self) -> &[T] {
        &self.filtered
    }

    fn refilter(&mut self) {
        if self.term.is_empty() {
            self.filtered = self.raw.clone();
            return;
        }
        let needle = self.term.to_lowercase();
        self.filtered = self
            .raw
            .iter()
            .filter(|item| item.search_key().to_lowercase().contains(&needle))
            .cloned()
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn search_key(&self) -> &str {
            self.0
        }
    }

    fn rows() -> Vec<Row> {
        vec![Row("Amal Perera"), Row("Nadee Fernando"), Row("Kamal Silva")]
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut list = FilteredList::new(rows());
        list.set_term("AMAL");
        assert_eq!(list.items(), &[Row("Amal Perera"), Row("Kamal Silva")]);

        list.set_term("zzz");
        assert!(list.items().is_empty());
    }

    #[test]
    fn clearing_the_term_restores_raw_order_for_any_term() {
        for term in ["a", "Nadee", "zzz", "  ", "é"] {
            let mut list = FilteredList::new(rows());
            list.set_term(term);
            list.set_term("");
            assert_eq!(list.items(), list.raw());
            assert_eq!(list.items(), rows().as_slice());
        }
    }

    #[test]
    fn narrowing_then_widening_draws_from_raw_rows() {
        let mut list = FilteredList::new(rows());
        list.set_term("Kamal");
        list.set_term("a");
        assert_eq!(list.items().len(), 3);
    }

    #[test]
    fn replacing_raw_rows_reapplies_active_term() {
        let mut list = FilteredList::new(rows());
        list.set_term("silva");
        list.set_raw(vec![Row("Ruwan Silva"), Row("Amal Perera")]);
        assert_eq!(list.items(), &[Row("Ruwan Silva")]);
        assert_eq!(list.term(), "silva");
    }
}
