use ahash::AHashSet;

/// Set of strings that enumerates in first-seen order.
#[derive(Debug, Clone, Default)]
pub(crate) struct DistinctValues {
    seen: AHashSet<String>,
    order: Vec<String>,
}

impl DistinctValues {
    pub(crate) fn insert(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string());
        self.order.push(value.to_string());
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
