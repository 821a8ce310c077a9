//! Sorted, deduplicated set of state abbreviations.

use std::collections::BTreeSet;

/// The states known to the system, ascending and without duplicates.
///
/// # Examples
///
/// ```
/// use weather_server::domain::StateSet;
///
/// let states: StateSet = ["NY", "CA", "NY", "AK"].into_iter().collect();
/// assert_eq!(states.as_slice(), ["AK", "CA", "NY"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateSet(Vec<String>);

impl StateSet {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, state: &str) -> bool {
        self.0.binary_search_by(|s| s.as_str().cmp(state)).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for StateSet {
    /// Blank entries are dropped; the rest are trimmed.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let set: BTreeSet<String> = iter
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self(set.into_iter().collect())
    }
}

impl IntoIterator for StateSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_and_trims() {
        let states: StateSet = [" TX", "", "  ", "TX"].into_iter().collect();
        assert_eq!(states.as_slice(), ["TX"]);
    }

    #[test]
    fn contains_uses_exact_match() {
        let states: StateSet = ["CA", "NY"].into_iter().collect();
        assert!(states.contains("NY"));
        assert!(!states.contains("ny"));
        assert!(!states.contains("TX"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Output is strictly ascending (sorted and duplicate-free)
        #[test]
        fn strictly_ascending(input in proptest::collection::vec("[A-Z]{2}", 0..40)) {
            let states: StateSet = input.iter().collect();
            for pair in states.as_slice().windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        /// Every input state survives
        #[test]
        fn nothing_lost(input in proptest::collection::vec("[A-Z]{2}", 0..40)) {
            let states: StateSet = input.iter().collect();
            for s in &input {
                prop_assert!(states.contains(s));
            }
        }
    }
}
