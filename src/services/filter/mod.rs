//! Conjunctive list filtering shared by the review views.

use chrono::NaiveDate;

/// A set of independent predicates over records of type `T`.
///
/// `matches` must be the logical AND of every active predicate, so adding a
/// predicate can only narrow the result.
pub trait RecordFilter<T> {
    fn matches(&self, item: &T, today: NaiveDate) -> bool;

    /// Matching records in source order
    fn apply<'a>(&self, items: &'a [T], today: NaiveDate) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item, today)).collect()
    }

    fn count(&self, items: &[T], today: NaiveDate) -> usize {
        items.iter().filter(|item| self.matches(item, today)).count()
    }
}

/// Case-insensitive substring test; an empty needle matches everything
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// `None` accepts every value
pub fn matches_option<V: PartialEq>(selected: Option<V>, value: V) -> bool {
    selected.map_or(true, |wanted| wanted == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EvenOnly;

    impl RecordFilter<u32> for EvenOnly {
        fn matches(&self, item: &u32, _today: NaiveDate) -> bool {
            item % 2 == 0
        }
    }

    #[test]
    fn test_apply_preserves_order() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let items = [8, 3, 2, 6, 5];
        let kept: Vec<u32> = EvenOnly.apply(&items, today).into_iter().copied().collect();
        assert_eq!(kept, vec![8, 2, 6]);
        assert_eq!(EvenOnly.count(&items, today), 3);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Staples Canada", "staples"));
        assert!(contains_ignore_case("Staples Canada", ""));
        assert!(contains_ignore_case("Staples Canada", "  "));
        assert!(!contains_ignore_case("Staples Canada", "adobe"));
    }

    #[test]
    fn test_matches_option() {
        assert!(matches_option(None, 3));
        assert!(matches_option(Some(3), 3));
        assert!(!matches_option(Some(4), 3));
    }
}
