//! Pure helpers deriving views and counts from a slice of items.

use crate::model::Item;

/// Items whose title contains `query`, ignoring case. An empty query keeps
/// everything.
pub fn filter_names<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| title_contains(item, &query_lower))
        .collect()
}

/// Whether `item` belongs to the filtered view for `query`.
pub fn matches(item: &Item, query: &str) -> bool {
    query.is_empty() || title_contains(item, &query.to_lowercase())
}

fn title_contains(item: &Item, query_lower: &str) -> bool {
    item.title.to_lowercase().contains(query_lower)
}

pub fn incomplete_count(items: &[Item]) -> usize {
    items.iter().filter(|item| !item.completed).count()
}

pub fn complete_count(items: &[Item]) -> usize {
    items.iter().filter(|item| item.completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn items(titles: &[&str]) -> Vec<Item> {
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| Item::new(i as i64, *t))
            .collect()
    }

    #[test]
    fn matches_substring_case_insensitively() {
        let list = items(&["Alice", "Bob", "Malice", "carol"]);
        let titles: Vec<_> = filter_names(&list, "ALI")
            .into_iter()
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Alice", "Malice"]);
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let list = items(&["b", "a", "c"]);
        let filtered = filter_names(&list, "");
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].title, "b");
    }

    #[test]
    fn no_match_yields_empty() {
        let list = items(&["Alice"]);
        assert!(filter_names(&list, "zed").is_empty());
    }

    #[test]
    fn matches_agrees_with_filter() {
        let list = items(&["Alice", "Bob"]);
        assert!(matches(&list[0], "lic"));
        assert!(!matches(&list[1], "lic"));
        assert!(matches(&list[1], ""));
    }

    #[test]
    fn counts_by_completion() {
        let mut list = items(&["a", "b", "c"]);
        list[1].completed = true;
        assert_eq!(incomplete_count(&list), 2);
        assert_eq!(complete_count(&list), 1);
    }

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec(("[a-zA-Z ]{0,12}", any::<bool>()), 0..30).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, completed))| {
                    let mut item = Item::new(i as i64, title);
                    item.completed = completed;
                    item
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn filter_is_exact_matching_subset(list in arb_items(), query in "[a-zA-Z]{0,3}") {
            let filtered = filter_names(&list, &query);
            let q = query.to_lowercase();
            let expected: Vec<&Item> = list
                .iter()
                .filter(|i| i.title.to_lowercase().contains(&q))
                .collect();
            prop_assert_eq!(filtered, expected);
        }

        #[test]
        fn counts_sum_to_length(list in arb_items()) {
            prop_assert_eq!(incomplete_count(&list) + complete_count(&list), list.len());
        }
    }
}
