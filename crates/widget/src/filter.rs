//! Search-driven filtering of a menu level.
//!
//! Each keystroke recomputes the whole visible set from scratch: a
//! case-insensitive substring match per row, the derived group and
//! separator visibility, and the first visible row to re-select. No
//! incremental diffing; a single O(n) pass stays interactive well
//! into the hundreds of rows.
use crate::collection::{Collection, RowFlags};

/// The result of applying a query to a [`Collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Whether no row at all matched (the empty state).
    pub is_empty: bool,
    /// The first visible navigable index, to be highlighted and
    /// scrolled into view.
    pub first_visible: Option<usize>,
}

/// Applies the given query to the collection.
///
/// Every row label is compared case-insensitively against the query;
/// non-matches are hidden and lose the highlight. An empty query
/// matches every row. Group visibility is re-derived afterwards:
/// a group is visible iff at least one member is, and its trailing
/// separator mirrors it.
pub fn apply(query: &str, collection: &mut Collection) -> Outcome {
    let needle = query.to_lowercase();

    for key in collection.keys() {
        let matches = {
            let Some(row) = collection.row_mut(key) else {
                continue;
            };

            let matches = needle.is_empty() || row.label.to_lowercase().contains(&needle);
            row.flags.set(RowFlags::HIDDEN, !matches);

            matches
        };

        if !matches {
            collection.clear_highlight_if(key);
        }
    }

    collection.recompute_group_visibility();

    let first_visible = collection.first_visible();

    Outcome {
        is_empty: first_visible.is_none() && !collection.is_empty(),
        first_visible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu;

    fn collection() -> Collection {
        Collection::scan(&[
            menu::item("Calendar", "calendar"),
            menu::item("Calculator", "calculator"),
            menu::item("Terminal", "terminal"),
        ])
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut collection = collection();

        let outcome = apply("CAL", &mut collection);

        assert!(!outcome.is_empty);
        assert_eq!(collection.visible_len(), 2);
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let mut collection = collection();

        let _ = apply("cal", &mut collection);
        let outcome = apply("", &mut collection);

        assert!(!outcome.is_empty);
        assert_eq!(collection.visible_len(), 3);
        assert_eq!(outcome.first_visible, Some(0));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut first = collection();
        let mut second = collection();

        let once = apply("cal", &mut first);
        let _ = apply("cal", &mut second);
        let twice = apply("cal", &mut second);

        assert_eq!(once, twice);

        let visible =
            |collection: &Collection| -> Vec<bool> {
                (0..collection.len())
                    .map(|index| collection.is_visible_at(index))
                    .collect()
            };
        assert_eq!(visible(&first), visible(&second));
    }

    #[test]
    fn test_no_match_reports_empty_and_clears_highlight() {
        let mut collection = collection();
        let _ = collection.hover(menu::MenuId::from_str("terminal"));

        let outcome = apply("zzz", &mut collection);

        assert!(outcome.is_empty);
        assert_eq!(outcome.first_visible, None);
        assert_eq!(collection.highlighted(), None);
    }

    #[test]
    fn test_group_visibility_follows_members() {
        let mut collection = Collection::scan(&[
            menu::named_group("Tools", vec![menu::item("Calculator", "calculator")]),
            menu::named_group("Apps", vec![menu::item("Terminal", "terminal")]),
        ]);

        let _ = apply("calc", &mut collection);

        assert!(collection.groups()[0].is_visible());
        assert!(collection.groups()[0].separator_visible());
        assert!(!collection.groups()[1].is_visible());
        assert!(!collection.groups()[1].separator_visible());
    }

    #[test]
    fn test_first_visible_skips_hidden_rows() {
        let mut collection = collection();

        let outcome = apply("terminal", &mut collection);

        assert_eq!(outcome.first_visible, Some(2));
    }

    #[test]
    fn test_completeness_visible_iff_substring_matches() {
        let mut collection = collection();
        let _ = apply("al", &mut collection);

        let labels = ["Calendar", "Calculator", "Terminal"];
        for (index, label) in labels.iter().enumerate() {
            assert_eq!(
                collection.is_visible_at(index),
                label.to_lowercase().contains("al"),
                "row {label} disagrees with the match predicate"
            );
        }
    }
}
