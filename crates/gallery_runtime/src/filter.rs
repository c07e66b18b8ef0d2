//! Pure search filtering over the icon catalog.

use crate::registry::IconDescriptor;

/// Filters descriptors by case-insensitive substring match on name or
/// description.
///
/// Pure over its inputs: no signals, no DOM, no shared state. Relative
/// catalog order is preserved, an empty query returns everything, and the
/// category field is deliberately ignored.
pub fn filter_icons(descriptors: &[IconDescriptor], query: &str) -> Vec<IconDescriptor> {
    if query.is_empty() {
        return descriptors.to_vec();
    }
    let needle = query.to_lowercase();
    descriptors
        .iter()
        .filter(|descriptor| {
            descriptor.name.to_lowercase().contains(&needle)
                || descriptor.description.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::registry::icon_registry;

    fn entry(id: u32, name: &'static str, description: &'static str) -> IconDescriptor {
        IconDescriptor {
            id,
            name,
            description,
            category: "Test",
            component_key: "TestIcon",
        }
    }

    #[test]
    fn empty_query_returns_the_catalog_unchanged() {
        let filtered = filter_icons(icon_registry(), "");
        assert_eq!(filtered, icon_registry().to_vec());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = [entry(1, "Heart Icon", ""), entry(2, "Fire Icon", "")];
        let lower = filter_icons(&catalog, "heart");
        let upper = filter_icons(&catalog, "HEART");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].id, 1);
    }

    #[test]
    fn uppercase_and_lowercase_queries_agree_on_the_real_catalog() {
        let upper = filter_icons(icon_registry(), "HOME");
        let lower = filter_icons(icon_registry(), "home");
        assert_eq!(upper, lower);
        assert!(!lower.is_empty());
    }

    #[test]
    fn short_query_hits_every_name_containing_it() {
        let catalog = [
            entry(1, "Profile Icon", ""),
            entry(2, "Search Icon", ""),
            entry(3, "Fire Icon", ""),
        ];
        let ids: Vec<u32> = filter_icons(&catalog, "ic")
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn description_text_is_searchable() {
        let catalog = [
            entry(1, "Opaque Name", "an animated scanning effect"),
            entry(2, "Other", "nothing here"),
        ];
        let filtered = filter_icons(&catalog, "scanning");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn category_is_not_consulted() {
        let catalog = [IconDescriptor {
            id: 1,
            name: "Heart Icon",
            description: "",
            category: "Navigation",
            component_key: "HeartIcon",
        }];
        assert!(filter_icons(&catalog, "navigation").is_empty());
    }

    #[test]
    fn relative_order_is_preserved() {
        let catalog = [
            entry(3, "Arrow One", ""),
            entry(1, "Arrow Two", ""),
            entry(2, "Arrow Three", ""),
        ];
        let ids: Vec<u32> = filter_icons(&catalog, "arrow")
            .iter()
            .map(|entry| entry.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn unmatched_query_returns_empty() {
        assert!(filter_icons(icon_registry(), "zzzz-no-such-icon").is_empty());
    }

    #[test]
    fn narrowing_a_query_never_widens_the_result() {
        let broad = filter_icons(icon_registry(), "icon");
        let narrow = filter_icons(icon_registry(), "search icon");
        assert!(narrow.len() <= broad.len());
        for entry in &narrow {
            assert!(broad.contains(entry));
        }
    }

    #[test]
    fn whitespace_only_queries_match_spaced_text_literally() {
        let catalog = [entry(1, "Heart Icon", ""), entry(2, "Solo", "")];
        let filtered = filter_icons(&catalog, " ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }
}
