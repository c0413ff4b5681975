/// In-memory search and filtering over an already-fetched release list.
///
/// Every active criterion is ANDed. Output keeps the input order, so a list
/// fetched newest-first stays newest-first.
use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::PressRelease;

/// Transient, user-selected criteria. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub query: Option<String>,
    pub category: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// Match-any: a release needs at least one of these tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.query_text().is_none() && !self.has_facets()
    }

    /// True when anything besides the free-text query is set.
    pub fn has_facets(&self) -> bool {
        self.category_value().is_some()
            || self.date_from.is_some()
            || self.date_to.is_some()
            || !self.tags.is_empty()
    }

    pub fn query_text(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.trim().is_empty())
    }

    pub fn category_value(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// First instant of `date_from`.
    pub fn lower_bound(&self) -> Option<DateTime<Utc>> {
        self.date_from
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    /// Last millisecond of `date_to` (23:59:59.999).
    pub fn upper_bound(&self) -> Option<DateTime<Utc>> {
        self.date_to
            .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999))
            .map(|naive| naive.and_utc())
    }

    pub fn matches(&self, release: &PressRelease) -> bool {
        if let Some(query) = self.query_text() {
            if !matches_query(release, &query.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = self.category_value() {
            if release.category != category {
                return false;
            }
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|t| release.tags.contains(t)) {
            return false;
        }
        if let Some(from) = self.lower_bound() {
            if release.publish_date < from {
                return false;
            }
        }
        if let Some(to) = self.upper_bound() {
            if release.publish_date > to {
                return false;
            }
        }
        true
    }

    /// Same filters with one tag toggled on or off.
    pub fn toggle_tag(&self, tag: &str) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.tags.iter().position(|t| t == tag) {
            next.tags.remove(pos);
        } else {
            next.tags.push(tag.to_string());
        }
        next
    }

    /// Same filters with the category selected, or cleared if it already was.
    pub fn toggle_category(&self, category: &str) -> Self {
        let mut next = self.clone();
        next.category = if self.category_value() == Some(category) {
            None
        } else {
            Some(category.to_string())
        };
        next
    }

    /// Drop every facet but keep the free-text query.
    pub fn clear_facets(&self) -> Self {
        Self {
            query: self.query.clone(),
            ..Self::default()
        }
    }
}

fn matches_query(release: &PressRelease, needle: &str) -> bool {
    let hit = |s: &str| s.to_lowercase().contains(needle);
    hit(&release.title)
        || hit(&release.summary)
        || hit(&release.category)
        || release.tags.iter().any(|t| hit(t))
}

/// Releases matching `filters`, in input order.
pub fn apply(items: &[PressRelease], filters: &SearchFilters) -> Vec<PressRelease> {
    items.iter().filter(|r| filters.matches(r)).cloned().collect()
}

/// Sorted, deduplicated union of every release's tags. Case-sensitive.
pub fn distinct_tags(items: &[PressRelease]) -> Vec<String> {
    sorted_unique(items.iter().flat_map(|r| r.tags.iter()))
}

pub(crate) fn sorted_unique<'a, I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    tags.into_iter()
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::rich_text::Document;

    fn release(slug: &str, category: &str, tags: &[&str], date: DateTime<Utc>) -> PressRelease {
        PressRelease {
            id: slug.to_string(),
            title: format!("Release {slug}"),
            slug: slug.to_string(),
            publish_date: date,
            summary: format!("Summary for {slug}"),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            cover_image: None,
            content: Document::default(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn sample() -> Vec<PressRelease> {
        vec![
            release("gold-key", "Awards", &["Luxury", "Travel"], day(2024, 6, 1)),
            release("lisbon", "Hotel Openings", &["Lisbon"], day(2024, 5, 2)),
            release("world-best", "Awards", &["Spa"], day(2024, 4, 20)),
            release("ceo", "Executive News", &[], day(2024, 3, 1)),
            release("green", "Sustainability", &["Travel", "Green"], day(2024, 1, 15)),
        ]
    }

    fn slugs(items: &[PressRelease]) -> Vec<&str> {
        items.iter().map(|r| r.slug.as_str()).collect()
    }

    #[test]
    fn empty_filter_is_identity() {
        let items = sample();
        assert_eq!(apply(&items, &SearchFilters::default()), items);
    }

    #[test]
    fn empty_strings_are_no_ops() {
        let items = sample();
        let filters = SearchFilters {
            query: Some(String::new()),
            category: Some(String::new()),
            ..Default::default()
        };
        assert!(filters.is_empty());
        assert_eq!(apply(&items, &filters), items);
    }

    #[test]
    fn category_filter_keeps_publish_order() {
        let items = sample();
        let filters = SearchFilters {
            category: Some("Awards".to_string()),
            ..Default::default()
        };
        let out = apply(&items, &filters);
        assert_eq!(slugs(&out), vec!["gold-key", "world-best"]);
    }

    #[test]
    fn query_is_case_insensitive_across_fields() {
        let items = sample();
        let by = |q: &str| {
            let f = SearchFilters {
                query: Some(q.to_string()),
                ..Default::default()
            };
            slugs(&apply(&items, &f)).into_iter().map(String::from).collect::<Vec<_>>()
        };
        assert_eq!(by("LISBON"), vec!["lisbon"]);
        assert_eq!(by("summary for ceo"), vec!["ceo"]);
        assert_eq!(by("executive"), vec!["ceo"]);
        assert_eq!(by("spa"), vec!["world-best"]);
        assert!(by("nothing matches this").is_empty());
    }

    #[test]
    fn tags_match_any() {
        let items = sample();
        let filters = SearchFilters {
            tags: vec!["Spa".to_string(), "Green".to_string()],
            ..Default::default()
        };
        assert_eq!(slugs(&apply(&items, &filters)), vec!["world-best", "green"]);
    }

    #[test]
    fn tag_match_is_exact() {
        let items = sample();
        let filters = SearchFilters {
            tags: vec!["travel".to_string()],
            ..Default::default()
        };
        assert!(apply(&items, &filters).is_empty());
    }

    #[test]
    fn date_bounds_are_inclusive_to_end_of_day() {
        let to = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let end_of_day = Utc.with_ymd_and_hms(2024, 5, 2, 23, 59, 59).unwrap()
            + Duration::milliseconds(999);
        let items = vec![
            release("at-end", "Events", &[], end_of_day),
            release("after-end", "Events", &[], end_of_day + Duration::milliseconds(1)),
            release("at-start", "Events", &[], Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap()),
        ];
        let filters = SearchFilters {
            date_from: Some(to),
            date_to: Some(to),
            ..Default::default()
        };
        assert_eq!(slugs(&apply(&items, &filters)), vec!["at-end", "at-start"]);
    }

    #[test]
    fn extreme_dates_do_not_overflow() {
        let items = sample();
        let filters = SearchFilters {
            date_from: Some(NaiveDate::MIN),
            date_to: Some(NaiveDate::MAX),
            ..Default::default()
        };
        assert!(filters.upper_bound().is_some());
        assert!(filters.lower_bound().is_some());
        assert_eq!(apply(&items, &filters), items);

        let signed = NaiveDate::parse_from_str("+262142-12-31", "%Y-%m-%d").unwrap();
        assert_eq!(signed, NaiveDate::MAX);
    }

    #[test]
    fn query_keeps_surrounding_spaces() {
        let items = vec![
            release("gold key", "Awards", &[], day(2024, 2, 1)),
            release("golden", "Awards", &[], day(2024, 1, 1)),
        ];
        let filters = SearchFilters {
            query: Some("gold ".to_string()),
            ..Default::default()
        };
        assert_eq!(slugs(&apply(&items, &filters)), vec!["gold key"]);

        let blank = SearchFilters {
            query: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(blank.is_empty());
    }

    #[test]
    fn date_bounds_apply_independently() {
        let items = sample();
        let from_only = SearchFilters {
            date_from: NaiveDate::from_ymd_opt(2024, 5, 1),
            ..Default::default()
        };
        assert_eq!(slugs(&apply(&items, &from_only)), vec!["gold-key", "lisbon"]);

        let to_only = SearchFilters {
            date_to: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        assert_eq!(slugs(&apply(&items, &to_only)), vec!["ceo", "green"]);
    }

    #[test]
    fn criteria_are_anded() {
        let items = sample();
        let filters = SearchFilters {
            query: Some("release".to_string()),
            category: Some("Awards".to_string()),
            tags: vec!["Travel".to_string()],
            ..Default::default()
        };
        assert_eq!(slugs(&apply(&items, &filters)), vec!["gold-key"]);
    }

    #[test]
    fn apply_is_idempotent() {
        let items = sample();
        let filters = SearchFilters {
            query: Some("a".to_string()),
            tags: vec!["Travel".to_string(), "Spa".to_string()],
            date_to: NaiveDate::from_ymd_opt(2024, 12, 31),
            ..Default::default()
        };
        let once = apply(&items, &filters);
        assert_eq!(apply(&once, &filters), once);
    }

    #[test]
    fn distinct_tags_sorted_and_deduplicated() {
        let items = vec![
            release("one", "Events", &["b", "a"], day(2024, 1, 1)),
            release("two", "Events", &["b"], day(2024, 1, 2)),
            release("three", "Events", &["B"], day(2024, 1, 3)),
        ];
        assert_eq!(distinct_tags(&items), vec!["B", "a", "b"]);
        assert!(distinct_tags(&[]).is_empty());
    }

    #[test]
    fn toggles_build_follow_up_filters() {
        let base = SearchFilters {
            query: Some("spa".to_string()),
            category: Some("Awards".to_string()),
            tags: vec!["Spa".to_string()],
            ..Default::default()
        };
        assert!(base.toggle_tag("Spa").tags.is_empty());
        assert_eq!(base.toggle_tag("Green").tags, vec!["Spa", "Green"]);
        assert_eq!(base.toggle_category("Awards").category, None);
        assert_eq!(base.toggle_category("Events").category.as_deref(), Some("Events"));

        let cleared = base.clear_facets();
        assert_eq!(cleared.query.as_deref(), Some("spa"));
        assert!(!cleared.has_facets());
    }
}
