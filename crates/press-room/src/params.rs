/// Listing query parameters: `q`, `category`, `tag` (repeatable), `from`,
/// `to` and `view`. Unknown keys are ignored; malformed dates are dropped.
use chrono::NaiveDate;
use press_common::filter::SearchFilters;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingParams {
    pub filters: SearchFilters,
    pub view: ViewMode,
}

impl ListingParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut params = Self::default();
        for (key, raw) in pairs {
            let value = raw.trim();
            match key.as_str() {
                // Free text is matched as typed; blank counts as unset.
                "q" => params.filters.query = (!value.is_empty()).then(|| raw.clone()),
                "category" => {
                    params.filters.category = Some(value.to_string()).filter(|v| !v.is_empty())
                }
                "tag" => {
                    if !value.is_empty() && !params.filters.tags.iter().any(|t| t == value) {
                        params.filters.tags.push(value.to_string());
                    }
                }
                "from" => params.filters.date_from = parse_date(key, value),
                "to" => params.filters.date_to = parse_date(key, value),
                "view" => {
                    params.view = if value == "list" { ViewMode::List } else { ViewMode::Grid }
                }
                _ => {}
            }
        }
        params
    }

    pub fn with_filters(&self, filters: SearchFilters) -> Self {
        Self {
            filters,
            view: self.view,
        }
    }

    pub fn with_view(&self, view: ViewMode) -> Self {
        Self {
            filters: self.filters.clone(),
            view,
        }
    }

    /// `?key=value&...`, or an empty string when nothing is set.
    pub fn query_string(&self) -> String {
        let f = &self.filters;
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(q) = f.query_text() {
            pairs.push(("q", q.to_string()));
        }
        if let Some(category) = f.category_value() {
            pairs.push(("category", category.to_string()));
        }
        for tag in &f.tags {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(from) = f.date_from {
            pairs.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = f.date_to {
            pairs.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        if self.view == ViewMode::List {
            pairs.push(("view", "list".to_string()));
        }
        if pairs.is_empty() {
            return String::new();
        }
        let joined: Vec<String> = pairs
            .iter()
            .map(|(k, v)| format!("{k}={}", encode_component(v)))
            .collect();
        format!("?{}", joined.join("&"))
    }
}

fn parse_date(key: &str, value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .inspect_err(|e| debug!(key, value, error = %e, "ignoring malformed date filter"))
        .ok()
}

/// Percent-encode everything outside the URL unreserved set.
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_all_listing_params() {
        let params = ListingParams::from_pairs(&pairs(&[
            ("q", " spa "),
            ("category", "Awards"),
            ("tag", "Luxury"),
            ("tag", "Travel"),
            ("tag", "Luxury"),
            ("from", "2024-01-01"),
            ("to", "2024-12-31"),
            ("view", "list"),
            ("utm_source", "newsletter"),
        ]));
        let f = &params.filters;
        assert_eq!(f.query.as_deref(), Some(" spa "));
        assert_eq!(f.category.as_deref(), Some("Awards"));
        assert_eq!(f.tags, vec!["Luxury", "Travel"]);
        assert_eq!(f.date_from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(f.date_to, NaiveDate::from_ymd_opt(2024, 12, 31));
        assert_eq!(params.view, ViewMode::List);
    }

    #[test]
    fn free_text_keeps_trailing_space() {
        let params = ListingParams::from_pairs(&pairs(&[("q", "gold "), ("category", " Awards ")]));
        assert_eq!(params.filters.query.as_deref(), Some("gold "));
        assert_eq!(params.filters.category.as_deref(), Some("Awards"));
        assert_eq!(params.query_string(), "?q=gold%20&category=Awards");
    }

    #[test]
    fn malformed_and_blank_values_are_unset() {
        let params = ListingParams::from_pairs(&pairs(&[
            ("q", ""),
            ("category", "  "),
            ("from", "01/02/2024"),
            ("to", ""),
        ]));
        assert!(params.filters.is_empty());
        assert_eq!(params.view, ViewMode::Grid);
    }

    #[test]
    fn query_string_percent_encodes_values() {
        let params = ListingParams::from_pairs(&pairs(&[
            ("q", "gold & silver"),
            ("category", "Hotel Openings"),
            ("tag", "Côte d'Azur"),
            ("view", "list"),
        ]));
        let qs = params.query_string();
        assert_eq!(
            qs,
            "?q=gold%20%26%20silver&category=Hotel%20Openings&tag=C%C3%B4te%20d%27Azur&view=list"
        );
    }

    #[test]
    fn empty_params_have_empty_query_string() {
        assert_eq!(ListingParams::default().query_string(), "");
    }
}
