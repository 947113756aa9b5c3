use super::sort::SortDirection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Screen state encoded as a query string, e.g.
/// `q=budi&eq[status]=Lunas&from[date]=01-01-2024&sort=amount&dir=desc&page=2`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Search box text
    #[serde(default)]
    pub q: Option<String>,
    /// Exact-match selections by field
    #[serde(default)]
    pub eq: BTreeMap<String, String>,
    /// Contains filters by field
    #[serde(default)]
    pub like: BTreeMap<String, String>,
    /// Lower date bounds by field
    #[serde(default)]
    pub from: BTreeMap<String, String>,
    /// Upper date bounds by field
    #[serde(default)]
    pub to: BTreeMap<String, String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub dir: Option<SortDirection>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl ListQuery {
    /// Fields carrying a date bound on either side
    pub fn date_range_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self
            .from
            .keys()
            .chain(self.to.keys())
            .map(String::as_str)
            .collect();
        fields.sort_unstable();
        fields.dedup();
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_fields_dedup() {
        let mut query = ListQuery::default();
        query.from.insert("date".into(), "01-01-2024".into());
        query.to.insert("date".into(), "31-01-2024".into());
        query.to.insert("due".into(), "31-01-2024".into());
        assert_eq!(query.date_range_fields(), vec!["date", "due"]);
    }

    #[test]
    fn test_json_defaults() {
        let query: ListQuery = serde_json::from_str(r#"{ "sort": "no", "dir": "desc" }"#).unwrap();
        assert_eq!(query.sort.as_deref(), Some("no"));
        assert_eq!(query.dir, Some(SortDirection::Desc));
        assert!(query.eq.is_empty());
        assert_eq!(query.page, None);
    }
}
