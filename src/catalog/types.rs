//! Show payloads as returned by the TVmaze catalog API.
//!
//! Only the fields the dashboard renders are modelled; everything else in the
//! upstream JSON is ignored.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Show {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    /// HTML fragment, e.g. `<p>A <b>drama</b> about...</p>`
    pub summary: Option<String>,
    pub language: Option<String>,
    pub status: Option<String>,
    pub premiered: Option<NaiveDate>,
    #[serde(default)]
    pub rating: Rating,
    pub image: Option<ShowImage>,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub average: Option<f32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ShowImage {
    pub medium: Option<String>,
    pub original: Option<String>,
}

/// Entry of `/search/shows?q=` results
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    pub show: Show,
}

impl Show {
    /// Case-insensitive genre membership check against a display label.
    pub fn has_genre(&self, label: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(label))
    }

    /// Summary with markup removed, or None when the API sent nothing useful.
    pub fn plain_summary(&self) -> Option<String> {
        let summary = self.summary.as_deref()?;
        let text = HTML_TAG.replace_all(summary, "");
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    pub fn premiered_year(&self) -> Option<i32> {
        self.premiered.map(|d| d.year())
    }

    pub fn thumbnail(&self) -> Option<&str> {
        let image = self.image.as_ref()?;
        image.medium.as_deref().or(image.original.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOW_JSON: &str = r#"{
        "id": 1,
        "url": "https://www.tvmaze.com/shows/1/under-the-dome",
        "name": "Under the Dome",
        "type": "Scripted",
        "language": "English",
        "genres": ["Drama", "Science-Fiction", "Thriller"],
        "status": "Ended",
        "premiered": "2013-06-24",
        "rating": { "average": 6.5 },
        "image": {
            "medium": "https://static.tvmaze.com/uploads/images/medium_portrait/81/202627.jpg",
            "original": "https://static.tvmaze.com/uploads/images/original_untouched/81/202627.jpg"
        },
        "summary": "<p><b>Under the Dome</b> is the story of a small town.</p>",
        "_links": { "self": { "href": "https://api.tvmaze.com/shows/1" } }
    }"#;

    #[test]
    fn test_show_decodes_tvmaze_payload() {
        let show: Show = serde_json::from_str(SHOW_JSON).unwrap();
        assert_eq!(show.id, 1);
        assert_eq!(show.name, "Under the Dome");
        assert_eq!(show.genres.len(), 3);
        assert_eq!(show.rating.average, Some(6.5));
        assert_eq!(show.premiered_year(), Some(2013));
        assert!(show.thumbnail().unwrap().contains("medium_portrait"));
    }

    #[test]
    fn test_show_tolerates_missing_optional_fields() {
        let show: Show =
            serde_json::from_str(r#"{"id": 7, "name": "Bare", "rating": {"average": null}}"#)
                .unwrap();
        assert!(show.genres.is_empty());
        assert_eq!(show.rating.average, None);
        assert_eq!(show.thumbnail(), None);
        assert_eq!(show.plain_summary(), None);
    }

    #[test]
    fn test_has_genre_ignores_case() {
        let show: Show = serde_json::from_str(SHOW_JSON).unwrap();
        assert!(show.has_genre("drama"));
        assert!(show.has_genre("SCIENCE-FICTION"));
        assert!(!show.has_genre("comedy"));
    }

    #[test]
    fn test_plain_summary_strips_markup() {
        let show: Show = serde_json::from_str(SHOW_JSON).unwrap();
        assert_eq!(
            show.plain_summary().as_deref(),
            Some("Under the Dome is the story of a small town.")
        );
    }

    #[test]
    fn test_search_result_decodes() {
        let json = format!(r#"[{{"score": 0.9, "show": {}}}]"#, SHOW_JSON);
        let results: Vec<SearchResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].show.id, 1);
    }
}
