use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upper bound of the rating scale
pub const MAX_RATING: f64 = 10.0;

/// A movie as shown in the carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Average rating on a 0-10 scale
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Poster image URI
    #[serde(default)]
    pub poster: Option<String>,
    /// Backdrop image URI
    #[serde(default)]
    pub backdrop: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

impl MovieRecord {
    /// Rating clamped to the 0-10 scale
    pub fn clamped_rating(&self) -> f64 {
        if self.rating.is_nan() {
            return 0.0;
        }
        self.rating.clamp(0.0, MAX_RATING)
    }

    /// Number of filled stars out of five (two rating points per star)
    pub fn filled_stars(&self) -> usize {
        (self.clamped_rating() / 2.0).floor() as usize
    }

    /// Release year, if known
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|d| d.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(rating: f64) -> MovieRecord {
        MovieRecord {
            key: "1".to_string(),
            title: "Test".to_string(),
            description: String::new(),
            rating,
            genres: Vec::new(),
            poster: None,
            backdrop: None,
            release_date: None,
        }
    }

    #[test]
    fn test_filled_stars() {
        assert_eq!(movie(0.0).filled_stars(), 0);
        assert_eq!(movie(7.9).filled_stars(), 3);
        assert_eq!(movie(8.0).filled_stars(), 4);
        assert_eq!(movie(10.0).filled_stars(), 5);
    }

    #[test]
    fn test_rating_out_of_scale_is_clamped() {
        assert_eq!(movie(14.0).clamped_rating(), 10.0);
        assert_eq!(movie(-1.0).clamped_rating(), 0.0);
        assert_eq!(movie(f64::NAN).filled_stars(), 0);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"key": "42", "title": "Minimal"}"#;
        let record: MovieRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.key, "42");
        assert!(record.poster.is_none());
        assert!(record.genres.is_empty());
    }

    #[test]
    fn test_release_year() {
        let mut record = movie(5.0);
        record.release_date = NaiveDate::from_ymd_opt(2020, 8, 26);
        assert_eq!(record.release_year(), Some(2020));
    }
}
