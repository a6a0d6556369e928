//! The immutable set of university records served by the catalog.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::model::University;

/// Built-in records, used when no dataset file is configured.
const SEED_JSON: &str = include_str!("../../data/universities.json");

/// Errors raised while building a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate university id: {0}")]
    DuplicateId(String),

    #[error("university {id}: fee minimum {min} exceeds maximum {max}")]
    InvertedFees { id: String, min: u64, max: u64 },

    #[error("university {id}: rating {rating} outside 0-5")]
    RatingOutOfRange { id: String, rating: f64 },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Read-only collection of universities in insertion order.
///
/// Built once at startup and shared behind an `Arc`; there is no way to
/// mutate it afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    universities: Vec<University>,
}

impl Dataset {
    /// Validate and wrap a list of records.
    pub fn new(universities: Vec<University>) -> DatasetResult<Self> {
        let mut seen = HashSet::with_capacity(universities.len());
        for uni in &universities {
            if !seen.insert(uni.id.as_str()) {
                return Err(DatasetError::DuplicateId(uni.id.clone()));
            }
            if uni.fees.min > uni.fees.max {
                return Err(DatasetError::InvertedFees {
                    id: uni.id.clone(),
                    min: uni.fees.min,
                    max: uni.fees.max,
                });
            }
            if !(0.0..=5.0).contains(&uni.rating) {
                return Err(DatasetError::RatingOutOfRange {
                    id: uni.id.clone(),
                    rating: uni.rating,
                });
            }
        }
        Ok(Self { universities })
    }

    /// The built-in seed of Egyptian universities.
    pub fn seed() -> DatasetResult<Self> {
        Self::from_json(SEED_JSON)
    }

    /// Parse a JSON array of universities.
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        let universities: Vec<University> = serde_json::from_str(json)?;
        Self::new(universities)
    }

    /// Load a JSON array of universities from disk.
    pub fn from_path(path: &Path) -> DatasetResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::university;
    use crate::catalog::model::FeeRange;

    #[test]
    fn test_seed_loads() {
        let dataset = Dataset::seed().expect("seed must be valid");
        assert_eq!(dataset.len(), 7);
        assert_eq!(dataset.universities()[0].name_en, "Cairo University");
        assert_eq!(dataset.universities()[6].id, "7");
        assert!(dataset.universities()[0].detailed_faculties.is_some());
        assert!(dataset.universities()[1].detailed_faculties.is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Dataset::new(vec![university("1"), university("1")]).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_inverted_fees_rejected() {
        let mut uni = university("1");
        uni.fees = FeeRange { min: 10, max: 5 };
        let err = Dataset::new(vec![uni]).unwrap_err();
        assert!(matches!(err, DatasetError::InvertedFees { min: 10, max: 5, .. }));
    }

    #[test]
    fn test_rating_bounds() {
        let mut uni = university("1");
        uni.rating = 5.0;
        assert!(Dataset::new(vec![uni.clone()]).is_ok());

        uni.rating = 5.1;
        assert!(matches!(
            Dataset::new(vec![uni.clone()]),
            Err(DatasetError::RatingOutOfRange { .. })
        ));

        uni.rating = f64::NAN;
        assert!(Dataset::new(vec![uni]).is_err());
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let json = r#"[{"id": "1", "type": "religious"}]"#;
        assert!(matches!(Dataset::from_json(json), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::from_path(Path::new("/nonexistent/universities.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/universities.json"));
    }
}
