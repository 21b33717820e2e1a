//! College records as they appear in the data set

use serde::{Deserialize, Serialize};
use std::fmt;

/// Record identifier; data sets use either numeric or string ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollegeId {
    Number(u64),
    Text(String),
}

impl fmt::Display for CollegeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollegeId::Number(n) => write!(f, "{}", n),
            CollegeId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Placement statistics for a college
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default)]
    pub highest: Option<f64>,
}

/// National ranking and the year it was published
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    #[serde(default)]
    pub overall: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
}

/// One college's static attribute set
///
/// Everything except `id` and `name` is optional: a record missing a field
/// still loads, and sorts as the lowest value on that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeRecord {
    pub id: CollegeId,
    pub name: String,
    #[serde(default)]
    pub qs_rank: Option<u32>,
    #[serde(default)]
    pub course_fees: Option<f64>,
    #[serde(default)]
    pub user_review: Option<f64>,
    #[serde(default)]
    pub placement: Option<Placement>,
    #[serde(default)]
    pub ranking: Option<Ranking>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub jee_advanced_cutoff: Option<String>,
}

impl CollegeRecord {
    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be lowercased.
    pub fn name_matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }

    pub fn placement_average(&self) -> Option<f64> {
        self.placement.as_ref().and_then(|p| p.average)
    }

    pub fn placement_highest(&self) -> Option<f64> {
        self.placement.as_ref().and_then(|p| p.highest)
    }

    pub fn ranking_overall(&self) -> Option<u32> {
        self.ranking.as_ref().and_then(|r| r.overall)
    }

    pub fn ranking_year(&self) -> Option<i32> {
        self.ranking.as_ref().and_then(|r| r.year)
    }
}

/// On-disk shape of a data set: either `{"colleges": [...]}` or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DataSet {
    Wrapped { colleges: Vec<CollegeRecord> },
    Bare(Vec<CollegeRecord>),
}

impl DataSet {
    pub fn into_records(self) -> Vec<CollegeRecord> {
        match self {
            DataSet::Wrapped { colleges } => colleges,
            DataSet::Bare(colleges) => colleges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let json = r#"{
            "id": 1,
            "name": "IIT Madras",
            "qsRank": 3,
            "courseFees": 209550,
            "placement": { "average": 2100000, "highest": 19800000 },
            "userReview": 8.9,
            "ranking": { "overall": 1, "year": 2023 },
            "featured": true,
            "logo": "iitm.png",
            "jeeAdvancedCutoff": "148"
        }"#;

        let record: CollegeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, CollegeId::Number(1));
        assert_eq!(record.qs_rank, Some(3));
        assert_eq!(record.placement_average(), Some(2_100_000.0));
        assert_eq!(record.ranking_overall(), Some(1));
        assert_eq!(record.ranking_year(), Some(2023));
        assert!(record.featured);
        assert_eq!(record.jee_advanced_cutoff.as_deref(), Some("148"));
    }

    #[test]
    fn test_parse_sparse_record() {
        let record: CollegeRecord =
            serde_json::from_str(r#"{"id": "c-7", "name": "Sparse College"}"#).unwrap();

        assert_eq!(record.id, CollegeId::Text("c-7".to_string()));
        assert_eq!(record.placement_average(), None);
        assert_eq!(record.placement_highest(), None);
        assert_eq!(record.ranking_overall(), None);
        assert!(!record.featured);
    }

    #[test]
    fn test_parse_partial_nested_field() {
        let record: CollegeRecord = serde_json::from_str(
            r#"{"id": 2, "name": "Half", "placement": {"highest": 500000}}"#,
        )
        .unwrap();

        assert_eq!(record.placement_average(), None);
        assert_eq!(record.placement_highest(), Some(500_000.0));
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        let record: CollegeRecord =
            serde_json::from_str(r#"{"id": 3, "name": "Delhi Technological University"}"#)
                .unwrap();

        assert!(record.name_matches("delhi"));
        assert!(record.name_matches("technological"));
        assert!(record.name_matches(""));
        assert!(!record.name_matches("bombay"));
    }

    #[test]
    fn test_data_set_shapes() {
        let wrapped: DataSet =
            serde_json::from_str(r#"{"colleges": [{"id": 1, "name": "A"}]}"#).unwrap();
        assert_eq!(wrapped.into_records().len(), 1);

        let bare: DataSet =
            serde_json::from_str(r#"[{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]"#).unwrap();
        assert_eq!(bare.into_records().len(), 2);
    }
}
