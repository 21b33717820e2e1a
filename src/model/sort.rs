//! Sort keys and comparison logic
//!
//! Field paths such as `placement.average` resolve through an explicit
//! accessor per [`SortKey`], so the comparator stays typed.

use super::college::CollegeRecord;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A sortable column, named by its dotted field path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    QsRank,
    Name,
    CourseFees,
    PlacementAverage,
    PlacementHighest,
    UserReview,
    RankingOverall,
}

impl SortKey {
    pub fn all() -> [SortKey; 7] {
        [
            SortKey::QsRank,
            SortKey::Name,
            SortKey::CourseFees,
            SortKey::PlacementAverage,
            SortKey::PlacementHighest,
            SortKey::UserReview,
            SortKey::RankingOverall,
        ]
    }

    /// Dotted field path as used in the data set
    pub fn path(&self) -> &'static str {
        match self {
            SortKey::QsRank => "qsRank",
            SortKey::Name => "name",
            SortKey::CourseFees => "courseFees",
            SortKey::PlacementAverage => "placement.average",
            SortKey::PlacementHighest => "placement.highest",
            SortKey::UserReview => "userReview",
            SortKey::RankingOverall => "ranking.overall",
        }
    }

    /// Comma-separated list of every accepted path, for error messages
    pub fn known_paths() -> String {
        Self::all()
            .iter()
            .map(|k| k.path())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolve this key on a record
    pub fn resolve(&self, record: &CollegeRecord) -> SortValue {
        let number = |v: Option<f64>| v.map(SortValue::Number).unwrap_or(SortValue::Missing);
        match self {
            SortKey::QsRank => number(record.qs_rank.map(f64::from)),
            SortKey::Name => SortValue::Text(record.name.clone()),
            SortKey::CourseFees => number(record.course_fees),
            SortKey::PlacementAverage => number(record.placement_average()),
            SortKey::PlacementHighest => number(record.placement_highest()),
            SortKey::UserReview => number(record.user_review),
            SortKey::RankingOverall => number(record.ranking_overall().map(f64::from)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|k| k.path() == s)
            .ok_or_else(|| AppError::UnknownSortField(s.to_string()))
    }
}

/// A resolved field value; `Missing` orders below everything else
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Missing,
    Number(f64),
    Text(String),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Number(_) => 1,
            SortValue::Text(_) => 2,
        }
    }

    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header arrow for the active column
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }

    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Current sort key and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Advance to the next state for a header activation on `key`.
    ///
    /// Same key while ascending flips to descending; anything else starts
    /// ascending on `key`.
    pub fn toggled(&self, key: SortKey) -> SortConfig {
        let direction = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        SortConfig {
            key: Some(key),
            direction,
        }
    }

    /// Compare two records under this config. Unsorted configs treat
    /// everything as equal so a stable sort keeps input order.
    pub fn compare(&self, a: &CollegeRecord, b: &CollegeRecord) -> Ordering {
        match self.key {
            Some(key) => self.direction.apply(key.resolve(a).compare(&key.resolve(b))),
            None => Ordering::Equal,
        }
    }
}

/// Which records a sort request reorders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortPolicy {
    /// Sort only the materialized page; later pages append unsorted
    #[default]
    Page,
    /// Sort the whole filtered set and paginate from it
    Global,
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortPolicy::Page => f.write_str("page"),
            SortPolicy::Global => f.write_str("global"),
        }
    }
}

impl FromStr for SortPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "page" => Ok(SortPolicy::Page),
            "global" => Ok(SortPolicy::Global),
            _ => Err(AppError::UnknownSortPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::college::{CollegeId, Placement};

    fn college(name: &str, fees: Option<f64>) -> CollegeRecord {
        CollegeRecord {
            id: CollegeId::Text(name.to_string()),
            name: name.to_string(),
            qs_rank: None,
            course_fees: fees,
            user_review: None,
            placement: None,
            ranking: None,
            featured: false,
            logo: None,
            jee_advanced_cutoff: None,
        }
    }

    #[test]
    fn test_parse_known_paths() {
        for key in SortKey::all() {
            assert_eq!(key.path().parse::<SortKey>().unwrap(), key);
        }
        assert!(matches!(
            "placement.median".parse::<SortKey>(),
            Err(AppError::UnknownSortField(_))
        ));
    }

    #[test]
    fn test_missing_sorts_lowest() {
        assert_eq!(
            SortValue::Missing.compare(&SortValue::Number(-1.0)),
            Ordering::Less
        );
        assert_eq!(
            SortValue::Number(3.0).compare(&SortValue::Missing),
            Ordering::Greater
        );
        assert_eq!(SortValue::Missing.compare(&SortValue::Missing), Ordering::Equal);
    }

    #[test]
    fn test_toggle_cycle() {
        let start = SortConfig::default();
        let first = start.toggled(SortKey::QsRank);
        assert_eq!(first.direction, SortDirection::Ascending);

        let second = first.toggled(SortKey::QsRank);
        assert_eq!(second.direction, SortDirection::Descending);

        let third = second.toggled(SortKey::QsRank);
        assert_eq!(third.direction, SortDirection::Ascending);

        let other = second.toggled(SortKey::Name);
        assert_eq!(other.key, Some(SortKey::Name));
        assert_eq!(other.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_compare_respects_direction() {
        let cheap = college("Cheap", Some(1000.0));
        let pricey = college("Pricey", Some(90000.0));

        let asc = SortConfig {
            key: Some(SortKey::CourseFees),
            direction: SortDirection::Ascending,
        };
        assert_eq!(asc.compare(&cheap, &pricey), Ordering::Less);

        let desc = SortConfig {
            direction: SortDirection::Descending,
            ..asc
        };
        assert_eq!(desc.compare(&cheap, &pricey), Ordering::Greater);
    }

    #[test]
    fn test_resolve_nested_field() {
        let mut rec = college("Nested", None);
        assert_eq!(SortKey::PlacementAverage.resolve(&rec), SortValue::Missing);

        rec.placement = Some(Placement {
            average: Some(1200000.0),
            highest: None,
        });
        assert_eq!(
            SortKey::PlacementAverage.resolve(&rec),
            SortValue::Number(1200000.0)
        );
        assert_eq!(SortKey::PlacementHighest.resolve(&rec), SortValue::Missing);
    }

    #[test]
    fn test_sort_policy_from_str() {
        assert_eq!("page".parse::<SortPolicy>().unwrap(), SortPolicy::Page);
        assert_eq!("GLOBAL".parse::<SortPolicy>().unwrap(), SortPolicy::Global);
        assert!("sometimes".parse::<SortPolicy>().is_err());
    }
}
