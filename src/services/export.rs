//! CSV export of the materialized rows

use crate::error::Result;
use crate::model::college::CollegeRecord;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// One flattened export row; missing values serialize as empty cells
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: String,
    name: &'a str,
    qs_rank: Option<u32>,
    course_fees: Option<f64>,
    placement_average: Option<f64>,
    placement_highest: Option<f64>,
    user_review: Option<f64>,
    ranking_overall: Option<u32>,
    ranking_year: Option<i32>,
    featured: bool,
}

impl<'a> From<&'a CollegeRecord> for ExportRow<'a> {
    fn from(record: &'a CollegeRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: &record.name,
            qs_rank: record.qs_rank,
            course_fees: record.course_fees,
            placement_average: record.placement_average(),
            placement_highest: record.placement_highest(),
            user_review: record.user_review,
            ranking_overall: record.ranking_overall(),
            ranking_year: record.ranking_year(),
            featured: record.featured,
        }
    }
}

/// Write `records` in order to a CSV file at `path`, returning the row count
pub fn export_csv<'a, P, I>(path: P, records: I) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a CollegeRecord>,
{
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    let mut count = 0;
    for record in records {
        writer.serialize(ExportRow::from(record))?;
        count += 1;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = count, "exported colleges");
    Ok(count)
}
