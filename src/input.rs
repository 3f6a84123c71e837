//! Conversion of raw form rows into driver profiles and jobsite requirements.
//!
//! Rows are `(owner, tag)` pairs as they come off an entry form: one row per
//! certificate field, owners repeated. Blank tags are placeholders for empty
//! fields and are dropped.

use std::collections::HashMap;

use crate::error::RoutingError;
use crate::geo::NodeKey;
use crate::matcher::{DriverProfile, JobsiteRequirement};
use crate::traits::Id;

/// Splits a comma-separated tag list, trimming and dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Groups rows by owner in first-seen order.
fn group_rows<K, T>(rows: impl IntoIterator<Item = (K, T)>) -> Vec<(K, Vec<String>)>
where
    K: Id,
    T: AsRef<str>,
{
    let mut groups: Vec<(K, Vec<String>)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for (owner, tag) in rows {
        let position = *index.entry(owner.clone()).or_insert_with(|| {
            groups.push((owner, Vec::new()));
            groups.len() - 1
        });
        let tag = tag.as_ref().trim();
        if !tag.is_empty() {
            groups[position].1.push(tag.to_string());
        }
    }

    groups
}

pub fn drivers_from_rows<O, T>(rows: impl IntoIterator<Item = (O, T)>) -> Vec<DriverProfile>
where
    O: AsRef<str>,
    T: AsRef<str>,
{
    let rows = rows
        .into_iter()
        .map(|(driver, tag)| (driver.as_ref().trim().to_string(), tag));

    group_rows(rows)
        .into_iter()
        .map(|(driver, tags)| DriverProfile::new(driver, tags))
        .collect()
}

/// Like [`drivers_from_rows`], with owners parsed as `"lat, lon"` jobsite keys.
///
/// Rows are grouped by the parsed key, so `"1,1"` and `"1, 1"` name the same
/// jobsite and their tags are combined.
pub fn jobsites_from_rows<O, T>(
    rows: impl IntoIterator<Item = (O, T)>,
) -> Result<Vec<JobsiteRequirement>, RoutingError>
where
    O: AsRef<str>,
    T: AsRef<str>,
{
    let rows = rows
        .into_iter()
        .map(|(site, tag)| Ok::<_, RoutingError>((site.as_ref().parse::<NodeKey>()?, tag)))
        .collect::<Result<Vec<_>, RoutingError>>()?;

    Ok(group_rows(rows)
        .into_iter()
        .map(|(key, tags)| JobsiteRequirement::new(key, tags))
        .collect())
}
