use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Profile statistics as delivered by the data-fetch step.
///
/// `pic` is base64-encoded JPEG data and is embedded into the card as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataRecord {
    pub name: String,
    pub username: String,
    pub pic: String,
    pub public_repos: u64,
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_commits: u64,
    pub total_prs: u64,
    pub total_prs_merged: u64,
    pub total_review: u64,
    pub total_issues: u64,
    pub total_closed_issues: u64,
    pub total_discussion_started: u64,
    pub total_discussion_answered: u64,
    pub total_contributed_to: u64,
    pub followers: u64,
    pub following: u64,
}

pub fn parse_data(contents: &str) -> Result<DataRecord> {
    Ok(serde_json::from_str(contents)?)
}

pub fn load_data(path: &Path) -> Result<DataRecord> {
    let contents = std::fs::read_to_string(path)?;
    parse_data(&contents)
}
