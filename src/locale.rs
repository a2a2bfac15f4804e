use crate::config::Flag;
use crate::error::{CardError, Result};
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const FALLBACK_LOCALE: &str = "en";

const BUILTIN_LOCALES: &str = include_str!("locales.json");

static BUILTIN_TABLE: Lazy<LocaleTable> = Lazy::new(|| {
    let entries: BTreeMap<String, LocaleEntry> =
        serde_json::from_str(BUILTIN_LOCALES).expect("built-in locale table is valid JSON");
    LocaleTable::new(entries).expect("built-in locale table has a complete fallback")
});

/// Display strings a card reads from a locale entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TextKey {
    TitleCard,
    Followers,
    Following,
    TotalRepos,
    StarsCount,
    ForksCount,
    CommitsCount,
    TotalPr,
    TotalPrMerged,
    TotalPrReviewed,
    TotalIssues,
    TotalIssuesClosed,
    TotalDiscussionStarted,
    TotalDiscussionAnswered,
    ContributedTo,
}

impl TextKey {
    pub const ALL: [TextKey; 15] = [
        TextKey::TitleCard,
        TextKey::Followers,
        TextKey::Following,
        TextKey::TotalRepos,
        TextKey::StarsCount,
        TextKey::ForksCount,
        TextKey::CommitsCount,
        TextKey::TotalPr,
        TextKey::TotalPrMerged,
        TextKey::TotalPrReviewed,
        TextKey::TotalIssues,
        TextKey::TotalIssuesClosed,
        TextKey::TotalDiscussionStarted,
        TextKey::TotalDiscussionAnswered,
        TextKey::ContributedTo,
    ];

    /// Field name used in locale files.
    pub fn name(self) -> &'static str {
        match self {
            Self::TitleCard => "titleCard",
            Self::Followers => "followersText",
            Self::Following => "followingText",
            Self::TotalRepos => "totalReposText",
            Self::StarsCount => "starsCountText",
            Self::ForksCount => "forksCountText",
            Self::CommitsCount => "commitsCountText",
            Self::TotalPr => "totalPRText",
            Self::TotalPrMerged => "totalPRMergedText",
            Self::TotalPrReviewed => "totalPRReviewedText",
            Self::TotalIssues => "totalIssuesText",
            Self::TotalIssuesClosed => "totalIssuesClosedText",
            Self::TotalDiscussionStarted => "totalDiscussionStartedText",
            Self::TotalDiscussionAnswered => "totalDiscussionAnsweredText",
            Self::ContributedTo => "contributedToText",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleEntry {
    pub rtl_direction: Option<Flag>,
    pub title_card: Option<String>,
    pub followers_text: Option<String>,
    pub following_text: Option<String>,
    pub total_repos_text: Option<String>,
    pub stars_count_text: Option<String>,
    pub forks_count_text: Option<String>,
    pub commits_count_text: Option<String>,
    #[serde(rename = "totalPRText")]
    pub total_pr_text: Option<String>,
    #[serde(rename = "totalPRMergedText")]
    pub total_pr_merged_text: Option<String>,
    #[serde(rename = "totalPRReviewedText")]
    pub total_pr_reviewed_text: Option<String>,
    pub total_issues_text: Option<String>,
    pub total_issues_closed_text: Option<String>,
    pub total_discussion_started_text: Option<String>,
    pub total_discussion_answered_text: Option<String>,
    pub contributed_to_text: Option<String>,
}

impl LocaleEntry {
    /// Returns the text for `key`; empty strings count as missing.
    pub fn text(&self, key: TextKey) -> Option<&str> {
        let value = match key {
            TextKey::TitleCard => &self.title_card,
            TextKey::Followers => &self.followers_text,
            TextKey::Following => &self.following_text,
            TextKey::TotalRepos => &self.total_repos_text,
            TextKey::StarsCount => &self.stars_count_text,
            TextKey::ForksCount => &self.forks_count_text,
            TextKey::CommitsCount => &self.commits_count_text,
            TextKey::TotalPr => &self.total_pr_text,
            TextKey::TotalPrMerged => &self.total_pr_merged_text,
            TextKey::TotalPrReviewed => &self.total_pr_reviewed_text,
            TextKey::TotalIssues => &self.total_issues_text,
            TextKey::TotalIssuesClosed => &self.total_issues_closed_text,
            TextKey::TotalDiscussionStarted => &self.total_discussion_started_text,
            TextKey::TotalDiscussionAnswered => &self.total_discussion_answered_text,
            TextKey::ContributedTo => &self.contributed_to_text,
        };
        value.as_deref().filter(|text| !text.is_empty())
    }

    pub fn is_rtl(&self) -> bool {
        crate::config::flag_set(self.rtl_direction.as_ref())
    }
}

/// Locale identifier to entry map that always holds a complete fallback entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleTable {
    entries: BTreeMap<String, LocaleEntry>,
}

impl LocaleTable {
    /// Validates that the fallback locale exists and defines every key.
    pub fn new(entries: BTreeMap<String, LocaleEntry>) -> Result<Self> {
        let fallback = entries
            .get(FALLBACK_LOCALE)
            .ok_or_else(|| CardError::MissingFallbackLocale(FALLBACK_LOCALE.to_string()))?;
        if let Some(key) = TextKey::ALL.iter().find(|key| fallback.text(**key).is_none()) {
            return Err(CardError::MissingFallbackText(key.name()));
        }
        Ok(Self { entries })
    }

    pub fn builtin() -> &'static LocaleTable {
        &BUILTIN_TABLE
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let entries: BTreeMap<String, LocaleEntry> = serde_json::from_str(contents)?;
        Self::new(entries)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Entries from `other` replace entries with the same identifier.
    pub fn merged(&self, other: &LocaleTable) -> LocaleTable {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.clone());
        LocaleTable { entries }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn fallback(&self) -> &LocaleEntry {
        // `new` guarantees the fallback entry.
        &self.entries[FALLBACK_LOCALE]
    }

    /// Picks the entry for `id`, falling back to [`FALLBACK_LOCALE`].
    pub fn select(&self, id: Option<&str>) -> LocaleText<'_> {
        let fallback = self.fallback();
        match id.and_then(|id| self.entries.get_key_value(id)) {
            Some((id, entry)) => LocaleText {
                id: id.as_str(),
                entry,
                fallback,
            },
            None => {
                if let Some(id) = id {
                    debug!("unknown locale `{id}`, using `{FALLBACK_LOCALE}`");
                }
                LocaleText {
                    id: FALLBACK_LOCALE,
                    entry: fallback,
                    fallback,
                }
            }
        }
    }
}

/// A selected locale with per-key fallback.
#[derive(Debug, Clone, Copy)]
pub struct LocaleText<'a> {
    id: &'a str,
    entry: &'a LocaleEntry,
    fallback: &'a LocaleEntry,
}

impl<'a> LocaleText<'a> {
    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn is_rtl(&self) -> bool {
        self.entry.is_rtl()
    }

    pub fn get(&self, key: TextKey) -> &'a str {
        self.entry
            .text(key)
            .or_else(|| self.fallback.text(key))
            .unwrap_or_default()
    }

    /// Card title with the `{name}` placeholder replaced literally.
    pub fn title(&self, name: &str) -> String {
        let title = self
            .entry
            .text(TextKey::TitleCard)
            .map(|template| template.replace("{name}", name))
            .filter(|title| !title.is_empty());
        match title {
            Some(title) => title,
            None => self.get(TextKey::TitleCard).replace("{name}", name),
        }
    }
}
