use crate::data::DataRecord;
use crate::icons::IconCatalog;
use crate::locale::{LocaleText, TextKey};
use serde::{Deserialize, Serialize};

/// The twelve statistics a card can show, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    Repos,
    Stars,
    Forks,
    Commits,
    Prs,
    PrsMerged,
    Reviews,
    Issues,
    IssuesClosed,
    DiscussionsStarted,
    DiscussionsAnswered,
    Contributed,
}

/// Whether an item is shown unless hidden, or hidden unless shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultVisibility {
    OptOut,
    OptIn,
}

impl MetricKey {
    pub const ALL: [MetricKey; 12] = [
        MetricKey::Repos,
        MetricKey::Stars,
        MetricKey::Forks,
        MetricKey::Commits,
        MetricKey::Prs,
        MetricKey::PrsMerged,
        MetricKey::Reviews,
        MetricKey::Issues,
        MetricKey::IssuesClosed,
        MetricKey::DiscussionsStarted,
        MetricKey::DiscussionsAnswered,
        MetricKey::Contributed,
    ];

    /// Token matched against the `hiddenItems` / `showItems` lists.
    pub fn token(self) -> &'static str {
        match self {
            Self::Repos => "repos",
            Self::Stars => "stars",
            Self::Forks => "forks",
            Self::Commits => "commits",
            Self::Prs => "prs",
            Self::PrsMerged => "prs_merged",
            Self::Reviews => "reviews",
            Self::Issues => "issues",
            Self::IssuesClosed => "issues_closed",
            Self::DiscussionsStarted => "discussions_started",
            Self::DiscussionsAnswered => "discussions_answered",
            Self::Contributed => "contributed",
        }
    }

    pub fn default_visibility(self) -> DefaultVisibility {
        match self {
            Self::Reviews
            | Self::IssuesClosed
            | Self::DiscussionsStarted
            | Self::DiscussionsAnswered => DefaultVisibility::OptIn,
            _ => DefaultVisibility::OptOut,
        }
    }

    pub fn text_key(self) -> TextKey {
        match self {
            Self::Repos => TextKey::TotalRepos,
            Self::Stars => TextKey::StarsCount,
            Self::Forks => TextKey::ForksCount,
            Self::Commits => TextKey::CommitsCount,
            Self::Prs => TextKey::TotalPr,
            Self::PrsMerged => TextKey::TotalPrMerged,
            Self::Reviews => TextKey::TotalPrReviewed,
            Self::Issues => TextKey::TotalIssues,
            Self::IssuesClosed => TextKey::TotalIssuesClosed,
            Self::DiscussionsStarted => TextKey::TotalDiscussionStarted,
            Self::DiscussionsAnswered => TextKey::TotalDiscussionAnswered,
            Self::Contributed => TextKey::ContributedTo,
        }
    }

    pub fn value(self, data: &DataRecord) -> u64 {
        match self {
            Self::Repos => data.public_repos,
            Self::Stars => data.total_stars,
            Self::Forks => data.total_forks,
            Self::Commits => data.total_commits,
            Self::Prs => data.total_prs,
            Self::PrsMerged => data.total_prs_merged,
            Self::Reviews => data.total_review,
            Self::Issues => data.total_issues,
            Self::IssuesClosed => data.total_closed_issues,
            Self::DiscussionsStarted => data.total_discussion_started,
            Self::DiscussionsAnswered => data.total_discussion_answered,
            Self::Contributed => data.total_contributed_to,
        }
    }
}

/// The `hiddenItems` and `showItems` lists, split on `,` without trimming.
#[derive(Debug, Clone, Default)]
pub struct ItemSelection<'a> {
    hidden: Vec<&'a str>,
    shown: Vec<&'a str>,
}

impl<'a> ItemSelection<'a> {
    pub fn new(hidden: &'a str, shown: &'a str) -> Self {
        Self {
            hidden: hidden.split(',').collect(),
            shown: shown.split(',').collect(),
        }
    }

    pub fn is_visible(&self, key: MetricKey) -> bool {
        let token = key.token();
        match key.default_visibility() {
            DefaultVisibility::OptOut => !self.hidden.contains(&token),
            DefaultVisibility::OptIn => self.shown.contains(&token),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricItem<'a> {
    pub key: MetricKey,
    pub label: &'a str,
    pub value: u64,
    pub icon: &'a str,
    pub visible: bool,
}

/// Builds every catalog item with its computed visibility.
pub fn catalog_items<'a>(
    data: &DataRecord,
    locale: &LocaleText<'a>,
    icons: &'a IconCatalog,
    selection: &ItemSelection<'_>,
) -> Vec<MetricItem<'a>> {
    MetricKey::ALL
        .iter()
        .map(|&key| MetricItem {
            key,
            label: locale.get(key.text_key()),
            value: key.value(data),
            icon: icons.get(key),
            visible: selection.is_visible(key),
        })
        .collect()
}

/// Visible items in catalog order.
pub fn select_items<'a>(
    data: &DataRecord,
    locale: &LocaleText<'a>,
    icons: &'a IconCatalog,
    hidden: &str,
    shown: &str,
) -> Vec<MetricItem<'a>> {
    let selection = ItemSelection::new(hidden, shown);
    catalog_items(data, locale, icons, &selection)
        .into_iter()
        .filter(|item| item.visible)
        .collect()
}
