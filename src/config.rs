/// Engine configuration
///
/// Every vocabulary and threshold the analyzers use. Defaults are the tuned
/// values; a TOML file can override any subset of them.

use crate::error::Result;
use crate::recommend::Priority;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where we look for a config file when none is given
const DEFAULT_CONFIG_DIR: &str = ".boardwise";
const DEFAULT_CONFIG_FILE: &str = "config.toml";

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub due_date: DueDateConfig,
    pub list_movement: ListMovementConfig,
    pub related_cards: RelatedCardsConfig,
    pub stale: StaleConfig,
    /// Upper bound on one analysis pass when run through the recommender
    pub analysis_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            due_date: DueDateConfig::default(),
            list_movement: ListMovementConfig::default(),
            related_cards: RelatedCardsConfig::default(),
            stale: StaleConfig::default(),
            analysis_timeout_ms: 5_000,
        }
    }
}

/// Phrase that pins a due date ("tomorrow", "next week", ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseRule {
    pub phrases: Vec<String>,
    pub days: u64,
    pub priority: Priority,
}

impl PhraseRule {
    fn new(phrases: &[&str], days: u64, priority: Priority) -> Self {
        Self {
            phrases: words(phrases),
            days,
            priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DueDateConfig {
    pub urgent_keywords: Vec<String>,
    pub soon_keywords: Vec<String>,
    pub later_keywords: Vec<String>,
    pub urgent_days: u64,
    pub soon_days: u64,
    pub later_days: u64,
    /// Checked in order; only an earlier date replaces a keyword hit
    pub phrase_rules: Vec<PhraseRule>,
    /// "in N days" up to this many days is high priority
    pub high_max_days: u64,
    /// ... and up to this many is medium, beyond it low
    pub medium_max_days: u64,
}

impl Default for DueDateConfig {
    fn default() -> Self {
        Self {
            urgent_keywords: words(&[
                "urgent",
                "asap",
                "as soon as possible",
                "immediately",
                "critical",
                "important",
                "priority",
                "emergency",
                "rush",
            ]),
            soon_keywords: words(&[
                "soon",
                "quickly",
                "this week",
                "deadline",
                "by friday",
                "by end of week",
                "needs to be done",
                "time sensitive",
            ]),
            later_keywords: words(&[
                "later",
                "eventually",
                "future",
                "someday",
                "backlog",
                "nice to have",
            ]),
            urgent_days: 1,
            soon_days: 7,
            later_days: 30,
            phrase_rules: vec![
                PhraseRule::new(&["today", "now"], 0, Priority::High),
                PhraseRule::new(&["tomorrow", "next day"], 1, Priority::High),
                PhraseRule::new(
                    &[
                        "monday",
                        "tuesday",
                        "wednesday",
                        "thursday",
                        "friday",
                        "saturday",
                        "sunday",
                    ],
                    3,
                    Priority::Medium,
                ),
                PhraseRule::new(&["next week", "this week"], 7, Priority::Medium),
                PhraseRule::new(&["next month", "this month"], 30, Priority::Low),
            ],
            high_max_days: 3,
            medium_max_days: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListMovementConfig {
    pub progress_keywords: Vec<String>,
    pub done_keywords: Vec<String>,
    pub todo_keywords: Vec<String>,
    /// Title fragments that identify each kind of target list
    pub progress_list_titles: Vec<String>,
    pub done_list_titles: Vec<String>,
    pub todo_list_titles: Vec<String>,
    /// Current-list title fragments that rule out a move to in progress
    pub skip_progress_from: Vec<String>,
    /// ... that rule out a move to done
    pub skip_done_from: Vec<String>,
    /// A move back to todo is only offered from lists with one of these
    pub todo_only_from: Vec<String>,
}

impl Default for ListMovementConfig {
    fn default() -> Self {
        Self {
            progress_keywords: words(&[
                "started",
                "starting",
                "working on",
                "in progress",
                "doing",
                "implementing",
                "developing",
                "building",
                "creating",
                "designing",
                "coding",
                "active",
                "currently",
                "now working",
                "underway",
                "in development",
                "wip",
            ]),
            done_keywords: words(&[
                "completed",
                "done",
                "finished",
                "ready",
                "deployed",
                "released",
                "shipped",
                "delivered",
                "finalized",
                "closed",
                "resolved",
                "fixed",
                "tested",
                "approved",
                "accepted",
                "merged",
                "published",
                "live",
            ]),
            todo_keywords: words(&[
                "todo",
                "to do",
                "pending",
                "not started",
                "planned",
                "scheduled",
                "upcoming",
                "future",
                "backlog",
                "needs work",
                "awaiting",
            ]),
            progress_list_titles: words(&["progress", "doing", "active", "working"]),
            done_list_titles: words(&["done", "complete", "finished"]),
            todo_list_titles: words(&["todo", "to do", "pending", "backlog"]),
            skip_progress_from: words(&["progress", "done", "complete"]),
            skip_done_from: words(&["done", "complete"]),
            todo_only_from: words(&["progress", "done"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedCardsConfig {
    pub min_token_len: usize,
    /// Shared tokens that relate two cards on their own
    pub min_shared_keywords: usize,
    /// Shared / smaller token set that relates two cards sharing at least one token
    pub min_overlap_ratio: f64,
    /// A group inside a single list is only reported from this size up
    pub min_single_list_group: usize,
    pub stop_words: Vec<String>,
}

impl Default for RelatedCardsConfig {
    fn default() -> Self {
        Self {
            min_token_len: 3,
            min_shared_keywords: 2,
            min_overlap_ratio: 0.3,
            min_single_list_group: 3,
            stop_words: words(&[
                "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
                "with", "by", "from", "this", "that", "these", "those", "is", "are", "was",
                "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
                "will", "would", "should", "could", "may", "might",
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaleConfig {
    pub stale_days: i64,
    pub very_stale_days: i64,
    /// Cards in lists whose title contains one of these are never stale
    pub exempt_list_titles: Vec<String>,
}

impl Default for StaleConfig {
    fn default() -> Self {
        Self {
            stale_days: 30,
            very_stale_days: 60,
            exempt_list_titles: words(&["done", "complete"]),
        }
    }
}

impl EngineConfig {
    /// Parse a TOML config file; missing keys keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: EngineConfig = toml::from_str(&content)?;
        tracing::debug!("loaded engine config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load the given file, or the default location if it exists, or defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::load(p),
                _ => Ok(Self::default()),
            },
        }
    }

    /// ~/.boardwise/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILE))
    }
}
