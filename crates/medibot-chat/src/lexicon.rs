//! Keyword lexicons for categories and sub-topics.
//!
//! Each entry is an ordered list of lowercase needles compiled once into an
//! Aho-Corasick automaton. Matching is substring-based against a lowercased
//! haystack. When several needles of one entry occur, the one declared first
//! wins, regardless of where it appears in the text.

use std::collections::HashMap;
use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use medibot_core::{Category, SubTopic};

use crate::error::ChatError;

// =============================================================================
// Keyword tables
// =============================================================================

const MEDICAL_KEYWORDS: &[&str] = &[
    "symptom",
    "omicron",
    "covid",
    "fever",
    "cough",
    "headache",
    "fatigue",
    "sore throat",
    "recovery",
    "treatment",
    "medicine",
    "health",
    "sick",
    "illness",
    "infection",
    "vaccine",
    "virus",
    "doctor",
    "hospital",
];

const DATA_KEYWORDS: &[&str] = &[
    "statistics",
    "stats",
    "data",
    "analyze",
    "analysis",
    "search",
    "find",
    "tweets",
    "sentiment",
    "trends",
    "count",
    "how many",
];

const VARIANT_KEYWORDS: &[&str] = &["omicron", "covid"];

// Fever and cough first: their templates are the most specific.
const SYMPTOM_KEYWORDS: &[&str] = &[
    "fever",
    "cough",
    "symptom",
    "headache",
    "fatigue",
    "sore throat",
    "body ache",
];

const RECOVERY_KEYWORDS: &[&str] = &["recovery", "treatment"];
const STATISTICS_KEYWORDS: &[&str] = &["statistics", "stats"];
const SENTIMENT_KEYWORDS: &[&str] = &["sentiment"];
const SEARCH_KEYWORDS: &[&str] = &["search", "find"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hi"];
const HELP_KEYWORDS: &[&str] = &["help"];

fn category_table(category: Category) -> Option<&'static [&'static str]> {
    match category {
        Category::Medical => Some(MEDICAL_KEYWORDS),
        Category::Data => Some(DATA_KEYWORDS),
        _ => None,
    }
}

fn topic_table(topic: SubTopic) -> &'static [&'static str] {
    match topic {
        SubTopic::Variant => VARIANT_KEYWORDS,
        SubTopic::Symptom => SYMPTOM_KEYWORDS,
        SubTopic::Recovery => RECOVERY_KEYWORDS,
        SubTopic::Statistics => STATISTICS_KEYWORDS,
        SubTopic::Sentiment => SENTIMENT_KEYWORDS,
        SubTopic::Search => SEARCH_KEYWORDS,
        SubTopic::Greeting => GREETING_KEYWORDS,
        SubTopic::Help => HELP_KEYWORDS,
    }
}

// =============================================================================
// Lexicon
// =============================================================================

struct Entry {
    keywords: &'static [&'static str],
    automaton: AhoCorasick,
}

impl Entry {
    fn compile(keywords: &'static [&'static str]) -> Self {
        let automaton = AhoCorasick::new(keywords).expect("Invalid lexicon keyword set");
        Self {
            keywords,
            automaton,
        }
    }

    /// Earliest-declared keyword occurring in `lowered`.
    fn first_match(&self, lowered: &str) -> Option<&'static str> {
        self.automaton
            .find_overlapping_iter(lowered)
            .map(|m| m.pattern().as_usize())
            .min()
            .map(|idx| self.keywords[idx])
    }
}

static LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::compile);

/// Compiled keyword sets, shared read-only by every caller.
pub struct Lexicon {
    categories: HashMap<Category, Entry>,
    topics: HashMap<SubTopic, Entry>,
}

impl Lexicon {
    fn compile() -> Self {
        let categories = Category::ALL
            .iter()
            .filter_map(|c| category_table(*c).map(|kw| (*c, Entry::compile(kw))))
            .collect();
        let topics = SubTopic::ALL
            .iter()
            .map(|t| (*t, Entry::compile(topic_table(*t))))
            .collect();
        Self { categories, topics }
    }

    /// The process-wide lexicon.
    pub fn global() -> &'static Lexicon {
        &LEXICON
    }

    /// Ordered trigger keywords of an inferable category.
    ///
    /// Services and the general-sub default have no keywords; asking for them
    /// is a caller bug and yields [`ChatError::InvalidCategory`].
    pub fn keywords_for(&self, category: Category) -> Result<&'static [&'static str], ChatError> {
        self.categories
            .get(&category)
            .map(|e| e.keywords)
            .ok_or_else(|| ChatError::InvalidCategory(category.to_string()))
    }

    /// Whether any keyword of `category` occurs in `text`, ignoring case.
    pub fn matches(&self, text: &str, category: Category) -> Result<bool, ChatError> {
        let entry = self
            .categories
            .get(&category)
            .ok_or_else(|| ChatError::InvalidCategory(category.to_string()))?;
        Ok(entry.automaton.is_match(&text.to_lowercase()))
    }

    /// Ordered trigger keywords of a sub-topic.
    pub fn topic_keywords(&self, topic: SubTopic) -> &'static [&'static str] {
        topic_table(topic)
    }

    /// Whether any keyword of `topic` occurs in `text`, ignoring case.
    pub fn topic_matches(&self, text: &str, topic: SubTopic) -> bool {
        self.find_topic(&text.to_lowercase(), topic).is_some()
    }

    /// First matching category keyword. `lowered` must already be lowercase.
    pub(crate) fn find_category(&self, lowered: &str, category: Category) -> Option<&'static str> {
        self.categories.get(&category)?.first_match(lowered)
    }

    /// First matching sub-topic keyword. `lowered` must already be lowercase.
    pub(crate) fn find_topic(&self, lowered: &str, topic: SubTopic) -> Option<&'static str> {
        self.topics.get(&topic)?.first_match(lowered)
    }
}
