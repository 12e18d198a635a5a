//! Rule-based message classifier.
//!
//! Decides a (category, sub-topic) pair for a message using ordered keyword
//! rules. The first satisfied rule wins; nothing is scored.

use medibot_core::{Category, Classification, SubTopic};
use tracing::debug;

use crate::lexicon::Lexicon;

/// Inferable categories, tested in this order. Anything else is general-sub.
pub const INFERENCE_ORDER: [Category; 2] = [Category::Medical, Category::Data];

/// Ordered sub-topic rules of a category. Services have none.
pub fn sub_topics(category: Category) -> &'static [SubTopic] {
    match category {
        Category::Medical => &[SubTopic::Variant, SubTopic::Symptom, SubTopic::Recovery],
        Category::Data => &[SubTopic::Statistics, SubTopic::Sentiment, SubTopic::Search],
        Category::Generic => &[SubTopic::Greeting, SubTopic::Help],
        _ => &[],
    }
}

/// Keyword classifier over the shared [`Lexicon`].
pub struct Classifier {
    lexicon: &'static Lexicon,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::global(),
        }
    }

    /// Every (category, sub-topic) pair that [`classify`](Self::classify) can
    /// return.
    pub fn reachable() -> Vec<(Category, Option<SubTopic>)> {
        Category::ALL
            .iter()
            .flat_map(|c| {
                std::iter::once((*c, None)).chain(sub_topics(*c).iter().map(|t| (*c, Some(*t))))
            })
            .collect()
    }

    /// Classify a message.
    ///
    /// A preselected category wins over inference and is only refined within
    /// its own sub-topics. Services have none, so they come back bare.
    pub fn classify(&self, message: &str, preselected: Option<Category>) -> Classification {
        let lowered = message.to_lowercase();

        let result = match preselected {
            Some(category) => self.refine(&lowered, category, None),
            None => self.infer(&lowered),
        };

        debug!(
            category = %result.category,
            sub_topic = ?result.sub_topic,
            keyword = ?result.matched_keyword,
            preselected = ?preselected,
            "Message classified"
        );
        result
    }

    fn infer(&self, lowered: &str) -> Classification {
        for category in INFERENCE_ORDER {
            if let Some(keyword) = self.lexicon.find_category(lowered, category) {
                return self.refine(lowered, category, Some(keyword));
            }
        }
        self.refine(lowered, Category::Generic, None)
    }

    fn refine(
        &self,
        lowered: &str,
        category: Category,
        category_keyword: Option<&'static str>,
    ) -> Classification {
        for topic in sub_topics(category) {
            if let Some(keyword) = self.lexicon.find_topic(lowered, *topic) {
                return Classification {
                    category,
                    sub_topic: Some(*topic),
                    matched_keyword: Some(keyword),
                };
            }
        }
        Classification {
            category,
            sub_topic: None,
            matched_keyword: category_keyword,
        }
    }
}
