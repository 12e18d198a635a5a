//! Response templates keyed by (category, sub-topic).
//!
//! Bodies live in [`bodies`] as static text with `{user}`, `{message}`,
//! `{term}` and `{service}` placeholders. Some keys pick between several
//! bodies (variant overview vs. variant symptoms, fever vs. cough), so the
//! bank stores a render function per key rather than a single string.

mod bodies;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use medibot_core::{Category, SubTopic, DEFAULT_SERVICE_LABEL};
use regex::{Captures, Regex};

use crate::error::ChatError;
use crate::extractor::DEFAULT_SEARCH_TERM;
use crate::lexicon::Lexicon;

/// Renders one template from its parameters.
pub type TemplateFn = fn(&TemplateParams<'_>) -> String;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(user|message|term|service)\}").expect("Invalid placeholder regex")
});

static STANDARD: LazyLock<Arc<TemplateBank>> = LazyLock::new(|| Arc::new(TemplateBank::standard()));

// =============================================================================
// Parameters
// =============================================================================

/// Values substituted into a template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateParams<'a> {
    /// Name used to address the user. Never blank.
    pub user_name: &'a str,
    /// Original message text.
    pub message: &'a str,
    /// Search term, set for data search responses only.
    pub search_term: Option<&'a str>,
    /// Label of the selected service.
    pub service_label: &'a str,
    /// Keyword that decided the classification.
    pub matched_keyword: Option<&'a str>,
    /// Longest echo of `message`, in characters.
    pub echo_max_chars: usize,
}

impl<'a> TemplateParams<'a> {
    pub fn new(user_name: &'a str, message: &'a str) -> Self {
        Self {
            user_name,
            message,
            search_term: None,
            service_label: DEFAULT_SERVICE_LABEL,
            matched_keyword: None,
            echo_max_chars: 100,
        }
    }

    /// The message as echoed back: trimmed, and cut to `echo_max_chars`
    /// characters with a trailing `...` when longer.
    pub fn echo(&self) -> Cow<'a, str> {
        let trimmed = self.message.trim();
        match trimmed.char_indices().nth(self.echo_max_chars) {
            Some((cut, _)) => Cow::Owned(format!("{}...", &trimmed[..cut])),
            None => Cow::Borrowed(trimmed),
        }
    }

    pub fn search_term(&self) -> &'a str {
        self.search_term.unwrap_or(DEFAULT_SEARCH_TERM)
    }
}

fn fill(body: &str, params: &TemplateParams<'_>) -> String {
    // Single pass: text substituted from the message is never re-expanded.
    PLACEHOLDER_RE
        .replace_all(body, |caps: &Captures<'_>| match &caps[1] {
            "user" => params.user_name.to_string(),
            "message" => params.echo().into_owned(),
            "term" => params.search_term().to_string(),
            _ => params.service_label.to_string(),
        })
        .into_owned()
}

// =============================================================================
// Bank
// =============================================================================

/// Two-level template table: category, then optional sub-topic.
#[derive(Default)]
pub struct TemplateBank {
    table: HashMap<Category, HashMap<Option<SubTopic>, TemplateFn>>,
}

impl TemplateBank {
    /// A bank with no templates.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The full set of built-in templates.
    pub fn standard() -> Self {
        let mut bank = Self::empty();

        bank.insert(Category::Health, None, |p| fill(bodies::HEALTH_ASSESSMENT, p))
            .insert(Category::Insurance, None, |p| fill(bodies::INSURANCE, p))
            .insert(Category::Appointments, None, |p| fill(bodies::APPOINTMENTS, p))
            .insert(Category::Emergency, None, |p| fill(bodies::EMERGENCY, p))
            .insert(Category::General, None, |p| fill(bodies::SERVICE_OVERVIEW, p))
            .insert(Category::Chat, None, |p| fill(bodies::SERVICE_OVERVIEW, p));

        bank.insert(Category::Medical, None, |p| fill(bodies::MEDICAL_OVERVIEW, p))
            .insert(Category::Medical, Some(SubTopic::Variant), variant)
            .insert(Category::Medical, Some(SubTopic::Symptom), symptom)
            .insert(Category::Medical, Some(SubTopic::Recovery), |p| {
                fill(bodies::RECOVERY, p)
            });

        bank.insert(Category::Data, None, |p| fill(bodies::DATA_OVERVIEW, p))
            .insert(Category::Data, Some(SubTopic::Statistics), |p| {
                fill(bodies::STATISTICS, p)
            })
            .insert(Category::Data, Some(SubTopic::Sentiment), |p| {
                fill(bodies::SENTIMENT, p)
            })
            .insert(Category::Data, Some(SubTopic::Search), |p| fill(bodies::SEARCH, p));

        bank.insert(Category::Generic, None, |p| fill(bodies::DEFAULT, p))
            .insert(Category::Generic, Some(SubTopic::Greeting), |p| {
                fill(bodies::GREETING, p)
            })
            .insert(Category::Generic, Some(SubTopic::Help), |p| fill(bodies::HELP, p));

        bank
    }

    /// Shared handle to the built-in bank.
    pub fn shared() -> Arc<TemplateBank> {
        Arc::clone(&STANDARD)
    }

    /// Register or replace the template for a key.
    pub fn insert(
        &mut self,
        category: Category,
        sub_topic: Option<SubTopic>,
        template: TemplateFn,
    ) -> &mut Self {
        self.table
            .entry(category)
            .or_default()
            .insert(sub_topic, template);
        self
    }

    pub fn contains(&self, category: Category, sub_topic: Option<SubTopic>) -> bool {
        self.lookup(category, sub_topic).is_some()
    }

    /// Render the template registered for (category, sub-topic).
    ///
    /// Rendering is pure: equal inputs give equal output.
    pub fn render(
        &self,
        category: Category,
        sub_topic: Option<SubTopic>,
        params: &TemplateParams<'_>,
    ) -> Result<String, ChatError> {
        let template = self
            .lookup(category, sub_topic)
            .ok_or(ChatError::MissingTemplate {
                category,
                sub_topic,
            })?;
        Ok(template(params))
    }

    fn lookup(&self, category: Category, sub_topic: Option<SubTopic>) -> Option<TemplateFn> {
        self.table.get(&category)?.get(&sub_topic).copied()
    }
}

/// Greeting shown when a session starts.
pub fn welcome(user_name: &str, service_label: &str) -> String {
    let label = service_label.to_lowercase();
    let params = TemplateParams {
        service_label: &label,
        ..TemplateParams::new(user_name, "")
    };
    fill(bodies::WELCOME, &params)
}

// =============================================================================
// Refined templates
// =============================================================================

fn variant(params: &TemplateParams<'_>) -> String {
    if Lexicon::global().topic_matches(params.message, SubTopic::Symptom) {
        fill(bodies::VARIANT_SYMPTOMS, params)
    } else {
        fill(bodies::VARIANT_OVERVIEW, params)
    }
}

fn symptom(params: &TemplateParams<'_>) -> String {
    let body = match params.matched_keyword {
        Some("fever") => bodies::FEVER,
        Some("cough") => bodies::COUGH,
        _ => bodies::SYMPTOM_INDEX,
    };
    fill(body, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;

    fn params<'a>(user: &'a str, message: &'a str) -> TemplateParams<'a> {
        TemplateParams::new(user, message)
    }

    #[test]
    fn test_every_reachable_pair_has_a_template() {
        let bank = TemplateBank::standard();
        for (category, sub_topic) in Classifier::reachable() {
            assert!(
                bank.contains(category, sub_topic),
                "missing template for {category}/{sub_topic:?}"
            );
        }
    }

    #[test]
    fn test_every_template_addresses_the_user() {
        let bank = TemplateBank::standard();
        for (category, sub_topic) in Classifier::reachable() {
            let text = bank
                .render(category, sub_topic, &params("Priya", "anything at all"))
                .unwrap();
            assert!(!text.is_empty());
            assert!(text.contains("Priya"), "{category}/{sub_topic:?} omits the user");
            assert!(!text.contains("{user}"));
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let bank = TemplateBank::standard();
        let p = params("Sam", "What are Omicron symptoms?");
        let first = bank.render(Category::Medical, Some(SubTopic::Variant), &p).unwrap();
        let second = bank.render(Category::Medical, Some(SubTopic::Variant), &p).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_template_error() {
        let bank = TemplateBank::empty();
        let err = bank
            .render(Category::Data, Some(SubTopic::Search), &params("A", "b"))
            .unwrap_err();
        assert!(matches!(
            err,
            ChatError::MissingTemplate {
                category: Category::Data,
                sub_topic: Some(SubTopic::Search)
            }
        ));
    }

    #[test]
    fn test_insert_replaces_existing_template() {
        let mut bank = TemplateBank::standard();
        bank.insert(Category::Emergency, None, |p| format!("call 911, {}", p.user_name));
        let text = bank.render(Category::Emergency, None, &params("Jo", "")).unwrap();
        assert_eq!(text, "call 911, Jo");
    }

    #[test]
    fn test_variant_picks_symptom_body_when_symptoms_mentioned() {
        let bank = TemplateBank::standard();
        let text = bank
            .render(
                Category::Medical,
                Some(SubTopic::Variant),
                &params("Alex", "What are Omicron symptoms?"),
            )
            .unwrap();
        assert!(text.contains("Omicron Symptoms"));
        assert!(text.contains("Alex"));

        let text = bank
            .render(
                Category::Medical,
                Some(SubTopic::Variant),
                &params("Alex", "Tell me about omicron"),
            )
            .unwrap();
        assert!(text.contains("About the Omicron Variant"));
    }

    #[test]
    fn test_symptom_body_follows_matched_keyword() {
        let bank = TemplateBank::standard();
        let render = |keyword| {
            let p = TemplateParams {
                matched_keyword: keyword,
                ..params("Kim", "x")
            };
            bank.render(Category::Medical, Some(SubTopic::Symptom), &p).unwrap()
        };
        assert!(render(Some("fever")).contains("About Fever"));
        assert!(render(Some("cough")).contains("About Cough"));
        assert!(render(Some("headache")).contains("Symptom Information"));
        assert!(render(None).contains("Symptom Information"));
    }

    #[test]
    fn test_search_template_uses_term() {
        let bank = TemplateBank::standard();
        let p = TemplateParams {
            search_term: Some("fever experiences"),
            ..params("Lee", "search for fever experiences")
        };
        let text = bank.render(Category::Data, Some(SubTopic::Search), &p).unwrap();
        assert!(text.contains("\"fever experiences\""));

        let text = bank
            .render(Category::Data, Some(SubTopic::Search), &params("Lee", "find"))
            .unwrap();
        assert!(text.contains(DEFAULT_SEARCH_TERM));
    }

    #[test]
    fn test_service_overview_shows_label_and_question() {
        let bank = TemplateBank::standard();
        let p = TemplateParams {
            service_label: Category::General.label(),
            ..params("Ana", "Is ibuprofen safe?")
        };
        let text = bank.render(Category::General, None, &p).unwrap();
        assert!(text.contains("Service: 💊 General Health Queries"));
        assert!(text.contains("Question: \"Is ibuprofen safe?\""));
    }

    #[test]
    fn test_default_template_echoes_message() {
        let bank = TemplateBank::standard();
        let text = bank
            .render(Category::Generic, None, &params("Bo", "tell me a joke"))
            .unwrap();
        assert!(text.contains("\"tell me a joke\""));
    }

    #[test]
    fn test_echo_truncates_long_messages() {
        let long = "a".repeat(150);
        let p = params("Bo", &long);
        let echo = p.echo();
        assert_eq!(echo.chars().count(), 103);
        assert!(echo.ends_with("..."));

        let exact = "b".repeat(100);
        assert_eq!(params("Bo", &exact).echo(), exact.as_str());
    }

    #[test]
    fn test_echo_counts_characters_not_bytes() {
        let long = "é".repeat(120);
        let p = TemplateParams {
            echo_max_chars: 10,
            ..params("Bo", &long)
        };
        assert_eq!(p.echo(), format!("{}...", "é".repeat(10)));
    }

    #[test]
    fn test_placeholders_in_message_are_not_expanded() {
        let bank = TemplateBank::standard();
        let text = bank
            .render(Category::Generic, None, &params("Bo", "what is {user}?"))
            .unwrap();
        assert!(text.contains("\"what is {user}?\""));
    }

    #[test]
    fn test_welcome_lowercases_label() {
        let text = welcome("Alex", Category::Health.label());
        assert_eq!(
            text,
            "Hello Alex! 👋 I'm ready to help you with 🩺 health status assessment. What would you like to know?"
        );
    }

    #[test]
    fn test_shared_bank_is_standard() {
        let shared = TemplateBank::shared();
        assert!(shared.contains(Category::Chat, None));
        assert!(Arc::ptr_eq(&shared, &TemplateBank::shared()));
    }
}
