//! Response composer: the engine's single entry point.
//!
//! Pause, classify, extract a search term when needed, render. Composing
//! never fails; template defects degrade to the generic reply.

use std::sync::Arc;

use medibot_core::config::ChatConfig;
use medibot_core::{Category, Classification, SessionContext, SubTopic, DEFAULT_SERVICE_LABEL};
use tracing::{debug, error, warn};

use crate::classifier::Classifier;
use crate::delay::{self, NoDelay, ThinkingDelay};
use crate::extractor::extract_term;
use crate::templates::{self, TemplateBank, TemplateParams};

/// Returned when not even the generic template can be rendered.
pub const FALLBACK_RESPONSE: &str =
    "I'm sorry, I couldn't prepare an answer just now. Please try rephrasing your question.";

/// Turns a user message into a formatted reply.
pub struct ResponseComposer {
    classifier: Classifier,
    templates: Arc<TemplateBank>,
    delay: Box<dyn ThinkingDelay>,
    echo_max_chars: usize,
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::from_config(&ChatConfig::default())
    }
}

impl ResponseComposer {
    /// Composer with the built-in templates and no thinking pause.
    pub fn new() -> Self {
        Self::with_delay(Box::new(NoDelay))
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            echo_max_chars: config.echo_max_chars,
            ..Self::with_delay(delay::from_config(config))
        }
    }

    pub fn with_delay(delay: Box<dyn ThinkingDelay>) -> Self {
        Self {
            classifier: Classifier::new(),
            templates: TemplateBank::shared(),
            delay,
            echo_max_chars: ChatConfig::default().echo_max_chars,
        }
    }

    /// Replace the template bank.
    pub fn with_templates(mut self, templates: Arc<TemplateBank>) -> Self {
        self.templates = templates;
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Answer a message after the thinking pause.
    ///
    /// Dropping the returned future during the pause abandons the request
    /// without side effects.
    pub async fn compose(&self, message: &str, context: &SessionContext) -> String {
        self.delay.pause().await;
        self.compose_now(message, context)
    }

    /// Answer a message immediately.
    pub fn compose_now(&self, message: &str, context: &SessionContext) -> String {
        let classification = self.classifier.classify(message, context.selected_service);
        let search_term = match classification.sub_topic {
            Some(SubTopic::Search) => Some(extract_term(message)),
            _ => None,
        };
        debug!(
            category = %classification.category,
            sub_topic = ?classification.sub_topic,
            search_term = ?search_term,
            "Composing response"
        );

        let params = TemplateParams {
            user_name: context.display_name(),
            message,
            search_term: search_term.as_deref(),
            service_label: service_label(context),
            matched_keyword: classification.matched_keyword,
            echo_max_chars: self.echo_max_chars,
        };
        self.render_or_degrade(&classification, &params)
    }

    /// Greeting for a session that just selected its service.
    pub fn welcome(&self, context: &SessionContext) -> String {
        templates::welcome(context.display_name(), service_label(context))
    }

    fn render_or_degrade(
        &self,
        classification: &Classification,
        params: &TemplateParams<'_>,
    ) -> String {
        let err = match self.templates.render(
            classification.category,
            classification.sub_topic,
            params,
        ) {
            Ok(text) => return text,
            Err(e) => e,
        };
        warn!(error = %err, "Template unavailable, using generic response");

        match self.templates.render(Category::Generic, None, params) {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "Generic template unavailable");
                FALLBACK_RESPONSE.to_string()
            }
        }
    }
}

fn service_label(context: &SessionContext) -> &'static str {
    context
        .selected_service
        .map(|c| c.label())
        .unwrap_or(DEFAULT_SERVICE_LABEL)
}
