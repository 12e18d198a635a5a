//! Intent classification and response synthesis for Medibot.
//!
//! Routes free-text messages to a category and sub-topic using fixed keyword
//! lexicons, then renders the matching response template. No model, no
//! network: every message gets an answer.

pub mod classifier;
pub mod composer;
pub mod delay;
pub mod error;
pub mod extractor;
pub mod lexicon;
pub mod templates;

pub use classifier::Classifier;
pub use composer::ResponseComposer;
pub use delay::{NoDelay, RandomDelay, ThinkingDelay};
pub use error::ChatError;
pub use extractor::extract_term;
pub use lexicon::Lexicon;
pub use templates::{TemplateBank, TemplateParams};
