use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Name shown when the caller did not supply one.
pub const ANONYMOUS_USER: &str = "User";

/// Label used for categories that are not user-selectable services.
pub const DEFAULT_SERVICE_LABEL: &str = "General Healthcare";

// =============================================================================
// Category
// =============================================================================

/// Top-level topic bucket for a message.
///
/// The first six variants are services a user can pick up front; the last
/// three are only ever inferred from message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "health")]
    Health,
    #[serde(rename = "insurance")]
    Insurance,
    #[serde(rename = "appointments")]
    Appointments,
    #[serde(rename = "general")]
    General,
    #[serde(rename = "emergency")]
    Emergency,
    #[serde(rename = "chat")]
    Chat,
    #[serde(rename = "medical-sub")]
    Medical,
    #[serde(rename = "data-sub")]
    Data,
    #[serde(rename = "general-sub")]
    Generic,
}

impl Category {
    /// Every category, services first.
    pub const ALL: [Category; 9] = [
        Category::Health,
        Category::Insurance,
        Category::Appointments,
        Category::General,
        Category::Emergency,
        Category::Chat,
        Category::Medical,
        Category::Data,
        Category::Generic,
    ];

    /// The user-selectable services, in menu order.
    pub const SERVICES: [Category; 6] = [
        Category::Health,
        Category::Insurance,
        Category::Appointments,
        Category::General,
        Category::Emergency,
        Category::Chat,
    ];

    /// Wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Insurance => "insurance",
            Category::Appointments => "appointments",
            Category::General => "general",
            Category::Emergency => "emergency",
            Category::Chat => "chat",
            Category::Medical => "medical-sub",
            Category::Data => "data-sub",
            Category::Generic => "general-sub",
        }
    }

    /// Whether a user can select this category directly.
    pub fn is_service(&self) -> bool {
        !matches!(self, Category::Medical | Category::Data | Category::Generic)
    }

    /// Display label shown in menus and response headers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Health => "🩺 Health Status Assessment",
            Category::Insurance => "🏥 Insurance Information",
            Category::Appointments => "📅 Doctor Appointment Assistance",
            Category::General => "💊 General Health Queries",
            Category::Emergency => "🚨 Emergency Guidance",
            Category::Chat => "💬 Chat Freely",
            Category::Medical | Category::Data | Category::Generic => DEFAULT_SERVICE_LABEL,
        }
    }

    /// One-line description of what the service covers.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Health => "Analyze symptoms, get health guidance, understand conditions",
            Category::Insurance => "Coverage questions, claims help, policy information",
            Category::Appointments => "Find nearby doctors, book appointments, get referrals",
            Category::General => "Medication info, health tips, preventive care",
            Category::Emergency => "Urgent medical advice, emergency contacts, first aid",
            Category::Chat => "Ask any health-related question in natural conversation",
            Category::Medical => "Symptoms, variants, recovery and treatment guidance",
            Category::Data => "Statistics, sentiment and search over reported experiences",
            Category::Generic => "Greetings, help and everything else",
        }
    }

    /// Parse the `selectedService` field of an inbound request.
    ///
    /// Blank input means "no selection". Besides wire names, the older menu
    /// titles ("Health Assessment", "Chat Freely", ...) are accepted.
    pub fn parse_service(raw: &str) -> Result<Option<Category>, ParseCategoryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Some(category) = Category::ALL.iter().find(|c| c.as_str() == key) {
            return Ok(*category);
        }
        match key.as_str() {
            "health assessment" => Ok(Category::Health),
            "general health" => Ok(Category::General),
            "chat freely" => Ok(Category::Chat),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// A string that names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0:?}")]
pub struct ParseCategoryError(pub String);

// =============================================================================
// SubTopic
// =============================================================================

/// Second-level refinement within an inferred category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubTopic {
    /// Named virus variants (medical).
    Variant,
    /// Specific symptoms (medical).
    Symptom,
    /// Recovery and treatment (medical).
    Recovery,
    /// Dataset statistics (data).
    Statistics,
    /// Sentiment breakdown (data).
    Sentiment,
    /// Free-text search over reports (data).
    Search,
    /// Salutations (general-sub).
    Greeting,
    /// Usage guide (general-sub).
    Help,
}

impl SubTopic {
    pub const ALL: [SubTopic; 8] = [
        SubTopic::Variant,
        SubTopic::Symptom,
        SubTopic::Recovery,
        SubTopic::Statistics,
        SubTopic::Sentiment,
        SubTopic::Search,
        SubTopic::Greeting,
        SubTopic::Help,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubTopic::Variant => "variant",
            SubTopic::Symptom => "symptom",
            SubTopic::Recovery => "recovery",
            SubTopic::Statistics => "statistics",
            SubTopic::Sentiment => "sentiment",
            SubTopic::Search => "search",
            SubTopic::Greeting => "greeting",
            SubTopic::Help => "help",
        }
    }

    /// The category this sub-topic refines.
    pub fn parent(&self) -> Category {
        match self {
            SubTopic::Variant | SubTopic::Symptom | SubTopic::Recovery => Category::Medical,
            SubTopic::Statistics | SubTopic::Sentiment | SubTopic::Search => Category::Data,
            SubTopic::Greeting | SubTopic::Help => Category::Generic,
        }
    }
}

impl fmt::Display for SubTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Classification and session context
// =============================================================================

/// Outcome of classifying one message. Produced fresh per call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub sub_topic: Option<SubTopic>,
    /// The keyword that decided the deepest level reached, if any.
    pub matched_keyword: Option<&'static str>,
}

impl Classification {
    /// A bare category decision with no refinement.
    pub fn of(category: Category) -> Self {
        Self {
            category,
            sub_topic: None,
            matched_keyword: None,
        }
    }
}

/// Per-conversation facts supplied by the caller. Read-only to the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_name: String,
    pub selected_service: Option<Category>,
}

impl SessionContext {
    pub fn new(user_name: impl Into<String>, selected_service: Option<Category>) -> Self {
        Self {
            user_name: user_name.into(),
            selected_service,
        }
    }

    /// The user name to address, or [`ANONYMOUS_USER`] when blank.
    pub fn display_name(&self) -> &str {
        let name = self.user_name.trim();
        if name.is_empty() {
            ANONYMOUS_USER
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names_round_trip_through_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_parse_service_blank_is_none() {
        assert_eq!(Category::parse_service("").unwrap(), None);
        assert_eq!(Category::parse_service("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_service_accepts_wire_names_case_insensitively() {
        assert_eq!(
            Category::parse_service("Insurance").unwrap(),
            Some(Category::Insurance)
        );
        assert_eq!(
            Category::parse_service(" medical-sub ").unwrap(),
            Some(Category::Medical)
        );
    }

    #[test]
    fn test_parse_service_accepts_menu_titles() {
        assert_eq!(
            Category::parse_service("Health Assessment").unwrap(),
            Some(Category::Health)
        );
        assert_eq!(
            Category::parse_service("Chat Freely").unwrap(),
            Some(Category::Chat)
        );
    }

    #[test]
    fn test_parse_service_unknown_is_error() {
        let err = Category::parse_service("astrology").unwrap_err();
        assert_eq!(err, ParseCategoryError("astrology".to_string()));
        assert_eq!(err.to_string(), "unknown category: \"astrology\"");
    }

    #[test]
    fn test_services_are_exactly_the_selectable_categories() {
        for category in Category::ALL {
            assert_eq!(
                Category::SERVICES.contains(&category),
                category.is_service(),
                "{category}"
            );
        }
    }

    #[test]
    fn test_inferred_categories_share_default_label() {
        assert_eq!(Category::Medical.label(), DEFAULT_SERVICE_LABEL);
        assert_eq!(Category::Generic.label(), DEFAULT_SERVICE_LABEL);
        assert_ne!(Category::Emergency.label(), DEFAULT_SERVICE_LABEL);
    }

    #[test]
    fn test_sub_topic_parents_are_inferred_categories() {
        for topic in SubTopic::ALL {
            assert!(!topic.parent().is_service(), "{topic}");
        }
        assert_eq!(SubTopic::Search.parent(), Category::Data);
    }

    #[test]
    fn test_display_name_falls_back_when_blank() {
        assert_eq!(SessionContext::new("  ", None).display_name(), ANONYMOUS_USER);
        assert_eq!(SessionContext::new(" Alex ", None).display_name(), "Alex");
    }
}
