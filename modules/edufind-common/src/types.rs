use serde::{Deserialize, Serialize};

use crate::error::EduFindError;

// --- Resource Types ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Video,
    Course,
    Documentation,
    Practice,
    Other,
}

impl ResourceType {
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Video,
        ResourceType::Course,
        ResourceType::Documentation,
        ResourceType::Practice,
        ResourceType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Video => "video",
            ResourceType::Course => "course",
            ResourceType::Documentation => "documentation",
            ResourceType::Practice => "practice",
            ResourceType::Other => "other",
        }
    }

    /// Title-cased display name, e.g. "Documentation".
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::Video => "Video",
            ResourceType::Course => "Course",
            ResourceType::Documentation => "Documentation",
            ResourceType::Practice => "Practice",
            ResourceType::Other => "Other",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResourceType {
    type Err = EduFindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "video" => Ok(Self::Video),
            "course" => Ok(Self::Course),
            "documentation" => Ok(Self::Documentation),
            "practice" => Ok(Self::Practice),
            "other" => Ok(Self::Other),
            other => Err(EduFindError::Validation(format!(
                "unknown resource type: {other}"
            ))),
        }
    }
}

/// `{value, label}` pair served by the resource-types endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceTypeOption {
    pub value: ResourceType,
    pub label: String,
}

impl From<ResourceType> for ResourceTypeOption {
    fn from(t: ResourceType) -> Self {
        Self {
            value: t,
            label: t.label().to_string(),
        }
    }
}

pub fn resource_type_options() -> Vec<ResourceTypeOption> {
    ResourceType::ALL.into_iter().map(Into::into).collect()
}

// --- Resource ---

/// A classified, scored search result. Scores are always within [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    pub description: String,
    pub resource_type: ResourceType,
    pub credibility_score: f64,
    pub relevance_score: f64,
}

impl Resource {
    /// Mean of credibility and relevance; the ranking key.
    pub fn combined_score(&self) -> f64 {
        (self.credibility_score + self.relevance_score) / 2.0
    }
}

// --- Search envelope ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub topic: String,
    #[serde(default, alias = "resourceTypes")]
    pub resource_types: Option<Vec<ResourceType>>,
}

impl SearchQuery {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            resource_types: None,
        }
    }

    pub fn with_types(mut self, types: Vec<ResourceType>) -> Self {
        self.resource_types = Some(types);
        self
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.topic.trim().is_empty() {
            return Err(EduFindError::Validation("topic must not be empty".into()));
        }
        Ok(())
    }
}

/// One raw organic hit from the search provider, before classification.
/// Providers omit fields freely; a hit without a link is dropped downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHit {
    pub link: Option<String>,
    pub title: Option<String>,
    pub snippet: Option<String>,
}

impl SearchHit {
    pub fn new(link: &str, title: &str, snippet: &str) -> Self {
        Self {
            link: Some(link.to_string()),
            title: Some(title.to_string()),
            snippet: Some(snippet.to_string()),
        }
    }
}
