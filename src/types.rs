//! Wire types shared with the site's API endpoints

use serde::{Deserialize, Serialize};

/// A downloadable item shown in the resource center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub file_size: String,
    pub link: String,
}

impl Resource {
    /// Icon shown in the list; falls back to a plain document glyph.
    pub fn display_icon(&self) -> &str {
        self.icon.as_deref().unwrap_or("\u{1F4C4}")
    }
}

/// Body for `POST /api/submit`.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackSubmission {
    pub content: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FeedbackSubmission {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: "feedback",
        }
    }
}

/// Error body returned by the submit endpoint on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_decodes_camel_case_wire_format() {
        let json = r#"{
            "title": "Starter Kit",
            "description": "Everything you need to get going",
            "category": "Templates",
            "icon": "🧰",
            "fileSize": "2.4 MB",
            "link": "https://example.com/starter.zip"
        }"#;

        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.title, "Starter Kit");
        assert_eq!(resource.category, "Templates");
        assert_eq!(resource.file_size, "2.4 MB");
        assert_eq!(resource.display_icon(), "🧰");
    }

    #[test]
    fn resource_icon_defaults_when_missing() {
        let json = r#"{
            "title": "Checklist",
            "description": "Print-friendly launch checklist",
            "category": "Guides",
            "fileSize": "180 KB",
            "link": "https://example.com/checklist.pdf"
        }"#;

        let resource: Resource = serde_json::from_str(json).unwrap();
        assert!(resource.icon.is_none());
        assert_eq!(resource.display_icon(), "\u{1F4C4}");
    }

    #[test]
    fn feedback_submission_tags_the_payload_type() {
        let body = FeedbackSubmission::new("more templates please");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["content"], "more templates please");
        assert_eq!(json["type"], "feedback");
    }

    #[test]
    fn submit_error_body_tolerates_a_missing_message() {
        let body: SubmitErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());

        let body: SubmitErrorBody = serde_json::from_str(r#"{"error": "mailbox full"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("mailbox full"));
    }
}
