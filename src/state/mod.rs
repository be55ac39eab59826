//! Shared UI state and the rules behind it

use dioxus::prelude::*;

use crate::types::Resource;

/// Top-level tabs. The enum is the whole tab contract: exactly one variant
/// is active at a time, and there is no panel id left to mismatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Feedback,
    Resources,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Feedback => "Share an Idea",
            Tab::Resources => "Resource Center",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Feedback => "\u{1F4A1}",  // 💡
            Tab::Resources => "\u{1F4DA}", // 📚
        }
    }

    pub fn variants() -> &'static [Tab] {
        &[Tab::Feedback, Tab::Resources]
    }
}

/// App-wide state shared through context.
#[derive(Clone, Copy)]
pub struct AppState {
    pub active_tab: Signal<Tab>,
    /// Pending text for the feedback textarea, set by the resource-request
    /// dialog and consumed by the feedback panel.
    pub prefill: Signal<Option<String>>,
}

impl AppState {
    pub fn activate(mut self, tab: Tab) {
        self.active_tab.set(tab);
    }

    /// Switch to the feedback tab with a request template for `name`.
    pub fn request_resource(mut self, name: &str) {
        self.prefill.set(Some(request_template(name)));
        self.active_tab.set(Tab::Feedback);
    }
}

/// Character-counter severity, keeping the site's 700/900 thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warn,
    Danger,
}

impl CounterLevel {
    pub fn for_count(count: usize) -> Self {
        if count > 900 {
            CounterLevel::Danger
        } else if count > 700 {
            CounterLevel::Warn
        } else {
            CounterLevel::Normal
        }
    }

    /// Text class for the counter.
    pub fn text_class(&self) -> &'static str {
        match self {
            CounterLevel::Normal => "text-gray-500",
            CounterLevel::Warn => "text-amber-500",
            CounterLevel::Danger => "text-red-500",
        }
    }
}

/// Trim feedback content; `None` means there is nothing to submit.
pub fn normalize_feedback(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Template dropped into the feedback form when a resource is requested.
pub fn request_template(name: &str) -> String {
    format!("Resource request: {name}\n\nWhy it would help: ")
}

/// Client-side filter over the loaded resource list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceFilter {
    pub search: String,
    pub category: Option<String>,
}

impl ResourceFilter {
    /// Title matching is a case-insensitive substring; category is an exact
    /// match against the select options.
    pub fn matches(&self, resource: &Resource) -> bool {
        let matches_search = resource
            .title
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| resource.category == category);

        matches_search && matches_category
    }
}

/// Distinct categories present in the list, sorted for the select options.
pub fn categories(resources: &[Resource]) -> Vec<String> {
    let mut categories: Vec<String> = resources
        .iter()
        .map(|resource| resource.category.clone())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(title: &str, category: &str) -> Resource {
        Resource {
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            icon: None,
            file_size: "1 MB".to_string(),
            link: "https://example.com/file".to_string(),
        }
    }

    #[test]
    fn counter_levels_follow_the_thresholds() {
        assert_eq!(CounterLevel::for_count(0), CounterLevel::Normal);
        assert_eq!(CounterLevel::for_count(700), CounterLevel::Normal);
        assert_eq!(CounterLevel::for_count(701), CounterLevel::Warn);
        assert_eq!(CounterLevel::for_count(900), CounterLevel::Warn);
        assert_eq!(CounterLevel::for_count(901), CounterLevel::Danger);
    }

    #[test]
    fn whitespace_only_feedback_is_rejected() {
        assert_eq!(normalize_feedback(""), None);
        assert_eq!(normalize_feedback("   \n\t"), None);
        assert_eq!(normalize_feedback("  keep this  "), Some("keep this".to_string()));
    }

    #[test]
    fn search_matches_titles_case_insensitively() {
        let alpha = resource("Alpha", "A");
        let beta = resource("Beta", "B");

        let filter = ResourceFilter {
            search: "al".to_string(),
            category: None,
        };
        assert!(filter.matches(&alpha));
        assert!(!filter.matches(&beta));
    }

    #[test]
    fn category_filter_is_an_exact_match() {
        let alpha = resource("Alpha", "A");
        let beta = resource("Beta", "B");

        let filter = ResourceFilter {
            search: String::new(),
            category: Some("B".to_string()),
        };
        assert!(!filter.matches(&alpha));
        assert!(filter.matches(&beta));
    }

    #[test]
    fn combined_filters_must_both_match() {
        let alpha = resource("Alpha", "A");

        let filter = ResourceFilter {
            search: "al".to_string(),
            category: Some("B".to_string()),
        };
        assert!(!filter.matches(&alpha));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ResourceFilter::default();
        assert!(filter.matches(&resource("Anything", "Misc")));
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let list = vec![
            resource("A", "Templates"),
            resource("B", "Guides"),
            resource("C", "Templates"),
        ];
        assert_eq!(
            categories(&list),
            vec!["Guides".to_string(), "Templates".to_string()]
        );
    }

    #[test]
    fn request_template_embeds_the_resource_name() {
        let text = request_template("Figma starter kit");
        assert!(text.starts_with("Resource request: Figma starter kit"));
        assert!(text.contains("Why it would help:"));
    }

    #[test]
    fn feedback_is_the_default_tab() {
        assert_eq!(Tab::default(), Tab::Feedback);
        assert_eq!(Tab::variants().len(), 2);
    }
}
