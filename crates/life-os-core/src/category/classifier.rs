//! Thought Classifier
//!
//! Splits a brain dump into fragments and files each one into exactly
//! one category via the ordered rule list.

use std::collections::HashMap;

use super::builtin::{Category, CategoryRule, CATEGORY_RULES};

/// Split raw dump text into trimmed, non-empty thought fragments.
///
/// Separators are newlines, bullet characters and hyphens; runs of
/// separators produce no empty fragments.
pub fn split_thoughts(text: &str) -> Vec<&str> {
    text.split(['\n', '•', '-'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Fragments grouped by category.
///
/// Every category is present (possibly empty) and insertion order is
/// preserved within each one.
#[derive(Debug, Clone)]
pub struct CategorizedThoughts {
    buckets: HashMap<Category, Vec<String>>,
}

impl CategorizedThoughts {
    pub fn new() -> Self {
        let buckets = Category::ALL.into_iter().map(|c| (c, Vec::new())).collect();
        Self { buckets }
    }

    /// Append a fragment unless the exact text is already in this
    /// category's list.
    fn insert(&mut self, category: Category, fragment: &str) {
        let items = self.buckets.entry(category).or_default();
        if !items.iter().any(|t| t == fragment) {
            items.push(fragment.to_string());
        }
    }

    pub fn get(&self, category: Category) -> &[String] {
        self.buckets.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Non-empty categories with their fragments, in report order.
    pub fn sections(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|(_, items)| !items.is_empty())
    }

    /// Fragment count per category, in report order.
    pub fn counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.get(c).len()))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Default for CategorizedThoughts {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyword classifier over an ordered rule list.
#[derive(Debug)]
pub struct ThoughtClassifier {
    rules: &'static [CategoryRule],
}

impl ThoughtClassifier {
    pub fn new() -> Self {
        Self {
            rules: CATEGORY_RULES,
        }
    }

    /// Assign a fragment to the first matching rule's category.
    ///
    /// The rule list ends with an unconditional fallback, so every
    /// fragment lands somewhere; later rules are never evaluated once
    /// one matches.
    pub fn classify_fragment(&self, fragment: &str) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.matches(fragment))
            .map(|rule| rule.category)
            .unwrap_or(Category::Random)
    }

    /// Split `text` and classify every fragment.
    pub fn classify(&self, text: &str) -> CategorizedThoughts {
        let mut categorized = CategorizedThoughts::new();
        for fragment in split_thoughts(text) {
            let category = self.classify_fragment(fragment);
            categorized.insert(category, fragment);
        }
        categorized
    }
}

impl Default for ThoughtClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_newlines_and_bullets() {
        let fragments = split_thoughts("first thing\n• second thing\n- third thing");
        assert_eq!(fragments, vec!["first thing", "second thing", "third thing"]);
    }

    #[test]
    fn test_split_collapses_separator_runs() {
        let fragments = split_thoughts("one\n\n\n••--two");
        assert_eq!(fragments, vec!["one", "two"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_thoughts("").is_empty());
        assert!(split_thoughts("  \n • - \n ").is_empty());
    }

    #[test]
    fn test_project_keywords_win_over_questions() {
        let classifier = ThoughtClassifier::new();
        // Contains both "should" and "?" but "build" takes priority.
        assert_eq!(
            classifier.classify_fragment("should I build an app?"),
            Category::Projects
        );
    }

    #[test]
    fn test_question_mark_classifies_as_question() {
        let classifier = ThoughtClassifier::new();
        assert_eq!(
            classifier.classify_fragment("is this worth doing?"),
            Category::Questions
        );
    }

    #[test]
    fn test_unmatched_fragment_falls_back_to_random() {
        let classifier = ThoughtClassifier::new();
        assert_eq!(
            classifier.classify_fragment("went for a jog"),
            Category::Random
        );
    }

    #[test]
    fn test_every_fragment_lands_in_exactly_one_category() {
        let text = "build a birdhouse\nwhy is the sky blue?\nidea: paint the fence\nbook about gardening\nwent for a jog";
        let classifier = ThoughtClassifier::new();
        let categorized = classifier.classify(text);
        assert_eq!(categorized.total(), split_thoughts(text).len());
    }

    #[test]
    fn test_duplicate_fragment_inserted_once_per_category() {
        let classifier = ThoughtClassifier::new();
        let categorized = classifier.classify("idea: do X\nidea: do X");
        assert_eq!(categorized.get(Category::Ideas), ["idea: do X"]);
        assert_eq!(categorized.total(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let classifier = ThoughtClassifier::new();
        let categorized = classifier.classify("idea: zebra\nidea: apple");
        assert_eq!(
            categorized.get(Category::Ideas),
            ["idea: zebra", "idea: apple"]
        );
    }

    #[test]
    fn test_sections_follow_report_order() {
        let classifier = ThoughtClassifier::new();
        let categorized =
            classifier.classify("went for a jog\nbuild a shed\nmaybe try pottery");
        let order: Vec<Category> = categorized.sections().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![Category::Ideas, Category::Projects, Category::Random]
        );
    }

    #[test]
    fn test_empty_text_yields_empty_buckets() {
        let classifier = ThoughtClassifier::new();
        let categorized = classifier.classify("   \n  ");
        assert!(categorized.is_empty());
        assert_eq!(categorized.counts().iter().map(|(_, n)| n).sum::<usize>(), 0);
    }
}
