//! Builtin Category Definitions
//!
//! The fixed thought buckets and the ordered keyword rules that assign
//! dump fragments to them.

use std::fmt;

/// A thought bucket.
///
/// `ALL` gives the order sections appear in a rendered dump; rule
/// priority is a separate concern (see [`CATEGORY_RULES`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ideas,
    Questions,
    Projects,
    Resources,
    Random,
}

impl Category {
    /// Report enumeration order.
    pub const ALL: [Category; 5] = [
        Category::Ideas,
        Category::Questions,
        Category::Projects,
        Category::Resources,
        Category::Random,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ideas => "ideas",
            Category::Questions => "questions",
            Category::Projects => "projects",
            Category::Resources => "resources",
            Category::Random => "random",
        }
    }

    /// Section heading form ("Ideas", "Questions", ...).
    pub fn title(&self) -> &'static str {
        match self {
            Category::Ideas => "Ideas",
            Category::Questions => "Questions",
            Category::Projects => "Projects",
            Category::Resources => "Resources",
            Category::Random => "Random",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classification rule.
///
/// A fragment matches when any literal appears in it verbatim, or any
/// keyword appears in its lowercase form. A rule with no keywords and
/// no literals matches unconditionally.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: Category,
    /// Case-insensitive substring keywords.
    pub keywords: &'static [&'static str],
    /// Literal substrings checked before the keywords (e.g. "?").
    pub literals: &'static [&'static str],
}

impl CategoryRule {
    pub fn matches(&self, fragment: &str) -> bool {
        if self.is_fallback() {
            return true;
        }
        if self.literals.iter().any(|l| fragment.contains(l)) {
            return true;
        }
        let lower = fragment.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k))
    }

    pub fn is_fallback(&self) -> bool {
        self.keywords.is_empty() && self.literals.is_empty()
    }
}

/// Ordered rule list, first match wins.
///
/// Priority: projects > questions > ideas > resources, with `random`
/// as the unconditional fallback in last position.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Projects,
        keywords: &["build", "create", "app", "website", "launch", "make"],
        literals: &[],
    },
    CategoryRule {
        category: Category::Questions,
        keywords: &["how", "why", "what", "when", "should"],
        literals: &["?"],
    },
    CategoryRule {
        category: Category::Ideas,
        keywords: &["idea", "thought", "maybe", "perhaps", "consider"],
        literals: &[],
    },
    CategoryRule {
        category: Category::Resources,
        keywords: &["link", "book", "tool", "site", "url", "read"],
        literals: &[],
    },
    CategoryRule {
        category: Category::Random,
        keywords: &[],
        literals: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_cover_every_category() {
        for category in Category::ALL {
            assert!(
                CATEGORY_RULES.iter().any(|r| r.category == category),
                "No rule for {:?}",
                category
            );
        }
    }

    #[test]
    fn test_last_rule_is_fallback() {
        let last = CATEGORY_RULES.last().unwrap();
        assert!(last.is_fallback());
        assert_eq!(last.category, Category::Random);
        assert!(last.matches("anything at all"));
        assert!(last.matches(""));
    }

    #[test]
    fn test_only_fallback_is_unconditional() {
        let unconditional = CATEGORY_RULES.iter().filter(|r| r.is_fallback()).count();
        assert_eq!(unconditional, 1);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let projects = &CATEGORY_RULES[0];
        assert!(projects.matches("BUILD a garden shed"));
        assert!(projects.matches("launch the newsletter"));
        assert!(!projects.matches("water the plants"));
    }

    #[test]
    fn test_question_mark_literal() {
        let questions = &CATEGORY_RULES[1];
        assert!(questions.matches("is this enough?"));
        assert!(questions.matches("HOW does it work"));
        assert!(!questions.matches("a plain statement"));
    }
}
