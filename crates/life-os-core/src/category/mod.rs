//! # Category Module
//!
//! Files every fragment of a brain dump into exactly one of five fixed
//! buckets: ideas, questions, projects, resources, random.
//!
//! Classification is an ordered list of keyword rules evaluated first
//! match wins, ending with an unconditional fallback. The rule order is
//! the priority order (projects before questions before ideas before
//! resources); the bucket order used in rendered reports is a separate,
//! also fixed, enumeration.
//!
//! ```rust
//! use life_os_core::category::{Category, ThoughtClassifier};
//!
//! let classifier = ThoughtClassifier::new();
//!
//! // "build" outranks the trailing question mark.
//! assert_eq!(
//!     classifier.classify_fragment("should I build an app?"),
//!     Category::Projects
//! );
//!
//! // No keyword, no question mark: fallback bucket.
//! assert_eq!(
//!     classifier.classify_fragment("went for a walk"),
//!     Category::Random
//! );
//! ```

mod builtin;
mod classifier;

// Re-exports
pub use builtin::{Category, CategoryRule, CATEGORY_RULES};
pub use classifier::{split_thoughts, CategorizedThoughts, ThoughtClassifier};
