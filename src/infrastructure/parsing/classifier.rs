//! Javadoc entry classification
//!
//! Javadoc only describes what a definition term documents in free text
//! ("Class in com.example", "Static method in ...") and, in newer
//! generators, in CSS class names. Classification walks an ordered rule
//! table and stops at the first match. Rules overlap, so the order below is
//! part of the contract.

use crate::domain::JavadocMatchType;

/// One row of the classification table
#[derive(Debug, Clone, Copy)]
pub struct MatchRule {
    pub kind: JavadocMatchType,
    /// Any of these phrases in the definition term text selects `kind`
    pub text_matches: &'static [&'static str],
    /// Substring of the definition term's class attribute that selects `kind`
    pub class_hint: Option<&'static str>,
}

impl MatchRule {
    const fn new(
        kind: JavadocMatchType,
        class_hint: Option<&'static str>,
        text_matches: &'static [&'static str],
    ) -> Self {
        Self {
            kind,
            text_matches,
            class_hint,
        }
    }

    /// Both arguments must already be lower-cased
    fn matches(&self, text: &str, class_name: &str) -> bool {
        self.text_matches
            .iter()
            .any(|needle| text.contains(&needle.to_lowercase()))
            || self
                .class_hint
                .is_some_and(|hint| class_name.contains(hint))
    }
}

/// Classification rules in precedence order
pub const MATCH_RULES: [MatchRule; 12] = [
    MatchRule::new(JavadocMatchType::Class, Some("class"), &["Class in", "- class"]),
    MatchRule::new(JavadocMatchType::StaticMethod, Some("method"), &["Static method in"]),
    MatchRule::new(JavadocMatchType::Field, Some("field"), &["Static variable in", "Field in"]),
    MatchRule::new(JavadocMatchType::Constructor, Some("constructor"), &["Constructor"]),
    MatchRule::new(JavadocMatchType::Method, None, &["Method in", "method.summary"]),
    // Instance variables are indexed as fields.
    MatchRule::new(JavadocMatchType::Field, None, &["Variable in"]),
    MatchRule::new(
        JavadocMatchType::Interface,
        Some("interface"),
        &["Interface in", "- interface"],
    ),
    MatchRule::new(
        JavadocMatchType::Exception,
        Some("exception"),
        &["Exception in", "- exception"],
    ),
    MatchRule::new(JavadocMatchType::Error, Some("error"), &["Error in", "- error"]),
    MatchRule::new(JavadocMatchType::Enum, Some("enum"), &["Enum in", "- enum"]),
    MatchRule::new(JavadocMatchType::Notation, Some("annotation"), &["Annotation Type"]),
    MatchRule::new(JavadocMatchType::Package, Some("package"), &["package"]),
];

/// Classify a definition term from its full text and its class attribute.
///
/// Matching is case-insensitive. Returns `None` when no rule applies; callers
/// treat that as a skipped entry, not a failure.
pub fn classify(text: &str, class_name: &str) -> Option<JavadocMatchType> {
    let text = text.to_lowercase();
    let class_name = class_name.to_lowercase();
    MATCH_RULES
        .iter()
        .find(|rule| rule.matches(&text, &class_name))
        .map(|rule| rule.kind)
}
