//! Inline markup-to-HTML substitution rules for broadcast content.
//!
//! This crate provides a small rewrite engine for lightweight inline markup:
//! an ordered list of pattern/replacement rules is applied to a string, and
//! every matched span is rewritten to its HTML equivalent. The engine is
//! pure and total: it performs no I/O and never fails, and input without
//! markup passes through unchanged.
//!
//! # Example
//!
//! ```rust
//! use broadcast_markup::{Ruleset, Transformer};
//!
//! let engine = Transformer::new(Ruleset::builtin());
//!
//! assert_eq!(engine.transform("**bold**"), "<b>bold</b>");
//! assert_eq!(engine.transform("_italic_"), "<i>italic</i>");
//! assert_eq!(engine.transform("`code`"), "<code>code</code>");
//! assert_eq!(
//!     engine.transform("[site](https://example.com)"),
//!     "<a href=\"https://example.com\" target=\"_blank\">site</a>",
//! );
//! ```
//!
//! # Substitution semantics
//!
//! Rules run in list order, each rule consuming the previous rule's output.
//! Per rule, all non-overlapping matches are collected first; then, for each
//! match in order, every literal occurrence of the matched text anywhere in
//! the string is replaced with that match's replacement. Keying the rewrite
//! on the matched text (rather than its position) means identical spans are
//! always rewritten consistently:
//!
//! ```rust
//! use broadcast_markup::Transformer;
//!
//! let engine = Transformer::default();
//! assert_eq!(engine.transform("**a** **a**"), "<b>a</b> <b>a</b>");
//! ```
//!
//! # Limitations
//!
//! There is no escape mechanism for literal delimiter characters: a pair of
//! asterisks in ordinary prose will be read as bold markup. Unbalanced
//! delimiters never match and are left alone.

use regex::{Captures, Regex};

/// Replacement function invoked for each match of a rule's pattern.
///
/// Receives the full match and its capture groups, returns the replacement
/// text. Must be pure.
pub type ReplaceFn = fn(&Captures) -> String;

/// A single markup substitution rule: a pattern over text and a function
/// computing the replacement for each match.
///
/// Rules are immutable once constructed.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replace: ReplaceFn,
}

impl Rule {
    /// Creates a rule from a compiled pattern and a replacement function.
    pub fn new(pattern: Regex, replace: ReplaceFn) -> Self {
        Self { pattern, replace }
    }

    /// The rule's pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// An ordered, immutable list of [`Rule`]s.
///
/// Order is significant: each rule operates on the already-substituted
/// output of the rules before it. The set is built once (normally at
/// process start) and passed to [`Transformer::new`]; there is no global
/// rule registry.
#[derive(Debug, Clone)]
pub struct Ruleset {
    rules: Vec<Rule>,
}

impl Ruleset {
    /// Creates a ruleset from an ordered list of rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in markup rules, in application order:
    ///
    /// 1. Bold: `**text**` → `<b>text</b>`
    /// 2. Italic: `_text_` → `<i>text</i>`
    /// 3. Link: `[label](url)` → `<a href="url" target="_blank">label</a>`
    /// 4. Inline code: `` `text` `` → `<code>text</code>`
    pub fn builtin() -> Self {
        Self::new(vec![
            rule(r"\*{2}([^*]+)\*{2}", |m| format!("<b>{}</b>", &m[1])),
            rule(r"_([^_]+)_", |m| format!("<i>{}</i>", &m[1])),
            rule(r"\[([^\]]+)\]\(([^)]+)\)", |m| {
                format!("<a href=\"{}\" target=\"_blank\">{}</a>", &m[2], &m[1])
            }),
            rule(r"`([^`]+)`", |m| format!("<code>{}</code>", &m[1])),
        ])
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the rules in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

fn rule(pattern: &str, replace: ReplaceFn) -> Rule {
    // Built-in patterns are fixed literals; exercised by the unit tests.
    Rule::new(Regex::new(pattern).expect("invalid built-in pattern"), replace)
}

/// The markup substitution engine.
///
/// Holds a fixed [`Ruleset`] and exposes [`transform`](Self::transform).
/// Construct once and reuse; the engine is read-only after construction.
#[derive(Debug, Clone)]
pub struct Transformer {
    rules: Ruleset,
}

impl Transformer {
    /// Creates an engine over the given ruleset.
    pub fn new(rules: Ruleset) -> Self {
        Self { rules }
    }

    /// Applies every rule, in order, to `input`.
    ///
    /// For each rule, all non-overlapping matches are found against the
    /// current string; each match then rewrites every literal occurrence of
    /// its matched text. The output of one rule is the input of the next.
    /// Input without matches is returned unchanged.
    pub fn transform(&self, input: &str) -> String {
        let mut text = input.to_string();

        for rule in self.rules.iter() {
            // Collect before rewriting: replacements must not feed new
            // matches back into the same rule's scan.
            let substitutions: Vec<(String, String)> = rule
                .pattern
                .captures_iter(&text)
                .map(|m| (m[0].to_string(), (rule.replace)(&m)))
                .collect();

            for (matched, replacement) in substitutions {
                text = text.replace(&matched, &replacement);
            }
        }

        text
    }
}

impl Default for Transformer {
    /// An engine over [`Ruleset::builtin`].
    fn default() -> Self {
        Self::new(Ruleset::builtin())
    }
}
