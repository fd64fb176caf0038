//! Literal import rewrites.
//!
//! A rewrite is a plain substring mapping: no import syntax is parsed, and
//! every occurrence of `from` is replaced with `to`. Rules are applied in
//! order, each one seeing the output of the previous.

use serde::Serialize;

/// One literal substring mapping from an alias import to a relative import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportRewrite {
    /// Text to search for.
    pub from: &'static str,
    /// Replacement text.
    pub to: &'static str,
}

impl ImportRewrite {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        ImportRewrite { from, to }
    }
}

/// Rewrites for files living in `src/components/ui`.
///
/// `@/lib/utils` sits two levels up from the UI directory; the button
/// module is a sibling.
pub const UI_IMPORT_REWRITES: [ImportRewrite; 2] = [
    ImportRewrite::new(
        r#"import { cn } from "@/lib/utils";"#,
        r#"import { cn } from "../../lib/utils";"#,
    ),
    ImportRewrite::new(
        r#"import { buttonVariants } from "@/components/ui/button";"#,
        r#"import { buttonVariants } from "./button";"#,
    ),
];

/// How many times a single rule fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedRewrite {
    pub from: String,
    pub to: String,
    pub count: usize,
}

/// Result of running a rule set over one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The rewritten text (equal to the input when nothing fired).
    pub content: String,
    /// Rules that replaced at least one occurrence, in rule order.
    pub applied: Vec<AppliedRewrite>,
}

impl RewriteOutcome {
    /// Whether any rule replaced anything.
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Apply `rules` to `content` in order.
pub fn apply_rewrites(content: &str, rules: &[ImportRewrite]) -> RewriteOutcome {
    let mut current = content.to_string();
    let mut applied = Vec::new();

    for rule in rules {
        // An empty pattern would match between every char.
        if rule.from.is_empty() || rule.from == rule.to {
            continue;
        }
        let count = current.matches(rule.from).count();
        if count == 0 {
            continue;
        }
        current = current.replace(rule.from, rule.to);
        applied.push(AppliedRewrite {
            from: rule.from.to_string(),
            to: rule.to.to_string(),
            count,
        });
    }

    RewriteOutcome {
        content: current,
        applied,
    }
}

// ============================================================================
// Tests
// ============================================================================
