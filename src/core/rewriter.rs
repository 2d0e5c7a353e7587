use crate::core::{RewriteOutcome, RuleOutcome};
use crate::utils::error::Result;
use regex::Regex;

/// Layout header: `<div "...-layout">`, `<Menu />`, `<div "...-content">`.
const LAYOUT_HEADER: &str =
    r#"<div className="[^"]*-layout">\s*<Menu />\s*<div className="[^"]*-content">\s*"#;
const MENU_OPEN: &str = "<Menu>\n      ";

/// Two closing divs right before a guarded modal or form block.
const CLOSERS_BEFORE_GUARD: &str =
    r"(\s*)</div>\s*</div>\s*\n\s*(\{(?:showForm|showImportModal|deleteConfirm))";
const GUARD_SEPARATOR: &str = "${1}\n\n      ${2}";

const TRAILING_CLOSE: &str = r"\}\s*\n\s*</div>\s*\n\s*\);\s*\n\};";
const MENU_CLOSE: &str = "}\n      </div>\n    </Menu>\n  );\n};";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    FirstOnly,
    All,
}

#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
    scope: RuleScope,
}

impl RewriteRule {
    pub fn new(
        name: &'static str,
        pattern: &str,
        replacement: &'static str,
        scope: RuleScope,
    ) -> Result<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            replacement,
            scope,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn scope(&self) -> RuleScope {
        self.scope
    }

    /// 套用規則，回傳新內容與替換次數
    pub fn apply(&self, content: &str) -> (String, usize) {
        let limit = match self.scope {
            RuleScope::FirstOnly => 1,
            RuleScope::All => 0,
        };

        let mut replacements = self.pattern.find_iter(content).count();
        if limit > 0 {
            replacements = replacements.min(limit);
        }

        if replacements == 0 {
            return (content.to_string(), 0);
        }

        let rewritten = self
            .pattern
            .replacen(content, limit, self.replacement)
            .into_owned();
        (rewritten, replacements)
    }
}

/// Turns a page with a sibling `<Menu />` into one where `<Menu>` wraps the content.
#[derive(Debug, Clone)]
pub struct Rewriter {
    rules: Vec<RewriteRule>,
}

impl Rewriter {
    pub fn new() -> Result<Self> {
        let rules = vec![
            RewriteRule::new(
                "layout-to-wrapper",
                LAYOUT_HEADER,
                MENU_OPEN,
                RuleScope::FirstOnly,
            )?,
            RewriteRule::new(
                "closing-divs-before-guard",
                CLOSERS_BEFORE_GUARD,
                GUARD_SEPARATOR,
                RuleScope::All,
            )?,
            RewriteRule::new(
                "final-div-to-wrapper-close",
                TRAILING_CLOSE,
                MENU_CLOSE,
                RuleScope::All,
            )?,
        ];

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn rewrite(&self, source: &str) -> RewriteOutcome {
        let mut content = source.to_string();
        let mut outcomes = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (next, replacements) = rule.apply(&content);
            if replacements == 0 {
                tracing::debug!("Rule '{}' matched nothing", rule.name());
            } else {
                tracing::debug!("Rule '{}' replaced {} occurrence(s)", rule.name(), replacements);
            }
            content = next;
            outcomes.push(RuleOutcome {
                rule: rule.name(),
                replacements,
            });
        }

        let changed = content != source;
        RewriteOutcome::new(content, outcomes, changed)
    }
}
