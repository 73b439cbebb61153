//! Exclusion of optional tooling from the generated project.
//! Every disabled feature contributes exactly one [`SkipRule`]; a path is left
//! out of the build when any rule matches its output path.

use crate::config::Config;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use log::debug;

/// One excluded unit of the template tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipRule {
    /// The whole `docs/` subtree
    Docs,
    /// Coverage configuration file
    Coverage,
    /// Style checker (flake8) configuration file
    StyleCheck,
    /// Import sorter (isort) configuration file
    ImportSort,
    /// Type checker (mypy) configuration file
    TypeCheck,
    /// Linter (pylint) configuration file
    Lint,
}

impl SkipRule {
    /// Glob matched against the output path relative to the project root.
    /// Directory rules match by prefix, file rules match exactly.
    pub fn pattern(self) -> &'static str {
        match self {
            SkipRule::Docs => "docs/**",
            SkipRule::Coverage => ".coveragerc",
            SkipRule::StyleCheck => ".flake8",
            SkipRule::ImportSort => ".isort.cfg",
            SkipRule::TypeCheck => "mypy.ini",
            SkipRule::Lint => ".pylintrc",
        }
    }
}

/// Returns one rule per feature disabled in `config`.
pub fn compute_skip_rules(config: &Config) -> Vec<SkipRule> {
    [
        (config.docs_enabled(), SkipRule::Docs),
        (config.coverage_enabled(), SkipRule::Coverage),
        (config.style_check_enabled(), SkipRule::StyleCheck),
        (config.import_sort_enabled(), SkipRule::ImportSort),
        (config.type_check_enabled(), SkipRule::TypeCheck),
        (config.lint_enabled(), SkipRule::Lint),
    ]
    .into_iter()
    .filter_map(|(enabled, rule)| (!enabled).then_some(rule))
    .collect()
}

/// Compiled set of skip rules.
#[derive(Debug)]
pub struct SkipRules {
    rules: Vec<SkipRule>,
    globs: GlobSet,
}

impl SkipRules {
    /// Compiles the given rules.
    ///
    /// # Panics
    /// Only if a built-in pattern is not a valid glob; every pattern is
    /// compiled by this module's tests.
    pub fn new(rules: Vec<SkipRule>) -> Self {
        let mut builder = GlobSetBuilder::new();
        for rule in &rules {
            let glob = GlobBuilder::new(rule.pattern())
                .literal_separator(true)
                .build()
                .expect("built-in skip pattern is a valid glob");
            builder.add(glob);
        }
        let globs = builder.build().expect("built-in skip patterns form a valid glob set");

        Self { rules, globs }
    }

    /// Compiles the rules for every feature disabled in `config`.
    pub fn for_config(config: &Config) -> Self {
        let rules = compute_skip_rules(config);
        debug!("Skip rules: {:?}", rules);
        Self::new(rules)
    }

    /// Rules in the order they were given.
    pub fn rules(&self) -> &[SkipRule] {
        &self.rules
    }

    /// Returns the first rule matching `output_path`, if any.
    pub fn matching(&self, output_path: &str) -> Option<SkipRule> {
        self.globs.matches(output_path).first().map(|&index| self.rules[index])
    }

    /// True if any rule matches `output_path`.
    pub fn is_skipped(&self, output_path: &str) -> bool {
        self.globs.is_match(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_rule_matches_whole_subtree() {
        let rules = SkipRules::new(vec![SkipRule::Docs]);
        assert!(rules.is_skipped("docs/build.py"));
        assert!(rules.is_skipped("docs/source/conf.py"));
        assert!(!rules.is_skipped("README.md"));
        assert!(!rules.is_skipped("src/docs.py"));
    }

    #[test]
    fn test_file_rules_match_exactly() {
        let rules = SkipRules::new(vec![SkipRule::StyleCheck]);
        assert!(rules.is_skipped(".flake8"));
        assert!(!rules.is_skipped(".flake8rc"));
        assert!(!rules.is_skipped("sub/.flake8"));
    }

    #[test]
    fn test_matching_reports_rule() {
        let rules = SkipRules::new(vec![SkipRule::Lint, SkipRule::TypeCheck]);
        assert_eq!(rules.matching("mypy.ini"), Some(SkipRule::TypeCheck));
        assert_eq!(rules.matching(".pylintrc"), Some(SkipRule::Lint));
        assert_eq!(rules.matching("tox.ini"), None);
    }

    #[test]
    fn test_every_builtin_pattern_compiles() {
        let all = vec![
            SkipRule::Docs,
            SkipRule::Coverage,
            SkipRule::StyleCheck,
            SkipRule::ImportSort,
            SkipRule::TypeCheck,
            SkipRule::Lint,
        ];
        for rule in &all {
            assert!(GlobBuilder::new(rule.pattern()).literal_separator(true).build().is_ok());
        }

        let rules = SkipRules::new(all);
        assert_eq!(rules.matching("docs/index.rst"), Some(SkipRule::Docs));
        assert_eq!(rules.matching(".coveragerc"), Some(SkipRule::Coverage));
        assert_eq!(rules.matching(".isort.cfg"), Some(SkipRule::ImportSort));
    }
}
