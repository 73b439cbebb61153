use blank_project::config::{Config, ConfigBuilder};
use blank_project::skip::{compute_skip_rules, SkipRule, SkipRules};

fn config(configure: impl FnOnce(ConfigBuilder) -> ConfigBuilder) -> Config {
    configure(Config::builder("project", "author")).build().unwrap()
}

#[test]
fn test_all_enabled_skips_nothing() {
    assert!(compute_skip_rules(&config(|c| c)).is_empty());
}

#[test]
fn test_one_rule_per_disabled_feature() {
    assert_eq!(compute_skip_rules(&config(|c| c.docs(false))), vec![SkipRule::Docs]);
    assert_eq!(compute_skip_rules(&config(|c| c.disable_coverage())), vec![SkipRule::Coverage]);
    assert_eq!(compute_skip_rules(&config(|c| c.style_check(false))), vec![SkipRule::StyleCheck]);
    assert_eq!(compute_skip_rules(&config(|c| c.import_sort(false))), vec![SkipRule::ImportSort]);
    assert_eq!(compute_skip_rules(&config(|c| c.type_check(false))), vec![SkipRule::TypeCheck]);
    assert_eq!(compute_skip_rules(&config(|c| c.lint(false))), vec![SkipRule::Lint]);
}

#[test]
fn test_rules_are_a_union() {
    let all_disabled = config(|c| {
        c.docs(false)
            .disable_coverage()
            .style_check(false)
            .import_sort(false)
            .type_check(false)
            .lint(false)
    });
    let rules = compute_skip_rules(&all_disabled);
    assert_eq!(rules.len(), 6);

    let skip = SkipRules::new(rules);
    for path in [".coveragerc", ".flake8", ".isort.cfg", "mypy.ini", ".pylintrc", "docs/Makefile"] {
        assert!(skip.is_skipped(path), "{path} should be skipped");
    }
    for path in ["setup.py", "tox.ini", "README.md", "requirements/dev.txt", "MANIFEST.in"] {
        assert!(!skip.is_skipped(path), "{path} should be kept");
    }
}

#[test]
fn test_for_config() {
    let skip = SkipRules::for_config(&config(|c| c.docs(false).lint(false)));

    assert_eq!(skip.rules(), &[SkipRule::Docs, SkipRule::Lint]);
    assert!(skip.is_skipped("docs/source/conf.py"));
    assert!(skip.is_skipped(".pylintrc"));
    assert!(!skip.is_skipped("mypy.ini"));
}
