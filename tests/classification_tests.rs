use layermap::*;
use pretty_assertions::assert_eq;

fn record(path: &str, extension: &str, snippet: &str) -> RawFileRecord {
    RawFileRecord {
        path: path.to_string(),
        extension: extension.to_string(),
        loc: 42,
        churn: 3,
        snippet: snippet.to_string(),
    }
}

fn path_spec(id: &str, pattern: &str, layer: Layer, weight: u32) -> RuleSpec {
    RuleSpec {
        id: id.to_string(),
        kind: RuleKind::PathPattern,
        pattern: Some(pattern.to_string()),
        extensions: None,
        layer,
        weight,
        subcategory: None,
    }
}

#[test]
fn exactly_one_layer_and_bounded_confidence() {
    let table = RuleTable::builtin();
    let files = vec![
        record("src/components/button.tsx", ".tsx", ""),
        record("src/services/billing.ts", ".ts", "class BillingService {}"),
        record("weird.xyz", ".xyz", ""),
        record("Dockerfile", "", "FROM alpine"),
    ];

    for file in &files {
        let result = classify_file(table, file);
        assert!(Layer::ALL.contains(&result.layer));
        assert!((0.0..=1.0).contains(&result.confidence), "{}", file.path);
        assert!(!result.module.is_empty());
    }
}

#[test]
fn classification_is_deterministic() {
    let table = RuleTable::builtin();
    let file = record(
        "src/services/api/client.ts",
        ".ts",
        "fetch(url); class ApiService {}",
    );

    let first = classify_file(table, &file);
    let second = classify_file(table, &file);
    assert_eq!(first, second);
}

#[test]
fn tie_break_prefers_earlier_layer() {
    // Equal 5-point scores for Presentation and Domain resolve to
    // Presentation, the earlier layer in the declared order.
    let table = RuleTable::from_specs(vec![
        path_spec("d", "tie", Layer::Domain, 5),
        path_spec("p", "tie", Layer::Presentation, 5),
    ])
    .unwrap();

    let result = classify_file(&table, &record("tie/file.xyz", ".xyz", ""));
    assert_eq!(result.layer, Layer::Presentation);
    assert_eq!(result.signals.len(), 2);
}

#[test]
fn tie_break_holds_across_all_pairs() {
    for (i, earlier) in Layer::ALL.iter().enumerate() {
        for later in &Layer::ALL[i + 1..] {
            let table = RuleTable::from_specs(vec![
                path_spec("late", "x", *later, 4),
                path_spec("early", "x", *earlier, 4),
            ])
            .unwrap();

            let result = classify_file(&table, &record("x/file.xyz", ".xyz", ""));
            assert_eq!(result.layer, *earlier, "{earlier} vs {later}");
        }
    }
}

#[test]
fn zero_score_fallbacks() {
    let table = RuleTable::from_specs(vec![]).unwrap();

    let go = classify_file(&table, &record("main.go", ".go", "package main"));
    assert_eq!(go.layer, Layer::Domain);
    assert!(go.signals.is_empty());

    let yaml = classify_file(&table, &record("values.yaml", ".yaml", "a: 1"));
    assert_eq!(yaml.layer, Layer::Tooling);

    let other = classify_file(&table, &record("notes", "", "free text"));
    assert_eq!(other.layer, Layer::Domain);
}

#[test]
fn confidence_scales_and_saturates() {
    let three = RuleTable::from_specs(vec![path_spec("w3", "hit", Layer::Domain, 3)]).unwrap();
    let result = classify_file(&three, &record("hit/a.xyz", ".xyz", ""));
    assert!((result.confidence - 3.0 / 7.0).abs() < 1e-9);

    let seven = RuleTable::from_specs(vec![path_spec("w7", "hit", Layer::Domain, 7)]).unwrap();
    let result = classify_file(&seven, &record("hit/a.xyz", ".xyz", ""));
    assert_eq!(result.confidence, 1.0);

    let nine = RuleTable::from_specs(vec![
        path_spec("w5", "hit", Layer::Domain, 5),
        path_spec("w4", "hit", Layer::Domain, 4),
    ])
    .unwrap();
    let result = classify_file(&nine, &record("hit/a.xyz", ".xyz", ""));
    assert_eq!(result.confidence, 1.0);
}

#[test]
fn subcategory_takes_highest_weight_earliest_declared() {
    let mut low = path_spec("low", "hit", Layer::Domain, 2);
    low.subcategory = Some("Low".to_string());
    let mut first_high = path_spec("first-high", "hit", Layer::Domain, 5);
    first_high.subcategory = Some("First".to_string());
    let mut second_high = path_spec("second-high", "hit", Layer::Domain, 5);
    second_high.subcategory = Some("Second".to_string());

    let table = RuleTable::from_specs(vec![low, first_high, second_high]).unwrap();
    let result = classify_file(&table, &record("hit/a.xyz", ".xyz", ""));
    assert_eq!(result.subcategory.as_deref(), Some("First"));
}

#[test]
fn subcategory_absent_when_no_winning_rule_carries_one() {
    let table = RuleTable::from_specs(vec![path_spec("bare", "hit", Layer::Domain, 5)]).unwrap();
    let result = classify_file(&table, &record("hit/a.xyz", ".xyz", ""));
    assert_eq!(result.subcategory, None);
}

#[test]
fn subcategory_ignores_rules_from_losing_layers() {
    let mut winner = path_spec("winner", "hit", Layer::Application, 6);
    winner.subcategory = Some("Service".to_string());
    let mut loser = path_spec("loser", "hit", Layer::Tooling, 2);
    loser.subcategory = Some("Test".to_string());

    let table = RuleTable::from_specs(vec![loser, winner]).unwrap();
    let result = classify_file(&table, &record("hit/a.xyz", ".xyz", ""));
    assert_eq!(result.layer, Layer::Application);
    assert_eq!(result.subcategory.as_deref(), Some("Service"));
}

#[test]
fn content_rules_match_snippet_not_path() {
    let table = RuleTable::builtin();

    let with_handler = classify_file(
        table,
        &record("plain/thing.xyz", ".xyz", "func UserHandler(w, r)"),
    );
    assert!(with_handler
        .signals
        .iter()
        .any(|s| s.rule == "pres-api-content"));

    let without = classify_file(table, &record("plain/thing.xyz", ".xyz", "nothing here"));
    assert!(without.signals.is_empty());
}

#[test]
fn parallel_and_serial_classification_agree() {
    let table = RuleTable::builtin();
    let files: Vec<RawFileRecord> = (0..200)
        .map(|i| record(&format!("src/services/f{i}.ts"), ".ts", "dispatch("))
        .collect();

    assert_eq!(classify_all(table, &files), classify_all_serial(table, &files));
}
