//! Tests for whole-tree template rendering

use std::collections::BTreeMap;

use manifest_doc::{Node, render_node};
use pretty_assertions::assert_eq;
use serde_json::json;

fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_render_substitutes_across_tree() {
    let template = Node::from_value(json!({
        "id": "${{TEAMS_APP_ID}}",
        "name": {"short": "app-${{ENV_NAME}}"},
        "bots": [{"botId": "${{BOT_ID}}"}],
        "version": "1.0.0"
    }));

    let (rendered, unresolved) = render_node(
        &template,
        &values(&[
            ("TEAMS_APP_ID", "11111111"),
            ("ENV_NAME", "dev"),
            ("BOT_ID", "22222222"),
        ]),
    );

    assert!(unresolved.is_empty());
    assert_eq!(
        rendered.to_value(),
        json!({
            "id": "11111111",
            "name": {"short": "app-dev"},
            "bots": [{"botId": "22222222"}],
            "version": "1.0.0"
        })
    );
}

#[test]
fn test_render_reports_unresolved_sorted_and_deduped() {
    let template = Node::from_value(json!({
        "a": "${{MISSING_B}}",
        "b": "${{MISSING_A}}-${{MISSING_B}}",
        "c": "${{PRESENT}}"
    }));

    let (rendered, unresolved) = render_node(&template, &values(&[("PRESENT", "ok")]));

    assert_eq!(unresolved, vec!["MISSING_A", "MISSING_B"]);
    assert_eq!(
        rendered.to_value(),
        json!({
            "a": "${{MISSING_B}}",
            "b": "${{MISSING_A}}-${{MISSING_B}}",
            "c": "ok"
        })
    );
}

#[test]
fn test_render_leaves_scalars_untouched() {
    let template = Node::from_value(json!({"isFullScreen": false, "tabs": []}));
    let (rendered, unresolved) = render_node(&template, &BTreeMap::new());
    assert!(unresolved.is_empty());
    assert_eq!(rendered.to_value(), json!({"isFullScreen": false, "tabs": []}));
}
