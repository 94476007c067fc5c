//! Recursive pairing of template and deployed trees

use manifest_doc::{FieldPath, MatchOutcome, Node, TemplateString, match_leaf};

use crate::sync::Aggregator;

/// Walk both trees from the root, feeding every resolvable leaf pair into
/// the aggregator.
///
/// Only fields present in both trees are visited. One-sided fields and
/// type mismatches are structural drift, which this engine does not
/// reconcile; they are skipped without error.
pub fn walk(template: &Node, deployed: &Node, aggregator: &mut Aggregator) {
    walk_inner(template, deployed, &FieldPath::root(), aggregator);
}

fn walk_inner(template: &Node, deployed: &Node, path: &FieldPath, aggregator: &mut Aggregator) {
    match (template, deployed) {
        (Node::Leaf(raw), Node::Leaf(deployed_text)) => {
            let template_string = TemplateString::parse(raw);
            match match_leaf(&template_string, deployed_text) {
                MatchOutcome::Equal => {}
                MatchOutcome::Unresolvable => {
                    tracing::debug!(field = %path, "leaf cannot be reconciled, skipping");
                }
                MatchOutcome::Resolved(candidates) => {
                    aggregator.observe_leaf(path, candidates);
                }
            }
        }
        (Node::Object(template_fields), Node::Object(deployed_fields)) => {
            for (key, template_child) in template_fields {
                let deployed_child = deployed_fields
                    .iter()
                    .find(|(name, _)| name == key)
                    .map(|(_, node)| node);
                if let Some(deployed_child) = deployed_child {
                    walk_inner(template_child, deployed_child, &path.child(key), aggregator);
                }
            }
        }
        (Node::List(template_items), Node::List(deployed_items)) => {
            // Element-wise by index; the unpaired tail on either side is
            // one-sided drift, same as a missing object key.
            for (index, (template_item, deployed_item)) in
                template_items.iter().zip(deployed_items.iter()).enumerate()
            {
                walk_inner(template_item, deployed_item, &path.index(index), aggregator);
            }
        }
        (Node::Scalar(_), Node::Scalar(_)) => {}
        _ => {
            tracing::debug!(field = %path, "template and deployed shapes differ, skipping");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assignments(template: serde_json::Value, deployed: serde_json::Value) -> Vec<(String, String)> {
        let mut aggregator = Aggregator::new();
        walk(
            &Node::from_value(template),
            &Node::from_value(deployed),
            &mut aggregator,
        );
        aggregator.into_assignments().into_iter().collect()
    }

    #[test]
    fn test_nested_extraction() {
        let result = assignments(
            json!({"name": {"short": "app-${{ENV_NAME}}"}}),
            json!({"name": {"short": "app-dev"}}),
        );
        assert_eq!(result, vec![("ENV_NAME".to_string(), "dev".to_string())]);
    }

    #[test]
    fn test_list_elements_pair_by_index() {
        let result = assignments(
            json!({"bots": [{"botId": "${{BOT_ID}}"}]}),
            json!({"bots": [{"botId": "b-1"}, {"botId": "extra"}]}),
        );
        assert_eq!(result, vec![("BOT_ID".to_string(), "b-1".to_string())]);
    }

    #[test]
    fn test_one_sided_keys_are_ignored() {
        let result = assignments(
            json!({"onlyInTemplate": "${{A}}", "shared": "${{B}}"}),
            json!({"onlyInDeployed": "1.2.3", "shared": "x"}),
        );
        assert_eq!(result, vec![("B".to_string(), "x".to_string())]);
    }

    #[test]
    fn test_type_mismatch_is_skipped() {
        let result = assignments(
            json!({"field": {"inner": "${{A}}"}}),
            json!({"field": "flat"}),
        );
        assert_eq!(result, vec![]);
    }

    #[test]
    fn test_scalar_leaves_produce_nothing() {
        let result = assignments(
            json!({"isFullScreen": false, "v": 2}),
            json!({"isFullScreen": true, "v": 3}),
        );
        assert_eq!(result, vec![]);
    }
}
