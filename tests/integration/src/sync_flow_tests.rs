//! End-to-end reconciliation flow over real project files
//!
//! These tests exercise the complete pipeline: template loading, deployed
//! manifest matching, aggregation, and the dotenv merge-write, using a
//! realistic app manifest shape.

use manifest_core::{
    DotenvEnvironment, FileDeployedSource, FileTemplateSource, ProjectLayout, SyncEngine,
    SyncOptions,
};
use manifest_doc::{Node, render_node};
use manifest_test_utils::TestProject;
use pretty_assertions::assert_eq;
use serde_json::json;

fn template() -> serde_json::Value {
    json!({
        "$schema": "https://developer.example.com/json-schemas/v1.16/Manifest.schema.json",
        "manifestVersion": "1.16",
        "version": "1.0.0",
        "id": "${{TEAMS_APP_ID}}",
        "name": {
            "short": "orders-${{ENV_NAME}}",
            "full": "Orders tracker (${{ENV_NAME}})"
        },
        "developer": {
            "name": "Contoso",
            "websiteUrl": "https://${{APP_DOMAIN}}",
            "privacyUrl": "https://${{APP_DOMAIN}}/privacy"
        },
        "bots": [
            {
                "botId": "${{BOT_ID}}",
                "scopes": ["personal", "team"]
            }
        ],
        "validDomains": ["${{APP_DOMAIN}}"],
        "isFullScreen": false
    })
}

fn deployed() -> serde_json::Value {
    json!({
        "$schema": "https://developer.example.com/json-schemas/v1.16/Manifest.schema.json",
        "manifestVersion": "1.16",
        "version": "1.0.2",
        "id": "4f2a9b10-0000-0000-0000-00000000abcd",
        "name": {
            "short": "orders-prod",
            "full": "Orders tracker (prod)"
        },
        "developer": {
            "name": "Contoso",
            "websiteUrl": "https://orders.contoso.com",
            "privacyUrl": "https://orders.contoso.com/privacy"
        },
        "bots": [
            {
                "botId": "9c1de000-0000-0000-0000-00000000beef",
                "scopes": ["personal", "team"]
            }
        ],
        "validDomains": ["orders.contoso.com"],
        "isFullScreen": false
    })
}

fn run_sync(project: &TestProject, env: &str) -> manifest_core::SyncOutcome {
    let layout = ProjectLayout::new(project.root());
    let deployed_source = FileDeployedSource::new(project.deployed_path());
    let template_source = FileTemplateSource::new(layout.template_manifest());
    let environment = DotenvEnvironment::new(layout.env_store(), env);
    let engine = SyncEngine::new(&deployed_source, &template_source, &environment);
    engine.sync(&SyncOptions::default()).unwrap()
}

#[test]
fn test_full_flow_recovers_drifted_values() {
    let project = TestProject::new();
    project.write_template(&template());
    project.write_deployed(&deployed());
    project.write_env(
        "prod",
        "# managed by the deployment pipeline\n\
         TEAMS_APP_ID=4f2a9b10-0000-0000-0000-00000000abcd\n\
         BOT_ID=stale-bot-id\n\
         APP_DOMAIN=old.contoso.com\n\
         AZURE_SUBSCRIPTION_ID=sub-1\n",
    );

    let outcome = run_sync(&project, "prod");

    // TEAMS_APP_ID was already current; ENV_NAME is newly discovered.
    let updated: Vec<_> = outcome.updated.keys().map(String::as_str).collect();
    assert_eq!(updated, vec!["APP_DOMAIN", "BOT_ID", "ENV_NAME"]);
    assert_eq!(
        outcome.updated.get("BOT_ID").map(String::as_str),
        Some("9c1de000-0000-0000-0000-00000000beef")
    );

    // Untouched keys and comments survive the merge-write.
    project.assert_env_contains("prod", "# managed by the deployment pipeline");
    project.assert_env_contains("prod", "AZURE_SUBSCRIPTION_ID=sub-1");
    project.assert_env_contains("prod", "APP_DOMAIN=orders.contoso.com");
    project.assert_env_contains("prod", "ENV_NAME=prod");
}

#[test]
fn test_second_sync_is_a_noop() {
    let project = TestProject::new();
    project.write_template(&template());
    project.write_deployed(&deployed());

    let first = run_sync(&project, "prod");
    assert!(!first.is_noop());
    let after_first = project.read_env("prod");

    let second = run_sync(&project, "prod");
    assert!(second.is_noop());
    assert_eq!(project.read_env("prod"), after_first);
}

#[test]
fn test_rendering_with_synced_values_reproduces_deployed_leaves() {
    let project = TestProject::new();
    project.write_template(&template());
    project.write_deployed(&deployed());
    run_sync(&project, "prod");

    let layout = ProjectLayout::new(project.root());
    let snapshot = layout.env_store().read("prod").unwrap();
    let template_tree =
        Node::parse_document(&std::fs::read_to_string(layout.template_manifest()).unwrap())
            .unwrap();
    let (rendered, unresolved) = render_node(&template_tree, &snapshot);
    assert!(unresolved.is_empty());

    // Every parameterized leaf now re-renders to its deployed value. The
    // literal "version" drift stays as-is; that field is not the
    // engine's to manage.
    let rendered = rendered.to_value();
    let deployed = deployed();
    assert_eq!(rendered["id"], deployed["id"]);
    assert_eq!(rendered["name"], deployed["name"]);
    assert_eq!(rendered["developer"], deployed["developer"]);
    assert_eq!(rendered["bots"], deployed["bots"]);
    assert_eq!(rendered["validDomains"], deployed["validDomains"]);
    assert_eq!(rendered["version"], json!("1.0.0"));
}

#[test]
fn test_conflicting_domains_drop_the_placeholder() {
    let project = TestProject::new();
    project.write_template(&json!({
        "developer": {"websiteUrl": "https://${{APP_DOMAIN}}"},
        "validDomains": ["${{APP_DOMAIN}}"],
        "id": "${{TEAMS_APP_ID}}"
    }));
    project.write_deployed(&json!({
        "developer": {"websiteUrl": "https://a.contoso.com"},
        "validDomains": ["b.contoso.com"],
        "id": "app-1"
    }));

    let outcome = run_sync(&project, "dev");

    // APP_DOMAIN resolved to two different values, so it is dropped;
    // the unambiguous TEAMS_APP_ID still lands.
    assert_eq!(
        outcome.updated.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["TEAMS_APP_ID"]
    );
    project.assert_env_contains("dev", "TEAMS_APP_ID=app-1");
}

#[test]
fn test_hand_edited_deployed_fields_are_left_alone() {
    let project = TestProject::new();
    project.write_template(&json!({
        "name": {"short": "orders"},
        "id": "${{TEAMS_APP_ID}}"
    }));
    // An operator renamed the app in the portal; the literal template
    // field no longer matches, which is not this engine's business.
    project.write_deployed(&json!({
        "name": {"short": "orders (renamed)"},
        "id": "app-1"
    }));

    let outcome = run_sync(&project, "dev");
    assert_eq!(
        outcome.updated.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["TEAMS_APP_ID"]
    );
}
