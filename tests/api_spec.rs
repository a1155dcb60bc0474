use std::path::PathBuf;

use axum::http::StatusCode;
use axum_test::TestServer;
use catalog_llms::api::{create_router, AppState, LLMS_FULL_TXT_PATH};
use catalog_llms::config::{LlmsConfig, ReadErrorPolicy};
use catalog_llms::models::*;
use tempfile::TempDir;

const DISABLED_BODY: &str = "llms.txt is not enabled for this Catalog.";

fn setup(catalog: Catalog, config: LlmsConfig) -> TestServer {
    let app = create_router(AppState::new(catalog, config));
    TestServer::new(app).expect("Failed to create test server")
}

fn write_source(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write source file");
    path
}

/// One record per base collection, each file containing its collection name.
fn full_catalog(dir: &TempDir) -> Vec<ContentRecord> {
    Collection::ALL
        .iter()
        .map(|c| {
            let path = write_source(dir, &format!("{}.md", c), c.as_str());
            ContentRecord::new(c.as_str(), *c, path)
        })
        .collect()
}

mod flag_gating {
    use super::*;

    #[tokio::test]
    async fn returns_404_when_disabled() {
        let server = setup(Catalog::default(), LlmsConfig::default());

        let response = server.get(LLMS_FULL_TXT_PATH).await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text(DISABLED_BODY);
        assert_eq!(
            response.header("content-type").to_str().unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn ignores_catalog_contents_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::from_records(full_catalog(&dir));
        let server = setup(catalog, LlmsConfig::default().with_custom_docs(true));

        let response = server.get(LLMS_FULL_TXT_PATH).await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text(DISABLED_BODY);
    }

    #[tokio::test]
    async fn disabled_check_happens_before_any_file_read() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::from_records([ContentRecord::new(
            "gone",
            Collection::Events,
            dir.path().join("gone.md"),
        )]);
        let server = setup(catalog, LlmsConfig::default());

        server
            .get(LLMS_FULL_TXT_PATH)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

mod llms_full_txt {
    use super::*;

    #[tokio::test]
    async fn event_and_path_less_command() {
        let dir = tempfile::tempdir().unwrap();
        let event = write_source(&dir, "event.md", "Event A");
        let catalog = Catalog::from_records([
            ContentRecord::new("OrderPlaced", Collection::Events, event),
            ContentRecord::without_file("PlaceOrder", Collection::Commands),
        ]);
        let server = setup(catalog, LlmsConfig::enabled());

        let response = server.get(LLMS_FULL_TXT_PATH).await;

        response.assert_status_ok();
        response.assert_text("Event A\n");
        assert_eq!(
            response.header("content-type").to_str().unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn returns_empty_body_for_empty_catalog() {
        let server = setup(Catalog::default(), LlmsConfig::enabled());

        let response = server.get(LLMS_FULL_TXT_PATH).await;

        response.assert_status_ok();
        response.assert_text("");
    }

    #[tokio::test]
    async fn follows_collection_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut records = full_catalog(&dir);
        records.reverse();
        let server = setup(Catalog::from_records(records), LlmsConfig::enabled());

        let response = server.get(LLMS_FULL_TXT_PATH).await;

        response.assert_status_ok();
        response.assert_text("events\ncommands\nqueries\nservices\ndomains\nteams\nusers");
    }

    #[tokio::test]
    async fn keeps_order_within_a_collection() {
        let dir = tempfile::tempdir().unwrap();
        let zebra = write_source(&dir, "zebra.md", "Zebra");
        let alpha = write_source(&dir, "alpha.md", "Alpha");
        let team = write_source(&dir, "team.md", "Team");
        let catalog = Catalog::from_records([
            ContentRecord::new("zebra", Collection::Events, zebra),
            ContentRecord::new("team", Collection::Teams, team),
            ContentRecord::new("alpha", Collection::Events, alpha),
        ]);
        let server = setup(catalog, LlmsConfig::enabled());

        server
            .get(LLMS_FULL_TXT_PATH)
            .await
            .assert_text("Zebra\nAlpha\nTeam");
    }

    #[tokio::test]
    async fn path_less_record_keeps_its_separator() {
        let dir = tempfile::tempdir().unwrap();
        let event = write_source(&dir, "event.md", "E");
        let service = write_source(&dir, "service.md", "S");
        let catalog = Catalog::from_records([
            ContentRecord::new("e", Collection::Events, event),
            ContentRecord::without_file("q", Collection::Queries),
            ContentRecord::new("s", Collection::Services, service),
        ]);
        let server = setup(catalog, LlmsConfig::enabled());

        server.get(LLMS_FULL_TXT_PATH).await.assert_text("E\n\nS");
    }

    #[tokio::test]
    async fn successive_requests_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::from_records(full_catalog(&dir));
        let server = setup(catalog, LlmsConfig::enabled().with_custom_docs(true));

        let first = server.get(LLMS_FULL_TXT_PATH).await.text();
        let second = server.get(LLMS_FULL_TXT_PATH).await.text();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}

mod custom_pages {
    use super::*;

    #[tokio::test]
    async fn excluded_when_custom_docs_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::from_records(full_catalog(&dir));
        let server = setup(catalog, LlmsConfig::enabled());

        let body = server.get(LLMS_FULL_TXT_PATH).await.text();

        assert!(!body.contains("customPages"));
        assert!(body.ends_with("users"));
    }

    #[tokio::test]
    async fn appended_after_base_collections_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let intro = write_source(&dir, "intro.md", "Intro");
        let guide = write_source(&dir, "guide.md", "Guide");
        let user = write_source(&dir, "user.md", "Alice");
        let catalog = Catalog::from_records([
            ContentRecord::new("intro", Collection::CustomPages, intro),
            ContentRecord::new("guide", Collection::CustomPages, guide),
            ContentRecord::new("alice", Collection::Users, user),
        ]);
        let server = setup(catalog, LlmsConfig::enabled().with_custom_docs(true));

        server
            .get(LLMS_FULL_TXT_PATH)
            .await
            .assert_text("Alice\nIntro\nGuide");
    }
}

mod read_errors {
    use super::*;

    fn catalog_with_missing_file(dir: &TempDir) -> Catalog {
        let event = write_source(dir, "event.md", "Event A");
        Catalog::from_records([
            ContentRecord::new("OrderPlaced", Collection::Events, event),
            ContentRecord::new("gone", Collection::Commands, dir.path().join("gone.md")),
        ])
    }

    #[tokio::test]
    async fn fails_request_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let server = setup(catalog_with_missing_file(&dir), LlmsConfig::enabled());

        let response = server.get(LLMS_FULL_TXT_PATH).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_text("Internal server error");
    }

    #[tokio::test]
    async fn skips_unreadable_file_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        let config = LlmsConfig::enabled().with_read_error_policy(ReadErrorPolicy::Skip);
        let server = setup(catalog_with_missing_file(&dir), config);

        let response = server.get(LLMS_FULL_TXT_PATH).await;

        response.assert_status_ok();
        response.assert_text("Event A\n");
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn returns_ok() {
        let server = setup(Catalog::default(), LlmsConfig::default());

        let response = server.get("/health").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "status": "ok" }));
    }
}
