//! End-to-end route tests: a seeded corpus file behind the real router,
//! driven with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use nq_db::NqDb;
use nq_db::service::QueryService;
use nq_server::error::INVALID_COORDINATES_MESSAGE;
use nq_server::{TRUNCATED_HEADER, router};

const SEED: &str = "
    INSERT INTO metadata (study_id, title) VALUES
        ('s1', 'Pain anticipation'),
        ('s2', 'Pain and reward'),
        ('s3', 'Reward learning'),
        ('s4', NULL);
    INSERT INTO annotations_terms (study_id, contrast_id, term, weight) VALUES
        ('s1', 'c1', 'terms_abstract_tfidf__pain', 0.1),
        ('s2', 'c1', 'terms_abstract_tfidf__pain', 0.2),
        ('s2', 'c2', 'terms_abstract_tfidf__reward', 0.3),
        ('s3', 'c1', 'terms_abstract_tfidf__reward', 0.4),
        ('s4', 'c1', 'terms_abstract_tfidf__reward', 0.5);
    INSERT INTO coordinates (study_id, x, y, z) VALUES
        ('s1', 0, 0, 0),
        ('s2', 0, 0, 0),
        ('s2', 10, 10, 10),
        ('s3', -42, 18, 6);
";

struct Harness {
    dir: TempDir,
    db: NqDb,
}

impl Harness {
    async fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.db");
        let db = NqDb::open_local(path.to_str().unwrap()).await.unwrap();
        Self { dir, db }
    }

    async fn seeded() -> Self {
        let harness = Self::empty().await;
        harness.exec(SEED).await;
        harness
    }

    async fn exec(&self, sql: &str) {
        self.db.connect().unwrap().execute_batch(sql).await.unwrap();
    }

    fn app(self) -> (TempDir, Router) {
        (self.dir, router(Arc::new(QueryService::new(self.db))))
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let truncated = response
        .headers()
        .get(TRUNCATED_HEADER)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, truncated, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn health_check_is_html() {
    let (_dir, app) = Harness::empty().await.app();

    let (status, _, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<p>Server working!</p>");
}

#[tokio::test]
async fn studies_by_term_lists_study_refs() {
    let (_dir, app) = Harness::seeded().await.app();

    let (status, body) = get_json(app, "/terms/reward/studies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"study_id": "s2", "title": "Pain and reward"},
            {"study_id": "s3", "title": "Reward learning"},
            {"study_id": "s4", "title": null},
        ])
    );
}

#[tokio::test]
async fn unknown_term_is_an_empty_list() {
    let (_dir, app) = Harness::seeded().await.app();

    let (status, body) = get_json(app, "/terms/nothing/studies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn term_dissociation_body_and_key_order() {
    let (_dir, app) = Harness::seeded().await.app();

    let (status, truncated, raw) = get(app, "/dissociate/terms/pain/reward").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(truncated, None);

    let body: Value = serde_json::from_str(&raw).unwrap();
    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["term_a", "term_b", "term_a_not_term_b", "term_b_not_term_a"]
    );
    assert_eq!(
        body,
        json!({
            "term_a": "pain",
            "term_b": "reward",
            "term_a_not_term_b": [{"study_id": "s1", "title": "Pain anticipation"}],
            "term_b_not_term_a": [
                {"study_id": "s3", "title": "Reward learning"},
                {"study_id": "s4", "title": null},
            ],
        })
    );
}

#[tokio::test]
async fn term_intersection_echoes_display_terms() {
    let (_dir, app) = Harness::seeded().await.app();

    let (status, body) = get_json(app, "/intersect/terms/PAIN/Reward").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "term_a": "pain",
            "term_b": "reward",
            "term_a_and_term_b": [{"study_id": "s2", "title": "Pain and reward"}],
        })
    );
}

#[tokio::test]
async fn location_dissociation_with_empty_sides() {
    let (_dir, app) = Harness::seeded().await.app();

    let (status, body) = get_json(app, "/dissociate/locations/1_2_3/4_5_6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "coordinate_1": "1,2,3",
            "coordinate_2": "4,5,6",
            "coordinate_1_not_coordinate_2": [],
            "coordinate_2_not_coordinate_1": [],
        })
    );
}

#[tokio::test]
async fn location_dissociation_splits_studies() {
    let (_dir, app) = Harness::seeded().await.app();

    let (status, body) = get_json(app, "/dissociate/locations/0_0_0/10_10_10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["coordinate_1_not_coordinate_2"],
        json!([{"study_id": "s1", "title": "Pain anticipation"}])
    );
    assert_eq!(body["coordinate_2_not_coordinate_1"], json!([]));
}

#[tokio::test]
async fn location_intersection() {
    let (_dir, app) = Harness::seeded().await.app();

    let (status, body) = get_json(app, "/intersect/locations/0_0_0/10_10_10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "coordinate_1": "0,0,0",
            "coordinate_2": "10,10,10",
            "coordinate_1_and_coordinate_2": [{"study_id": "s2", "title": "Pain and reward"}],
        })
    );
}

#[tokio::test]
async fn malformed_coordinates_are_bad_requests() {
    for uri in [
        "/dissociate/locations/abc_0_0/0_0_0",
        "/dissociate/locations/0_0_0/1_2",
        "/intersect/locations/1.5_0_0/0_0_0",
        "/intersect/locations/0_0_0/1_2_3_4",
    ] {
        let (_dir, app) = Harness::seeded().await.app();

        let (status, body) = get_json(app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({"error": INVALID_COORDINATES_MESSAGE}), "{uri}");
    }
}

#[tokio::test]
async fn undecodable_coordinate_segment_is_a_json_bad_request() {
    for uri in [
        "/dissociate/locations/%FF_0_0/0_0_0",
        "/intersect/locations/0_0_0/%FF_0_0",
    ] {
        let (_dir, app) = Harness::seeded().await.app();

        let (status, body) = get_json(app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({"error": INVALID_COORDINATES_MESSAGE}), "{uri}");
    }
}

#[tokio::test]
async fn undecodable_term_segment_is_a_json_bad_request() {
    for uri in [
        "/terms/%FF/studies",
        "/dissociate/terms/%FF/reward",
        "/intersect/terms/pain/%FF",
    ] {
        let (_dir, app) = Harness::seeded().await.app();

        let (status, body) = get_json(app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("UTF-8"), "{uri}: {message}");
    }
}

#[tokio::test]
async fn capped_results_set_truncation_header() {
    let harness = Harness::empty().await;
    harness
        .exec(
            "WITH RECURSIVE n(i) AS (SELECT 1 UNION ALL SELECT i + 1 FROM n WHERE i < 101)
             INSERT INTO metadata (study_id, title) SELECT printf('w%03d', i), 'wide' FROM n;
             INSERT INTO coordinates (study_id, x, y, z) SELECT study_id, 0, 0, 0 FROM metadata;",
        )
        .await;
    let (_dir, app) = harness.app();

    let (status, truncated, raw) = get(app, "/dissociate/locations/0_0_0/1_1_1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(truncated.as_deref(), Some("true"));

    let body: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        body["coordinate_1_not_coordinate_2"].as_array().unwrap().len(),
        100
    );
}

#[tokio::test]
async fn terms_sample_returns_stored_terms() {
    let (_dir, app) = Harness::seeded().await.app();

    let (status, body) = get_json(app, "/terms_sample").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!(["terms_abstract_tfidf__pain", "terms_abstract_tfidf__reward"])
    );
}

#[tokio::test]
async fn test_db_reports_counts() {
    let (_dir, app) = Harness::seeded().await.app();

    let (status, body) = get_json(app, "/test_db").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["dialect"], json!("sqlite"));
    assert_eq!(body["metadata_count"], json!(4));
    assert_eq!(body["annotations_terms_count"], json!(5));
    assert_eq!(body["coordinates_count"], json!(4));
    assert_eq!(body["metadata_sample"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn store_failures_are_server_errors() {
    let harness = Harness::seeded().await;
    harness.exec("DROP TABLE coordinates;").await;
    let (_dir, app) = harness.app();

    let (status, body) = get_json(app.clone(), "/intersect/locations/0_0_0/1_1_1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("coordinates"), "{message}");

    let (status, body) = get_json(app, "/test_db").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["dialect"], json!("sqlite"));
    assert!(body["error"].is_string());
}
