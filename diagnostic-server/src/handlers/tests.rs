//! Router-level tests: every route driven through `oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use diagnostic_core::logic::artifacts::{Dataset, DatasetMetadata};
use diagnostic_core::logic::features::LayoutInfo;
use diagnostic_core::{
    DecisionTree, FeatureSchema, FeatureStat, FeatureStats, InferenceEngine, LoadedArtifacts,
    LogisticRegression, RandomForest, Registry, StandardScaler,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::config::Config;
use crate::models::ModelState;
use crate::{create_router, AppState};

fn artifacts() -> LoadedArtifacts {
    let schema = FeatureSchema::new(["mean radius", "mean texture", "worst area"]).unwrap();
    let stats: FeatureStats = [
        ("mean radius", FeatureStat::new(6.98, 28.11, 14.13, 3.52)),
        ("mean texture", FeatureStat::new(9.71, 39.28, 19.29, 4.30)),
        ("worst area", FeatureStat::new(185.2, 4254.0, 880.58, 569.36)),
    ]
    .into_iter()
    .collect();

    let registry = Registry::builder(&schema)
        .register(
            "logistic_regression",
            LogisticRegression::new(vec![-1.0, -0.5, -2.0], 0.3)
                .with_scaler(StandardScaler::new(vec![14.0, 19.0, 880.0], vec![3.5, 4.3, 570.0])),
        )
        .unwrap()
        .register(
            "random_forest",
            RandomForest::new(
                vec![DecisionTree::stump(2, 700.0, vec![1.0, 9.0], vec![8.0, 2.0])],
                vec![0.2, 0.1, 0.7],
            ),
        )
        .unwrap()
        .build();

    let layout = LayoutInfo::of(&schema);
    let engine = InferenceEngine::new(schema, stats, registry).unwrap();

    LoadedArtifacts {
        engine,
        metadata: DatasetMetadata {
            feature_names: vec!["mean radius".into(), "mean texture".into(), "worst area".into()],
            target_names: vec!["malignant".into(), "benign".into()],
            n_samples: 569,
            class_distribution: [("malignant".to_string(), 212), ("benign".to_string(), 357)]
                .into_iter()
                .collect(),
        },
        top_features: vec!["worst area".into(), "mean radius".into()],
        dataset: None,
        layout,
        loaded_at: chrono::Utc::now(),
    }
}

fn app(models: ModelState) -> Router {
    create_router(AppState {
        config: Config::default(),
        models: Arc::new(models),
    })
    .unwrap()
}

fn loaded_app() -> Router {
    app(ModelState::loaded(artifacts()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// ============================================================================
// HEALTH
// ============================================================================

#[tokio::test]
async fn test_health_loaded() {
    let (status, body) = send(loaded_app(), get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["models_loaded"], true);
    assert_eq!(body["model_count"], 2);
}

#[tokio::test]
async fn test_health_not_loaded() {
    let app = app(ModelState::not_loaded("models directory not found: models"));
    let (status, body) = send(app, get("/api/health")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Models not loaded");
}

// ============================================================================
// METADATA
// ============================================================================

#[tokio::test]
async fn test_metadata() {
    let (status, body) = send(loaded_app(), get("/api/metadata")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["n_features"], 3);
    assert_eq!(body["feature_names"][2], "worst area");
    assert_eq!(body["class_distribution"]["benign"], 357);
    assert_eq!(body["top_features"][0], "worst area");
    assert_eq!(body["layout_hash"].as_str().unwrap().len(), 8);
}

#[tokio::test]
async fn test_feature_stats() {
    let (status, body) = send(loaded_app(), get("/api/feature-stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["worst area"]["mean"], 880.58);
    assert_eq!(body["mean radius"]["max"], 28.11);
}

#[tokio::test]
async fn test_models_listed_in_registration_order() {
    let (status, body) = send(loaded_app(), get("/api/models")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"name": "logistic_regression", "explanation": "linear"},
            {"name": "random_forest", "explanation": "importance_based"}
        ])
    );
}

#[tokio::test]
async fn test_dataset_absent() {
    let (status, body) = send(loaded_app(), get("/api/dataset")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_dataset_present() {
    let mut artifacts = artifacts();
    artifacts.dataset = Some(Dataset {
        features: vec!["mean radius".into()],
        data: vec![vec![17.99, 0.0]],
        target: vec![0],
    });

    let (status, body) = send(app(ModelState::loaded(artifacts)), get("/api/dataset")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["target"], json!([0]));
}

// ============================================================================
// PREDICT
// ============================================================================

#[tokio::test]
async fn test_predict_default_model() {
    let request = post_json("/api/predict", json!({"features": {"worst area": 2500.0}}));
    let (status, body) = send(loaded_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let benign = body["probabilities"]["benign"].as_f64().unwrap();
    let malignant = body["probabilities"]["malignant"].as_f64().unwrap();
    assert!((benign + malignant - 1.0).abs() < 1e-9);
    // Large worst area pushes towards malignant (class 0)
    assert!(malignant > benign);
    assert_eq!(body["prediction"], 0);
    assert_eq!(body["feature_importance"]["worst area"], -2.0);
}

#[tokio::test]
async fn test_predict_named_model() {
    let request = post_json("/api/predict", json!({"model": "random_forest", "features": {}}));
    let (status, body) = send(loaded_app(), request).await;

    // worst area mean 880.58 > 700 -> leaf [8, 2]
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["probabilities"]["malignant"], 0.8);
    assert_eq!(body["feature_importance"]["worst area"], 0.7);
}

#[tokio::test]
async fn test_predict_empty_body_uses_defaults() {
    let (status, body) = send(loaded_app(), post_json("/api/predict", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["feature_importance"].is_object());
}

#[tokio::test]
async fn test_predict_unknown_model() {
    let request = post_json("/api/predict", json!({"model": "svm"}));
    let (status, body) = send(loaded_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Model svm not found");
}

#[tokio::test]
async fn test_predict_invalid_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(loaded_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_predict_not_loaded() {
    let app = app(ModelState::not_loaded("missing"));
    let (status, body) = send(app, post_json("/api/predict", json!({}))).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], 503);
}

#[tokio::test]
async fn test_predict_all_matches_single_predictions() {
    let features = json!({"mean radius": 21.5, "mean texture": 12.0});
    let (status, all) = send(loaded_app(), post_json("/api/predict-all", json!({ "features": features }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_object().unwrap().len(), 2);

    for model in ["logistic_regression", "random_forest"] {
        let request = post_json("/api/predict", json!({"model": model, "features": features}));
        let (_, single) = send(loaded_app(), request).await;
        assert_eq!(all[model], single, "model {}", model);
    }
}

#[tokio::test]
async fn test_predict_all_not_loaded() {
    let app = app(ModelState::not_loaded("missing"));
    let (status, _) = send(app, post_json("/api/predict-all", json!({}))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
