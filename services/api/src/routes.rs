use crate::infra::{AppState, VariantQuery};
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Extension, Json, Router};
use impact_dashboard::dashboard::render::{render_cost_chart, render_flow_chart, render_map};
use impact_dashboard::dashboard::{table_csv, DatasetTable, PageView, VariantConfig, VariantName};
use impact_dashboard::error::AppError;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Serialize)]
pub(crate) struct VariantCatalog {
    pub(crate) default: VariantName,
    pub(crate) variants: Vec<VariantConfig>,
}

pub(crate) fn dashboard_router() -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/dashboard", get(dashboard_json))
        .route("/api/v1/charts/map", get(map_chart))
        .route("/api/v1/charts/costs", get(cost_chart))
        .route("/api/v1/charts/flow", get(flow_chart))
        .route("/api/v1/variants", get(variants_endpoint))
        .route("/api/v1/datasets/:table", get(dataset_endpoint))
}

pub(crate) async fn dashboard_page(
    Extension(state): Extension<AppState>,
    Query(query): Query<VariantQuery>,
) -> Result<Html<String>, AppError> {
    let page = state.compose(query.requested())?;
    Ok(Html(page.to_html()))
}

pub(crate) async fn dashboard_json(
    Extension(state): Extension<AppState>,
    Query(query): Query<VariantQuery>,
) -> Result<Json<PageView>, AppError> {
    let page = state.compose(query.requested())?;
    Ok(Json(page.view()))
}

pub(crate) async fn map_chart(
    Extension(state): Extension<AppState>,
    Query(query): Query<VariantQuery>,
) -> Result<Json<Value>, AppError> {
    let variant = state.variant(query.requested())?;
    let map = render_map(&state.data.countries, &variant, &state.page.theme);
    Ok(Json(map.figure()))
}

pub(crate) async fn cost_chart(
    Extension(state): Extension<AppState>,
    Query(query): Query<VariantQuery>,
) -> Result<Json<Value>, AppError> {
    let variant = state.variant(query.requested())?;
    let chart = render_cost_chart(&state.data.costs, &variant, &state.page.theme);
    Ok(Json(chart.figure()))
}

pub(crate) async fn flow_chart(
    Extension(state): Extension<AppState>,
    Query(query): Query<VariantQuery>,
) -> Result<Json<Value>, AppError> {
    let variant = state.variant(query.requested())?;
    let flow = render_flow_chart(
        &state.data.flows,
        &state.data.flow_nodes,
        &variant,
        &state.page.theme,
    );
    Ok(Json(flow.figure()))
}

pub(crate) async fn variants_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<VariantCatalog> {
    Json(VariantCatalog {
        default: state.default_variant,
        variants: VariantName::ordered()
            .into_iter()
            .map(VariantName::config)
            .collect(),
    })
}

pub(crate) async fn dataset_endpoint(
    Extension(state): Extension<AppState>,
    Path(table): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let table: DatasetTable = table.parse()?;
    let body = table_csv(&state.data, table)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime::TEXT_CSV_UTF_8.to_string())],
        body,
    ))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "started_at": state.started_at.to_rfc3339() })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
