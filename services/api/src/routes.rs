use crate::infra::{AppState, LandingState};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use partner_landing::analytics::{notify, TrackingEvent};
use partner_landing::error::AppError;
use partner_landing::leads::{home_size_options, HomeSizeOption, LeadForm, LeadSubmission};
use partner_landing::partners::Branding;
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BrandingQuery {
    #[serde(default)]
    pub(crate) cp_afid: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LeadRedirectResponse {
    pub(crate) redirect_url: String,
}

pub(crate) fn landing_router(state: LandingState) -> Router {
    Router::new()
        .route("/api/v1/branding", get(branding_endpoint))
        .route("/api/v1/home-sizes", get(home_sizes_endpoint))
        .route("/api/v1/leads", post(lead_endpoint))
        .route("/api/v1/events", post(events_endpoint))
        .route("/start", get(start_endpoint))
        .with_state(state)
}

pub(crate) fn with_landing_routes(state: LandingState) -> Router {
    landing_router(state)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
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
        json!({ "status": "ready" })
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

pub(crate) async fn branding_endpoint(
    State(state): State<LandingState>,
    Query(query): Query<BrandingQuery>,
) -> Json<Branding> {
    let branding = Branding::resolve(state.resolver.resolve(query.cp_afid.as_deref()));
    notify(
        state.events.as_ref(),
        &TrackingEvent::page_view(branding.analytics_label()),
    );
    Json(branding)
}

pub(crate) async fn home_sizes_endpoint() -> Json<Vec<HomeSizeOption>> {
    Json(home_size_options())
}

pub(crate) async fn lead_endpoint(
    State(state): State<LandingState>,
    Json(form): Json<LeadForm>,
) -> Result<Json<LeadRedirectResponse>, AppError> {
    let url = accept_lead(&state, form)?;
    Ok(Json(LeadRedirectResponse {
        redirect_url: url.into(),
    }))
}

pub(crate) async fn start_endpoint(
    State(state): State<LandingState>,
    Query(form): Query<LeadForm>,
) -> Result<Redirect, AppError> {
    let url = accept_lead(&state, form)?;
    Ok(Redirect::to(url.as_str()))
}

pub(crate) async fn events_endpoint(
    State(state): State<LandingState>,
    Json(event): Json<TrackingEvent>,
) -> StatusCode {
    notify(state.events.as_ref(), &event);
    StatusCode::ACCEPTED
}

/// Validates the form and builds the order redirect.
///
/// Only a partner that resolves (known and active) is forwarded as `cp_afid`.
fn accept_lead(state: &LandingState, form: LeadForm) -> Result<Url, AppError> {
    let submission = form.validate()?;
    let partner = state.resolver.resolve(submission.partner_code.as_deref());
    let partner_label = Branding::resolve(partner).analytics_label().to_string();

    notify(
        state.events.as_ref(),
        &TrackingEvent::form_submit(
            &partner_label,
            submission.home_size.as_str(),
            &submission.zip_code,
        ),
    );

    let forwarded = LeadSubmission {
        partner_code: partner.map(|record| record.code.0.clone()),
        ..submission
    };
    let url = state.redirects.build_for(&forwarded);
    tracing::debug!(partner = %partner_label, "lead redirected");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use partner_landing::analytics::{EventSink, EventSinkError};
    use partner_landing::config::OrderSystemConfig;
    use partner_landing::partners::{BrandColors, PartnerCode, PartnerDirectory, PartnerRecord};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<TrackingEvent>>,
    }

    impl RecordingSink {
        fn names(&self) -> Vec<&'static str> {
            self.events
                .lock()
                .expect("sink mutex poisoned")
                .iter()
                .map(TrackingEvent::name)
                .collect()
        }

        fn last(&self) -> Option<TrackingEvent> {
            self.events.lock().expect("sink mutex poisoned").last().cloned()
        }
    }

    impl EventSink for RecordingSink {
        fn record(&self, event: &TrackingEvent) -> Result<(), EventSinkError> {
            self.events
                .lock()
                .expect("sink mutex poisoned")
                .push(event.clone());
            Ok(())
        }
    }

    fn record(code: &str, name: &str, active: bool) -> PartnerRecord {
        PartnerRecord {
            code: PartnerCode::new(code),
            name: name.to_string(),
            logo_url: format!("/logos/{code}.png"),
            logo_alt_text: format!("{name} - Powered by Compare Power"),
            active_status: active,
            created_date: None,
            brand_colors: Some(BrandColors::new("#10B981", "#F59E0B")),
        }
    }

    fn state_with_sink() -> (LandingState, Arc<RecordingSink>) {
        let directory = PartnerDirectory::from_records(vec![
            record("acme", "Acme Co", true),
            record("retired", "Retired Inc", false),
        ]);
        let sink = Arc::new(RecordingSink::default());
        let state = LandingState::new(
            Arc::new(directory),
            &OrderSystemConfig::default(),
            sink.clone(),
        );
        (state, sink)
    }

    fn app_state() -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    fn service_router(app_state: &AppState) -> Router {
        let (state, _) = state_with_sink();
        with_landing_routes(state).layer(Extension(app_state.clone()))
    }

    fn lead(zip: &str, size: &str, partner: Option<&str>) -> LeadForm {
        LeadForm {
            zip_code: zip.to_string(),
            home_size: Some(size.to_string()),
            partner_code: partner.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn branding_endpoint_returns_partner_branding() {
        let (state, sink) = state_with_sink();
        let Json(branding) = branding_endpoint(
            State(state),
            Query(BrandingQuery {
                cp_afid: Some("acme".to_string()),
            }),
        )
        .await;

        assert_eq!(branding.partner_code.as_deref(), Some("acme"));
        assert_eq!(branding.trust_line.as_deref(), Some("Trusted by Acme Co."));
        assert_eq!(sink.last(), Some(TrackingEvent::page_view("acme")));
    }

    #[tokio::test]
    async fn branding_endpoint_hides_inactive_partners() {
        let (state, sink) = state_with_sink();
        let Json(branding) = branding_endpoint(
            State(state),
            Query(BrandingQuery {
                cp_afid: Some("retired".to_string()),
            }),
        )
        .await;

        assert!(!branding.is_partner());
        assert_eq!(sink.last(), Some(TrackingEvent::page_view("default")));
    }

    #[tokio::test]
    async fn lead_endpoint_returns_order_url() {
        let (state, sink) = state_with_sink();
        let Json(body) = lead_endpoint(State(state), Json(lead("75201", "large", Some("acme"))))
            .await
            .expect("lead accepted");

        assert_eq!(
            body.redirect_url,
            "https://orders.comparepower.com/?zip_code=75201&usage=2000&cp_afid=acme"
        );
        assert_eq!(
            sink.last(),
            Some(TrackingEvent::form_submit("acme", "large", "75201"))
        );
    }

    #[tokio::test]
    async fn lead_endpoint_drops_unresolved_partner_codes() {
        let (state, _) = state_with_sink();
        let Json(body) = lead_endpoint(
            State(state),
            Json(lead("75201", "small", Some("retired"))),
        )
        .await
        .expect("lead accepted");

        assert_eq!(
            body.redirect_url,
            "https://orders.comparepower.com/?zip_code=75201&usage=500"
        );
    }

    #[tokio::test]
    async fn lead_endpoint_rejects_invalid_forms() {
        let (state, sink) = state_with_sink();
        let result = lead_endpoint(State(state), Json(lead("752", "medium", None))).await;

        let response = result.expect_err("short zip rejected").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(sink.names().is_empty());
    }

    #[tokio::test]
    async fn start_route_redirects_to_order_system() {
        let (state, _) = state_with_sink();
        let router = landing_router(state);

        let response = router
            .oneshot(
                Request::get("/start?zip_code=75201&home_size=xlarge&cp_afid=acme")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .expect("location header");
        assert_eq!(
            location,
            "https://orders.comparepower.com/?zip_code=75201&usage=3000&cp_afid=acme"
        );
    }

    #[tokio::test]
    async fn events_route_accepts_tracking_payloads() {
        let (state, sink) = state_with_sink();
        let router = landing_router(state);

        let response = router
            .oneshot(
                Request::post("/api/v1/events")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"event":"partner_logo_click","partner_code":"acme"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(sink.names(), vec!["partner_logo_click"]);
    }

    #[tokio::test]
    async fn branding_route_parses_query_string() {
        let (state, _) = state_with_sink();
        let router = landing_router(state);

        let response = router
            .oneshot(
                Request::get("/api/v1/branding?cp_afid=acme")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["partner_name"], "Acme Co");
        assert_eq!(body["colors"]["primary"], "#10B981");
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn ready_route_follows_readiness_flag() {
        let app_state = app_state();

        let response = service_router(&app_state)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        app_state.readiness.store(true, Ordering::Relaxed);
        let response = service_router(&app_state)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn metrics_route_renders_prometheus_text() {
        let app_state = app_state();

        let response = service_router(&app_state)
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("text/plain; version=0.0.4")
        );
    }
}
