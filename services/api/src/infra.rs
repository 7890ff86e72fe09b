use metrics_exporter_prometheus::PrometheusHandle;
use partner_landing::analytics::{EventSink, TracingEventSink};
use partner_landing::config::OrderSystemConfig;
use partner_landing::error::AppError;
use partner_landing::leads::RedirectUrlBuilder;
use partner_landing::partners::{PartnerDirectory, PartnerResolver};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared, read-only collaborators for the landing routes.
#[derive(Clone)]
pub(crate) struct LandingState {
    pub(crate) resolver: PartnerResolver,
    pub(crate) redirects: RedirectUrlBuilder,
    pub(crate) events: Arc<dyn EventSink>,
}

impl LandingState {
    pub(crate) fn new(
        directory: Arc<PartnerDirectory>,
        orders: &OrderSystemConfig,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            resolver: PartnerResolver::new(directory),
            redirects: RedirectUrlBuilder::new(orders),
            events,
        }
    }

    pub(crate) fn with_tracing_sink(
        directory: Arc<PartnerDirectory>,
        orders: &OrderSystemConfig,
    ) -> Self {
        Self::new(directory, orders, Arc::new(TracingEventSink))
    }
}

pub(crate) fn load_directory(path: &Path) -> Result<Arc<PartnerDirectory>, AppError> {
    let directory = PartnerDirectory::from_path(path)?;
    info!(
        path = %path.display(),
        partners = directory.len(),
        active = directory.active_count(),
        "partner dataset loaded"
    );
    Ok(Arc::new(directory))
}
