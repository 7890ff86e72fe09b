//! Fire-and-forget tracking events emitted around branding and lead capture.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    AffiliateLanding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormLocation {
    Hero,
    Sticky,
}

/// Events reported to the tracking sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrackingEvent {
    PageView {
        partner_code: String,
        page_type: PageType,
    },
    FormStart {
        partner_code: String,
        form_location: FormLocation,
    },
    FormSubmit {
        partner_code: String,
        home_size: String,
        zip_code: String,
    },
    PartnerLogoClick {
        partner_code: String,
    },
}

impl TrackingEvent {
    pub fn page_view(partner_code: &str) -> Self {
        Self::PageView {
            partner_code: partner_code.to_string(),
            page_type: PageType::AffiliateLanding,
        }
    }

    pub fn form_submit(partner_code: &str, home_size: &str, zip_code: &str) -> Self {
        Self::FormSubmit {
            partner_code: partner_code.to_string(),
            home_size: home_size.to_string(),
            zip_code: zip_code.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PageView { .. } => "page_view",
            Self::FormStart { .. } => "form_start",
            Self::FormSubmit { .. } => "form_submit",
            Self::PartnerLogoClick { .. } => "partner_logo_click",
        }
    }

    pub fn partner_code(&self) -> &str {
        match self {
            Self::PageView { partner_code, .. }
            | Self::FormStart { partner_code, .. }
            | Self::FormSubmit { partner_code, .. }
            | Self::PartnerLogoClick { partner_code } => partner_code.as_str(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EventSinkError {
    #[error("event sink unavailable: {0}")]
    Unavailable(String),
}

/// Destination for tracking events (tag managers, pixels, log pipelines).
pub trait EventSink: Send + Sync {
    fn record(&self, event: &TrackingEvent) -> Result<(), EventSinkError>;
}

/// Forwards an event, logging and discarding any sink failure.
pub fn notify(sink: &dyn EventSink, event: &TrackingEvent) {
    if let Err(err) = sink.record(event) {
        tracing::warn!(event = event.name(), error = %err, "tracking event dropped");
    }
}

/// Sink that writes events to the structured log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn record(&self, event: &TrackingEvent) -> Result<(), EventSinkError> {
        tracing::info!(
            event = event.name(),
            partner_code = event.partner_code(),
            "tracking event"
        );
        Ok(())
    }
}
