use serde::Serialize;

use super::domain::{BrandColors, PartnerRecord, DEFAULT_PARTNER_LABEL, HOUSE_BRAND};

/// Presentation values for one page render, partner or house.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    pub logo_url: String,
    pub logo_alt_text: String,
    pub tagline: &'static str,
    pub colors: BrandColors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_line: Option<String>,
}

impl Branding {
    pub fn house() -> Self {
        Self::resolve(None)
    }

    pub fn resolve(partner: Option<&PartnerRecord>) -> Self {
        let Some(partner) = partner else {
            return Self {
                partner_code: None,
                partner_name: None,
                logo_url: HOUSE_BRAND.logo_url.to_string(),
                logo_alt_text: HOUSE_BRAND.logo_alt_text.to_string(),
                tagline: HOUSE_BRAND.tagline,
                colors: HOUSE_BRAND.colors(),
                trust_line: None,
            };
        };

        let name = partner.name.trim();
        let partner_name = (!name.is_empty()).then(|| name.to_string());
        let trust_line = partner_name
            .as_deref()
            .map(|name| format!("Trusted by {name}."));

        Self {
            partner_code: Some(partner.code.0.clone()),
            partner_name,
            logo_url: non_empty_or(&partner.logo_url, HOUSE_BRAND.logo_url),
            logo_alt_text: non_empty_or(&partner.logo_alt_text, HOUSE_BRAND.logo_alt_text),
            tagline: HOUSE_BRAND.tagline,
            colors: partner
                .brand_colors
                .clone()
                .unwrap_or_else(|| HOUSE_BRAND.colors()),
            trust_line,
        }
    }

    pub fn is_partner(&self) -> bool {
        self.partner_code.is_some()
    }

    /// Identifier reported to analytics for this page.
    pub fn analytics_label(&self) -> &str {
        self.partner_code.as_deref().unwrap_or(DEFAULT_PARTNER_LABEL)
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
