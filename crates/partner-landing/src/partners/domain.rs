use std::borrow::Borrow;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque, case-sensitive affiliate identifier carried as `cp_afid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartnerCode(pub String);

impl PartnerCode {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PartnerCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartnerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Primary/secondary colour pair used to tint partner pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
}

impl BrandColors {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// Branding configuration for one affiliate, as stored in the generated dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerRecord {
    #[serde(rename = "partner_code")]
    pub code: PartnerCode,
    #[serde(rename = "partner_name")]
    pub name: String,
    #[serde(rename = "partner_logo_url")]
    pub logo_url: String,
    #[serde(rename = "partner_logo_alt_text")]
    pub logo_alt_text: String,
    pub active_status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_colors: Option<BrandColors>,
}

impl PartnerRecord {
    pub fn is_active(&self) -> bool {
        self.active_status
    }
}

/// House identity used whenever no partner applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseBrand {
    pub logo_url: &'static str,
    pub logo_alt_text: &'static str,
    pub tagline: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub accent_yellow: &'static str,
    pub accent_gray: &'static str,
}

impl HouseBrand {
    pub fn colors(&self) -> BrandColors {
        BrandColors::new(self.primary_color, self.secondary_color)
    }
}

pub const HOUSE_BRAND: HouseBrand = HouseBrand {
    logo_url: "https://assets.comparepower.com/images/comparepower.png",
    logo_alt_text: "Compare Power - The Power Is Yours",
    tagline: "The Power Is Yours",
    primary_color: "#22baed",
    secondary_color: "#eb5a41",
    accent_yellow: "#FBB80D",
    accent_gray: "#d2d2d2",
};

/// Analytics identifier used for pages without a resolved partner.
pub const DEFAULT_PARTNER_LABEL: &str = "default";
