use serde::{Deserialize, Serialize};

/// Usage estimate used when the submitted category is not recognised.
pub const DEFAULT_USAGE_KWH: u32 = 1000;

/// Home size buckets offered by the lead form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeSize {
    Small,
    Medium,
    Large,
    #[serde(rename = "xlarge")]
    ExtraLarge,
}

impl HomeSize {
    pub const ALL: [HomeSize; 4] = [
        HomeSize::Small,
        HomeSize::Medium,
        HomeSize::Large,
        HomeSize::ExtraLarge,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "xlarge" => Some(Self::ExtraLarge),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "xlarge",
        }
    }

    /// Estimated monthly usage in kWh forwarded to the order system.
    pub fn usage_kwh(self) -> u32 {
        match self {
            Self::Small => 500,
            Self::Medium => 1000,
            Self::Large => 2000,
            Self::ExtraLarge => 3000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small (1-2 BR)",
            Self::Medium => "Medium (2-3 BR)",
            Self::Large => "Large (3-4 BR)",
            Self::ExtraLarge => "Extra Large (4+ BR)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Small => "Up to 1,000 sq ft",
            Self::Medium => "1,000 - 2,000 sq ft",
            Self::Large => "2,000 - 3,000 sq ft",
            Self::ExtraLarge => "Over 3,000 sq ft",
        }
    }

    pub fn option(self) -> HomeSizeOption {
        HomeSizeOption {
            value: self,
            label: self.label(),
            description: self.description(),
        }
    }
}

impl Default for HomeSize {
    fn default() -> Self {
        Self::Medium
    }
}

/// Usage for a raw category string; unknown categories take the medium estimate.
pub fn usage_for_category(category: &str) -> u32 {
    match HomeSize::parse(category) {
        Some(size) => size.usage_kwh(),
        None => DEFAULT_USAGE_KWH,
    }
}

/// Selectable entry rendered by the lead form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HomeSizeOption {
    pub value: HomeSize,
    pub label: &'static str,
    pub description: &'static str,
}

pub fn home_size_options() -> Vec<HomeSizeOption> {
    HomeSize::ALL.iter().map(|size| size.option()).collect()
}
