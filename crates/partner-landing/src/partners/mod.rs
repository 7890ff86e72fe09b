//! Affiliate branding: dataset loading, resolution, and presentation values.

mod branding;
mod directory;
pub mod domain;
pub mod generator;
mod resolver;

pub use branding::Branding;
pub use directory::{PartnerDataset, PartnerDatasetError, PartnerDirectory};
pub use domain::{
    BrandColors, HouseBrand, PartnerCode, PartnerRecord, DEFAULT_PARTNER_LABEL, HOUSE_BRAND,
};
pub use generator::PartnerGeneratorError;
pub use resolver::PartnerResolver;
