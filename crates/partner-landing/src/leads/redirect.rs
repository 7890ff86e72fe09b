use url::Url;

use super::home_size::usage_for_category;
use super::validation::LeadSubmission;
use crate::config::OrderSystemConfig;

/// Builds the outbound order-system URL for a lead.
///
/// Query parameters are always emitted as `zip_code`, `usage`, then `cp_afid`
/// when a partner code is present. The ZIP code is forwarded as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectUrlBuilder {
    origin: Url,
}

impl RedirectUrlBuilder {
    pub fn new(config: &OrderSystemConfig) -> Self {
        Self {
            origin: config.origin.clone(),
        }
    }

    pub fn build(&self, zip_code: &str, home_size: &str, partner_code: Option<&str>) -> Url {
        let usage = usage_for_category(home_size).to_string();
        let mut url = self.origin.clone();
        url.set_query(None);
        url.set_fragment(None);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("zip_code", zip_code);
            query.append_pair("usage", &usage);
            if let Some(code) = partner_code.filter(|code| !code.is_empty()) {
                query.append_pair("cp_afid", code);
            }
        }

        url
    }

    pub fn build_for(&self, submission: &LeadSubmission) -> Url {
        self.build(
            &submission.zip_code,
            submission.home_size.as_str(),
            submission.partner_code.as_deref(),
        )
    }
}

impl Default for RedirectUrlBuilder {
    fn default() -> Self {
        Self::new(&OrderSystemConfig::default())
    }
}

/// Redirect URL against the default order-system origin.
pub fn build_redirect_url(zip_code: &str, home_size: &str, partner_code: Option<&str>) -> String {
    RedirectUrlBuilder::default()
        .build(zip_code, home_size, partner_code)
        .into()
}
