use std::sync::Arc;

use super::directory::PartnerDirectory;
use super::domain::PartnerRecord;

/// Resolves an inbound `cp_afid` to an active partner record.
///
/// Unknown and deactivated partners are indistinguishable to callers: both
/// resolve to `None` and the page falls back to house branding.
#[derive(Debug, Clone)]
pub struct PartnerResolver {
    directory: Arc<PartnerDirectory>,
}

impl PartnerResolver {
    pub fn new(directory: Arc<PartnerDirectory>) -> Self {
        Self { directory }
    }

    pub fn resolve(&self, partner_code: Option<&str>) -> Option<&PartnerRecord> {
        let code = partner_code.filter(|code| !code.is_empty())?;
        self.directory
            .get(code)
            .filter(|record| record.is_active())
    }

    pub fn directory(&self) -> &PartnerDirectory {
        &self.directory
    }
}
