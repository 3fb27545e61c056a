use serde::{Deserialize, Serialize};

/// Persisted launch and display policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Ask vboxmanage for a sorted listing.
    #[serde(default)]
    pub sort: bool,
    /// Start VMs headless.
    #[serde(default)]
    pub headless: bool,
    /// Start VMs with a detachable frontend.
    #[serde(default)]
    pub detachable: bool,
}
