//! AppMessage enum for async communication within the application.

use crate::lifecycle::MountId;
use crate::registry::ApiEndpoint;

/// Messages received from background tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The registry load of `mount_id` succeeded.
    RegistryLoaded {
        mount_id: MountId,
        endpoints: Vec<ApiEndpoint>,
    },
    /// The registry load of `mount_id` failed; the failure was already
    /// reported to the diagnostic sink.
    RegistryLoadFailed { mount_id: MountId },
}
