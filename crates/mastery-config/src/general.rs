//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Insert sample streams, habits, and reflections into empty collections
    /// when the store is opened.
    #[serde(default)]
    pub seed_demo_data: bool,
}
