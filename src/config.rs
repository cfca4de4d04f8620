/// Configuration constants for the management API
pub mod api {
    /// Base path for the management API
    pub const BASE_PATH: &str = "/apis/management/v1";

    /// Users endpoint
    pub const USERS: &str = "users";

    /// Spaces endpoint
    pub const SPACES: &str = "spaces";
}

/// Configuration constants for the client config file
pub mod client {
    /// Directory under the home directory holding the client config
    pub const DIR_NAME: &str = ".spacectl";

    /// Client config file name
    pub const FILE_NAME: &str = "config.json";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
