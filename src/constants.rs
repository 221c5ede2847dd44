pub const CONFIG_FILE: &str = ".autolinks-config.json";

/// Description shown for autolinks whose provider could not be identified.
pub const CUSTOM_PROVIDER_LABEL: &str = "Custom";

// Theme icon ids understood by the host renderer
pub const ICON_LINK: &str = "link";
pub const ICON_ISSUES: &str = "issues";
pub const ICON_ISSUE_CLOSED: &str = "pass";
pub const ICON_PULL_REQUEST: &str = "git-pull-request";
