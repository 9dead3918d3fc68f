//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "herald.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "herald.yaml";

/// `.versionrc` JSON file, as written for other release tools
pub const VERSIONRC_JSON: &str = ".versionrc.json";

/// Bare `.versionrc`, read as JSON
pub const VERSIONRC: &str = ".versionrc";

/// Markers CI systems recognize to skip a pipeline run
pub const CI_SKIP_MARKERS: &[&str] = &["[skip ci]", "[ci skip]", "[no ci]", "***NO_CI***"];

/// Title used when no custom header is configured
pub const DEFAULT_HEADER: &str = "# Changelog";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".herald.toml",
        ".herald.yaml",
        VERSIONRC_JSON,
        VERSIONRC,
    ]
}

