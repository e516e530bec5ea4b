//! Build-time plugin configuration.
//!
//! The plugin runs inside the editor's iframe with no access to environment
//! variables, so values are baked in at compile time. `BRIEF_BACKEND_URL`
//! and `STORYBLOK_ACCESS_TOKEN` override the built-in literals when set to a
//! non-blank value during `trunk build`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Brief generation endpoint. Requests are posted to this URL as-is, with no
/// path suffix appended.
pub const DEFAULT_BACKEND_URL: &str = "https://musical-croissant-7493c1.netlify.app";

/// Placeholder token passed to the host's `init`. Field plugins normally
/// inherit access from the editor.
pub const DEFAULT_ACCESS_TOKEN: &str = "YOUR_STORYBLOK_PREVIEW_TOKEN";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginConfig {
    pub backend_url: String,
    pub access_token: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self { backend_url: DEFAULT_BACKEND_URL.to_owned(), access_token: DEFAULT_ACCESS_TOKEN.to_owned() }
    }
}

impl PluginConfig {
    /// Resolve config from values captured by the compiler.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("BRIEF_BACKEND_URL"), option_env!("STORYBLOK_ACCESS_TOKEN"))
    }

    /// Apply overrides, ignoring missing or blank values.
    pub fn resolve(backend_url: Option<&str>, access_token: Option<&str>) -> Self {
        Self {
            backend_url: non_blank(backend_url).unwrap_or(DEFAULT_BACKEND_URL).to_owned(),
            access_token: non_blank(access_token).unwrap_or(DEFAULT_ACCESS_TOKEN).to_owned(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
