//! Resolved demo settings and how they are printed.

use std::str::FromStr;

use serde::Serialize;

/// Values the demo options write into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoSettings {
    /// Address of the server to connect to.
    pub server_address: String,
    /// Operate with flux polarity reversed.
    pub reverse_flux_polarity: bool,
    /// Screen width in pixels.
    pub window_width: u32,
    /// Screen height in pixels.
    pub window_height: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            server_address: "localhost:10000".to_string(),
            reverse_flux_polarity: false,
            window_width: 1280,
            window_height: 1024,
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    #[default]
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Formats the settings in the requested output format.
pub fn format_settings(settings: &DemoSettings, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(settings)
            .map(|json| json + "\n")
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(settings).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Text => Ok(settings_to_text(settings)),
    }
}

fn settings_to_text(settings: &DemoSettings) -> String {
    let mut out = String::new();
    out.push_str(&format!("Server: {}\n", settings.server_address));
    out.push_str(&format!(
        "Flux polarity: {}\n",
        if settings.reverse_flux_polarity {
            "reversed"
        } else {
            "normal"
        }
    ));
    out.push_str(&format!(
        "Screen: {}x{}\n",
        settings.window_width, settings.window_height
    ));
    out
}
