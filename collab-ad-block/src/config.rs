use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH_PLACEHOLDER: &str = "Width (in pixels)";
pub const DEFAULT_HEIGHT_PLACEHOLDER: &str = "Height (in pixels)";
pub const DEFAULT_AD_CLIENT_PLACEHOLDER: &str = "ad-client";
pub const DEFAULT_AD_SLOT_PLACEHOLDER: &str = "ad-slot";
pub const DEFAULT_AD_FORMAT_PLACEHOLDER: &str = "ad-format";

/// Per document type configuration handed over by the host.
///
/// Every field is optional. An omitted or empty value falls back to the
/// matching entry of [Placeholders::default].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdBlockConfig {
  pub width_placeholder: Option<String>,
  pub height_placeholder: Option<String>,
  pub ad_client_placeholder: Option<String>,
  pub ad_slot_placeholder: Option<String>,
  pub ad_format_placeholder: Option<String>,
}

impl AdBlockConfig {
  /// Reads the host configuration. `null` is accepted as an empty config.
  pub fn from_value(value: serde_json::Value) -> Result<Self, crate::error::AdBlockError> {
    if value.is_null() {
      return Ok(Self::default());
    }
    Ok(serde_json::from_value(value)?)
  }

  pub fn with_ad_client_placeholder(mut self, placeholder: impl Into<String>) -> Self {
    self.ad_client_placeholder = Some(placeholder.into());
    self
  }

  pub fn with_ad_slot_placeholder(mut self, placeholder: impl Into<String>) -> Self {
    self.ad_slot_placeholder = Some(placeholder.into());
    self
  }

  pub fn with_ad_format_placeholder(mut self, placeholder: impl Into<String>) -> Self {
    self.ad_format_placeholder = Some(placeholder.into());
    self
  }

  pub fn with_width_placeholder(mut self, placeholder: impl Into<String>) -> Self {
    self.width_placeholder = Some(placeholder.into());
    self
  }

  pub fn with_height_placeholder(mut self, placeholder: impl Into<String>) -> Self {
    self.height_placeholder = Some(placeholder.into());
    self
  }
}

/// The effective placeholder text of each editable region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
  pub width: String,
  pub height: String,
  pub ad_client: String,
  pub ad_slot: String,
  pub ad_format: String,
}

impl Default for Placeholders {
  fn default() -> Self {
    Self {
      width: DEFAULT_WIDTH_PLACEHOLDER.to_string(),
      height: DEFAULT_HEIGHT_PLACEHOLDER.to_string(),
      ad_client: DEFAULT_AD_CLIENT_PLACEHOLDER.to_string(),
      ad_slot: DEFAULT_AD_SLOT_PLACEHOLDER.to_string(),
      ad_format: DEFAULT_AD_FORMAT_PLACEHOLDER.to_string(),
    }
  }
}

impl Placeholders {
  pub fn resolve(config: &AdBlockConfig) -> Self {
    let defaults = Self::default();
    Self {
      width: pick(&config.width_placeholder, defaults.width),
      height: pick(&config.height_placeholder, defaults.height),
      ad_client: pick(&config.ad_client_placeholder, defaults.ad_client),
      ad_slot: pick(&config.ad_slot_placeholder, defaults.ad_slot),
      ad_format: pick(&config.ad_format_placeholder, defaults.ad_format),
    }
  }
}

fn pick(value: &Option<String>, default: String) -> String {
  match value {
    Some(value) if !value.is_empty() => value.clone(),
    _ => default,
  }
}
