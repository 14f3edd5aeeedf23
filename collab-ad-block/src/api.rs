use serde::{Deserialize, Serialize};

/// The part of the host editor's API a block tool reads from.
///
/// Only the theme class names are consumed. They come from the host and must
/// never be hardcoded inside a tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorApi {
  pub styles: EditorStyles,
}

impl EditorApi {
  pub fn new(styles: EditorStyles) -> Self {
    Self { styles }
  }
}

/// Class names supplied by the host theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorStyles {
  pub block: String,
  pub input: String,
  pub settings_button: String,
  pub settings_button_active: String,
}

impl Default for EditorStyles {
  fn default() -> Self {
    Self {
      block: "cdx-block".to_string(),
      input: "cdx-input".to_string(),
      settings_button: "cdx-settings-button".to_string(),
      settings_button_active: "cdx-settings-button--active".to_string(),
    }
  }
}
