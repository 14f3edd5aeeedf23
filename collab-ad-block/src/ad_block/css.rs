use crate::ad_block::AdField;
use crate::api::EditorApi;

/// The companion stylesheet the host loads next to the tool.
pub const AD_BLOCK_STYLESHEET: &str = include_str!("../../assets/ad_block.css");

// structural class names, the stylesheet and saved views depend on them
pub const WRAPPER_CLASS: &str = "cdx-googleAd";
pub const WIDTH_CLASS: &str = "cdx-googleAd__width";
pub const HEIGHT_CLASS: &str = "cdx-googleAd__height";
pub const AD_CLIENT_CLASS: &str = "cdx-googleAd__adClient";
pub const AD_SLOT_CLASS: &str = "cdx-googleAd__adSlot";
pub const AD_FORMAT_CLASS: &str = "cdx-googleAd__adFormat";
pub const SETTINGS_WRAPPER_CLASS: &str = "cdx-googleAd-settings";

/// Class names used by the ad block. The structural ones are fixed, the
/// others come from the host theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdBlockCss {
  pub base_class: String,
  pub wrapper: &'static str,
  pub input: String,
  pub settings_wrapper: &'static str,
  pub settings_button: String,
  pub settings_button_active: String,
}

impl AdBlockCss {
  pub fn new(api: &EditorApi) -> Self {
    Self {
      base_class: api.styles.block.clone(),
      wrapper: WRAPPER_CLASS,
      input: api.styles.input.clone(),
      settings_wrapper: SETTINGS_WRAPPER_CLASS,
      settings_button: api.styles.settings_button.clone(),
      settings_button_active: api.styles.settings_button_active.clone(),
    }
  }

  pub fn field_class(&self, field: AdField) -> &'static str {
    match field {
      AdField::Width => WIDTH_CLASS,
      AdField::Height => HEIGHT_CLASS,
      AdField::AdClient => AD_CLIENT_CLASS,
      AdField::AdSlot => AD_SLOT_CLASS,
      AdField::AdFormat => AD_FORMAT_CLASS,
    }
  }
}
