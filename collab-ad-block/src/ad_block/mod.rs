mod css;
mod data;
mod icons;

pub use css::*;
pub use data::*;
pub use icons::*;

use serde_json::Value;
use tracing::{trace, warn};

use crate::api::EditorApi;
use crate::config::{AdBlockConfig, Placeholders};
use crate::error::AdBlockError;
use crate::tool::{BlockTool, SettingsButton, Toolbox};
use crate::view::{BlockView, CONTENT_EDITABLE_ATTR, PLACEHOLDER_ATTR};

/// Name the ad block is registered under in the host editor.
pub const AD_BLOCK_TOOL_NAME: &str = "googleAd";
pub const AD_BLOCK_TITLE: &str = "GoogleAd";

/// The five editable regions of an ad block, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdField {
  Width,
  Height,
  AdClient,
  AdSlot,
  AdFormat,
}

impl AdField {
  pub const ALL: [AdField; 5] = [
    AdField::Width,
    AdField::Height,
    AdField::AdClient,
    AdField::AdSlot,
    AdField::AdFormat,
  ];

  pub fn key(&self) -> &'static str {
    match self {
      AdField::Width => WIDTH_KEY,
      AdField::Height => HEIGHT_KEY,
      AdField::AdClient => AD_CLIENT_KEY,
      AdField::AdSlot => AD_SLOT_KEY,
      AdField::AdFormat => AD_FORMAT_KEY,
    }
  }
}

/// An advertisement placeholder block.
///
/// Each field is rendered into its own editable region. The markup of the
/// free text regions is stored as is; making it safe is the job of the host
/// sanitizer, which reduces every field to plain text because
/// [BlockTool::sanitize] declares no allowed tags.
pub struct AdBlock {
  api: EditorApi,
  placeholders: Placeholders,
  data: AdBlockData,
  settings: Vec<SettingsButton>,
}

impl AdBlock {
  pub fn from_data(data: AdBlockData, config: &AdBlockConfig, api: EditorApi) -> Self {
    Self {
      api,
      placeholders: Placeholders::resolve(config),
      data,
      settings: vec![],
    }
  }

  /// Adds toggles to the settings panel. The block ships without any.
  pub fn with_settings(mut self, settings: Vec<SettingsButton>) -> Self {
    self.settings = settings;
    self
  }

  pub fn data(&self) -> &AdBlockData {
    &self.data
  }

  pub fn placeholders(&self) -> &Placeholders {
    &self.placeholders
  }

  pub fn css(&self) -> AdBlockCss {
    AdBlockCss::new(&self.api)
  }

  /// The toggles shown in the settings panel.
  pub fn settings(&self) -> &[SettingsButton] {
    &self.settings
  }

  fn placeholder(&self, field: AdField) -> &str {
    match field {
      AdField::Width => &self.placeholders.width,
      AdField::Height => &self.placeholders.height,
      AdField::AdClient => &self.placeholders.ad_client,
      AdField::AdSlot => &self.placeholders.ad_slot,
      AdField::AdFormat => &self.placeholders.ad_format,
    }
  }

  fn markup(&self, field: AdField) -> String {
    match field {
      AdField::Width => self.data.width.to_string(),
      AdField::Height => self.data.height.to_string(),
      AdField::AdClient => self.data.ad_client.clone(),
      AdField::AdSlot => self.data.ad_slot.clone(),
      AdField::AdFormat => self.data.ad_format.clone(),
    }
  }
}

impl BlockTool for AdBlock {
  type Data = AdBlockData;
  type Config = AdBlockConfig;

  const CONTENTLESS: bool = true;
  const ENABLE_LINE_BREAKS: bool = true;

  fn toolbox() -> Toolbox {
    Toolbox {
      icon: GOOGLE_AD_ICON.to_string(),
      title: AD_BLOCK_TITLE.to_string(),
    }
  }

  fn new(data: &Value, config: AdBlockConfig, api: EditorApi) -> Self {
    Self::from_data(AdBlockData::from_value(data), &config, api)
  }

  fn render<V: BlockView>(&self) -> Result<V, AdBlockError> {
    let css = self.css();
    let mut container = V::make("blockquote", &[css.base_class.as_str(), css.wrapper], &[])?;
    for field in AdField::ALL {
      let mut region = V::make(
        "div",
        &[css.input.as_str(), css.field_class(field)],
        &[
          (CONTENT_EDITABLE_ATTR, "true"),
          (PLACEHOLDER_ATTR, self.placeholder(field)),
        ],
      )?;
      region.set_inner_html(&self.markup(field));
      container.append_child(region)?;
    }
    trace!("render ad block: {:?}", self.data);
    Ok(container)
  }

  fn save<V: BlockView>(&mut self, view: &V) -> Result<AdBlockData, AdBlockError> {
    let css = self.css();
    let read = |field: AdField| {
      let class_name = css.field_class(field);
      view.child_html(class_name).ok_or_else(|| {
        warn!("ad block view has no `{}` region", class_name);
        AdBlockError::InvalidBlockStructure(class_name.to_string())
      })
    };

    let width = read(AdField::Width)?;
    let height = read(AdField::Height)?;
    let ad_client = read(AdField::AdClient)?;
    let ad_slot = read(AdField::AdSlot)?;
    let ad_format = read(AdField::AdFormat)?;

    self.data = AdBlockData {
      width: AdWidth::from_markup(&width),
      height: coerce_pixels(&height),
      ad_client,
      ad_slot,
      ad_format,
    };
    trace!("save ad block: {:?}", self.data);
    Ok(self.data.clone())
  }

  fn render_settings<V: BlockView>(&self) -> Result<V, AdBlockError> {
    let css = self.css();
    let mut wrapper = V::make("div", &[css.settings_wrapper], &[])?;
    for button in self.settings() {
      let active = if button.active {
        css.settings_button_active.as_str()
      } else {
        ""
      };
      let mut element = V::make(
        "span",
        &[css.settings_button.as_str(), active],
        &[("title", button.name.as_str())],
      )?;
      element.set_inner_html(&button.icon);
      wrapper.append_child(element)?;
    }
    Ok(wrapper)
  }
}
