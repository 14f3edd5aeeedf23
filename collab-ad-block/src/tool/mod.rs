pub mod registry;

pub use registry::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::EditorApi;
use crate::error::AdBlockError;
use crate::view::BlockView;

/// What the host shows for a tool in its block insertion menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolbox {
  pub icon: String,
  pub title: String,
}

/// Allowed markup of one field: tag name to whether it is kept.
pub type TagPolicy = BTreeMap<String, bool>;

/// Sanitizer rules of a tool, keyed by field name.
///
/// A field without a rule is reduced to plain text by the host sanitizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SanitizeConfig {
  pub fields: BTreeMap<String, TagPolicy>,
}

impl SanitizeConfig {
  pub fn is_plain_text(&self, field: &str) -> bool {
    !self.fields.contains_key(field)
  }
}

/// One toggle of a tool's settings panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsButton {
  pub name: String,
  pub icon: String,
  pub active: bool,
}

/// The contract between the host editor and a block tool.
///
/// The host reads the static items once when the tool is registered,
/// creates one instance per block with [BlockTool::new], mounts the view
/// returned by [BlockTool::render] and hands that view back to
/// [BlockTool::save] whenever the document is serialized.
pub trait BlockTool {
  type Data: Serialize;
  type Config;

  /// An empty block of this tool still counts as content.
  const CONTENTLESS: bool = false;

  /// Enter inserts a line break instead of creating the next block.
  const ENABLE_LINE_BREAKS: bool = false;

  fn toolbox() -> Toolbox;

  fn sanitize() -> SanitizeConfig {
    SanitizeConfig::default()
  }

  fn new(data: &Value, config: Self::Config, api: EditorApi) -> Self;

  fn render<V: BlockView>(&self) -> Result<V, AdBlockError>;

  fn save<V: BlockView>(&mut self, view: &V) -> Result<Self::Data, AdBlockError>;

  fn render_settings<V: BlockView>(&self) -> Result<V, AdBlockError>;
}
