use std::any::TypeId;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::ad_block::{AD_BLOCK_TOOL_NAME, AdBlock};
use crate::error::AdBlockError;
use crate::tool::{BlockTool, SanitizeConfig, Toolbox};
use crate::view::BlockView;

/// The static declarations of a tool, captured once at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
  pub name: String,
  pub toolbox: Toolbox,
  pub contentless: bool,
  pub enable_line_breaks: bool,
  pub sanitize: SanitizeConfig,
  tool_type: TypeId,
}

impl ToolDescriptor {
  pub fn of<T: BlockTool + 'static>(name: &str) -> Self {
    Self {
      name: name.to_string(),
      tool_type: TypeId::of::<T>(),
      toolbox: T::toolbox(),
      contentless: T::CONTENTLESS,
      enable_line_breaks: T::ENABLE_LINE_BREAKS,
      sanitize: T::sanitize(),
    }
  }

  /// Whether this descriptor was registered for the tool type `T`.
  pub fn is<T: BlockTool + 'static>(&self) -> bool {
    self.tool_type == TypeId::of::<T>()
  }
}

/// A block as the host stores it in a saved document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedBlock {
  pub id: String,
  #[serde(rename = "type")]
  pub ty: String,
  pub data: Value,
}

impl SavedBlock {
  /// A block is empty when no field of its data carries a non-blank string,
  /// a non-zero number or `true`.
  pub fn is_empty(&self) -> bool {
    match &self.data {
      Value::Object(map) => map.values().all(is_empty_value),
      other => is_empty_value(other),
    }
  }
}

fn is_empty_value(value: &Value) -> bool {
  match value {
    Value::Null => true,
    Value::Bool(b) => !b,
    Value::Number(n) => n.as_f64().map(|n| n == 0.0).unwrap_or(false),
    Value::String(s) => s.trim().is_empty(),
    Value::Array(values) => values.iter().all(is_empty_value),
    Value::Object(map) => map.values().all(is_empty_value),
  }
}

pub struct ToolRegistry {
  tools: HashMap<String, ToolDescriptor>,
}

impl Default for ToolRegistry {
  fn default() -> Self {
    Self::new()
  }
}

impl ToolRegistry {
  pub fn new() -> Self {
    Self {
      tools: HashMap::new(),
    }
  }

  pub fn with_default_tools() -> Self {
    let mut registry = Self::new();
    registry.register::<AdBlock>(AD_BLOCK_TOOL_NAME);
    registry
  }

  pub fn register<T: BlockTool + 'static>(&mut self, name: &str) -> &mut Self {
    debug!("register block tool: {}", name);
    self
      .tools
      .insert(name.to_string(), ToolDescriptor::of::<T>(name));
    self
  }

  /// Registers a tool but shows `toolbox` in the insertion menu instead of
  /// the one the tool declares.
  pub fn register_with_toolbox<T: BlockTool + 'static>(&mut self, name: &str, toolbox: Toolbox) -> &mut Self {
    let mut descriptor = ToolDescriptor::of::<T>(name);
    descriptor.toolbox = toolbox;
    debug!("register block tool with custom toolbox: {}", name);
    self.tools.insert(name.to_string(), descriptor);
    self
  }

  pub fn unregister(&mut self, name: &str) -> Option<ToolDescriptor> {
    self.tools.remove(name)
  }

  pub fn get_tool(&self, name: &str) -> Option<&ToolDescriptor> {
    self.tools.get(name)
  }

  pub fn is_contentless(&self, name: &str) -> bool {
    self
      .get_tool(name)
      .map(|tool| tool.contentless)
      .unwrap_or(false)
  }

  /// Serializes one block instance into the envelope the host persists.
  /// `tool` must be of the type registered under `name`.
  pub fn save_block<T, V>(
    &self,
    id: &str,
    name: &str,
    tool: &mut T,
    view: &V,
  ) -> Result<SavedBlock, AdBlockError>
  where
    T: BlockTool + 'static,
    V: BlockView,
  {
    let descriptor = self
      .get_tool(name)
      .ok_or_else(|| AdBlockError::ToolNotFound(name.to_string()))?;
    if !descriptor.is::<T>() {
      return Err(AdBlockError::ToolMismatch(name.to_string()));
    }
    let data = serde_json::to_value(tool.save(view)?)?;
    Ok(SavedBlock {
      id: id.to_string(),
      ty: name.to_string(),
      data,
    })
  }

  /// Drops the empty blocks the way the host does before persisting a
  /// document. Blocks of contentless tools are always kept.
  pub fn clean_empty_blocks(&self, blocks: Vec<SavedBlock>) -> Vec<SavedBlock> {
    blocks
      .into_iter()
      .filter(|block| {
        let keep = self.is_contentless(&block.ty) || !block.is_empty();
        if !keep {
          trace!("drop empty block: {} ({})", block.id, block.ty);
        }
        keep
      })
      .collect()
  }
}
