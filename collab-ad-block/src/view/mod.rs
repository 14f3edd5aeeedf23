mod element;
#[cfg(target_arch = "wasm32")]
mod web;

pub use element::*;
#[cfg(target_arch = "wasm32")]
pub use web::*;

use crate::error::AdBlockError;

pub const CONTENT_EDITABLE_ATTR: &str = "contenteditable";
pub const PLACEHOLDER_ATTR: &str = "data-placeholder";

/// The editable container a block tool renders into and reads back from.
///
/// A tool only ever creates elements, nests them, assigns attributes and
/// reads or replaces the markup of a child it can find by class name. Any
/// environment that offers those operations can host a block.
pub trait BlockView: Sized {
  /// Creates a new element with the given classes and attributes applied.
  /// Empty class names are skipped.
  fn make(tag_name: &str, class_names: &[&str], attributes: &[(&str, &str)])
  -> Result<Self, AdBlockError>;

  fn append_child(&mut self, child: Self) -> Result<(), AdBlockError>;

  fn has_class(&self, class_name: &str) -> bool;

  fn children_len(&self) -> usize;

  fn inner_html(&self) -> String;

  fn set_inner_html(&mut self, html: &str);

  fn attribute(&self, name: &str) -> Option<String>;

  fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AdBlockError>;

  /// Markup of the first descendant carrying `class_name`, or None when no
  /// descendant has it.
  fn child_html(&self, class_name: &str) -> Option<String>;

  /// Replaces the markup of the first descendant carrying `class_name`.
  /// Returns false when no descendant has it.
  fn set_child_html(&mut self, class_name: &str, html: &str) -> bool;
}
