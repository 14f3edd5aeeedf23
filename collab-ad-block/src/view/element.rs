use std::fmt::Write;

use crate::error::AdBlockError;
use crate::view::BlockView;

/// An in-memory element tree.
///
/// Used wherever no live document is available: on the server side when a
/// document is exported, and in tests. `outer_html` produces the markup a
/// browser host would mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
  tag_name: String,
  class_list: Vec<String>,
  // insertion order is kept so the markup is stable
  attributes: Vec<(String, String)>,
  inner_html: String,
  children: Vec<Element>,
}

impl Element {
  pub fn new(tag_name: &str) -> Self {
    Self {
      tag_name: tag_name.to_string(),
      ..Default::default()
    }
  }

  pub fn tag_name(&self) -> &str {
    &self.tag_name
  }

  pub fn class_list(&self) -> &[String] {
    &self.class_list
  }

  pub fn add_class(&mut self, class_name: &str) {
    if class_name.is_empty() || self.has_class(class_name) {
      return;
    }
    self.class_list.push(class_name.to_string());
  }

  pub fn remove_class(&mut self, class_name: &str) {
    self.class_list.retain(|c| c != class_name);
  }

  pub fn children(&self) -> &[Element] {
    &self.children
  }

  /// Returns the first descendant carrying `class_name`, in document order.
  /// The element itself is not considered.
  pub fn find_by_class(&self, class_name: &str) -> Option<&Element> {
    for child in &self.children {
      if child.has_class(class_name) {
        return Some(child);
      }
      if let Some(found) = child.find_by_class(class_name) {
        return Some(found);
      }
    }
    None
  }

  pub fn find_by_class_mut(&mut self, class_name: &str) -> Option<&mut Element> {
    for child in self.children.iter_mut() {
      if child.has_class(class_name) {
        return Some(child);
      }
      if let Some(found) = child.find_by_class_mut(class_name) {
        return Some(found);
      }
    }
    None
  }

  /// Removes the first descendant carrying `class_name` and returns it.
  pub fn remove_by_class(&mut self, class_name: &str) -> Option<Element> {
    if let Some(index) = self.children.iter().position(|c| c.has_class(class_name)) {
      return Some(self.children.remove(index));
    }
    self
      .children
      .iter_mut()
      .find_map(|child| child.remove_by_class(class_name))
  }

  pub fn outer_html(&self) -> String {
    let mut html = String::new();
    self.write_html(&mut html);
    html
  }

  fn write_html(&self, out: &mut String) {
    let _ = write!(out, "<{}", self.tag_name);
    if !self.class_list.is_empty() {
      let _ = write!(out, " class=\"{}\"", escape_attr(&self.class_list.join(" ")));
    }
    for (name, value) in &self.attributes {
      let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }
    out.push('>');
    // inner markup is written as is, sanitizing it is up to the host
    out.push_str(&self.inner_html);
    for child in &self.children {
      child.write_html(out);
    }
    let _ = write!(out, "</{}>", self.tag_name);
  }
}

impl BlockView for Element {
  fn make(
    tag_name: &str,
    class_names: &[&str],
    attributes: &[(&str, &str)],
  ) -> Result<Self, AdBlockError> {
    let mut element = Element::new(tag_name);
    for class_name in class_names {
      element.add_class(class_name);
    }
    for (name, value) in attributes {
      element.set_attribute(name, value)?;
    }
    Ok(element)
  }

  fn append_child(&mut self, child: Self) -> Result<(), AdBlockError> {
    self.children.push(child);
    Ok(())
  }

  fn has_class(&self, class_name: &str) -> bool {
    self.class_list.iter().any(|c| c == class_name)
  }

  fn children_len(&self) -> usize {
    self.children.len()
  }

  fn inner_html(&self) -> String {
    if self.children.is_empty() {
      return self.inner_html.clone();
    }
    let mut html = self.inner_html.clone();
    for child in &self.children {
      child.write_html(&mut html);
    }
    html
  }

  fn set_inner_html(&mut self, html: &str) {
    self.children.clear();
    self.inner_html = html.to_string();
  }

  fn attribute(&self, name: &str) -> Option<String> {
    self
      .attributes
      .iter()
      .find(|(key, _)| key == name)
      .map(|(_, value)| value.clone())
  }

  fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AdBlockError> {
    if name == "class" {
      self.class_list = value.split_whitespace().map(|c| c.to_string()).collect();
      return Ok(());
    }
    match self.attributes.iter_mut().find(|(key, _)| key == name) {
      Some((_, old)) => *old = value.to_string(),
      None => self.attributes.push((name.to_string(), value.to_string())),
    }
    Ok(())
  }

  fn child_html(&self, class_name: &str) -> Option<String> {
    self.find_by_class(class_name).map(|child| child.inner_html())
  }

  fn set_child_html(&mut self, class_name: &str, html: &str) -> bool {
    match self.find_by_class_mut(class_name) {
      Some(child) => {
        child.set_inner_html(html);
        true
      },
      None => false,
    }
  }
}

fn escape_attr(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '"' => escaped.push_str("&quot;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      _ => escaped.push(c),
    }
  }
  escaped
}
