use anyhow::anyhow;
use wasm_bindgen::JsValue;

use crate::error::AdBlockError;
use crate::view::BlockView;

/// A [BlockView] backed by a live browser element.
#[derive(Debug, Clone)]
pub struct HtmlView {
  element: web_sys::Element,
}

impl HtmlView {
  pub fn from_element(element: web_sys::Element) -> Self {
    Self { element }
  }

  pub fn element(&self) -> &web_sys::Element {
    &self.element
  }

  pub fn into_element(self) -> web_sys::Element {
    self.element
  }

  fn query(&self, class_name: &str) -> Option<web_sys::Element> {
    self
      .element
      .query_selector(&format!(".{}", class_name))
      .ok()
      .flatten()
  }
}

impl BlockView for HtmlView {
  fn make(
    tag_name: &str,
    class_names: &[&str],
    attributes: &[(&str, &str)],
  ) -> Result<Self, AdBlockError> {
    let document = web_sys::window()
      .and_then(|window| window.document())
      .ok_or_else(|| anyhow!("No document is attached to the window"))?;
    let element = document.create_element(tag_name).map_err(js_error)?;
    let class_list = element.class_list();
    for class_name in class_names.iter().filter(|c| !c.is_empty()) {
      class_list.add_1(class_name).map_err(js_error)?;
    }
    for (name, value) in attributes {
      element.set_attribute(name, value).map_err(js_error)?;
    }
    Ok(Self { element })
  }

  fn append_child(&mut self, child: Self) -> Result<(), AdBlockError> {
    self.element.append_child(&child.element).map_err(js_error)?;
    Ok(())
  }

  fn has_class(&self, class_name: &str) -> bool {
    self.element.class_list().contains(class_name)
  }

  fn children_len(&self) -> usize {
    self.element.child_element_count() as usize
  }

  fn inner_html(&self) -> String {
    self.element.inner_html()
  }

  fn set_inner_html(&mut self, html: &str) {
    self.element.set_inner_html(html);
  }

  fn attribute(&self, name: &str) -> Option<String> {
    self.element.get_attribute(name)
  }

  fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AdBlockError> {
    self.element.set_attribute(name, value).map_err(js_error)
  }

  fn child_html(&self, class_name: &str) -> Option<String> {
    self.query(class_name).map(|child| child.inner_html())
  }

  fn set_child_html(&mut self, class_name: &str, html: &str) -> bool {
    match self.query(class_name) {
      Some(child) => {
        child.set_inner_html(html);
        true
      },
      None => false,
    }
  }
}

fn js_error(err: JsValue) -> AdBlockError {
  AdBlockError::Internal(anyhow!("{:?}", err))
}
