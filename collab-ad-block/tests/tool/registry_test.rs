use collab_ad_block::{
  AD_BLOCK_TOOL_NAME, AdBlock, AdBlockConfig, AdBlockError, BlockTool, BlockView, EditorApi,
  Element, GOOGLE_AD_ICON, SavedBlock, Toolbox, ToolRegistry, WIDTH_CLASS,
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::util::setup_log;

const NOTE_TOOL_NAME: &str = "note";

/// A minimal tool that, unlike the ad block, disappears when left empty.
struct NoteTool {
  text: String,
}

#[derive(Serialize)]
struct NoteData {
  text: String,
}

impl BlockTool for NoteTool {
  type Data = NoteData;
  type Config = ();

  fn toolbox() -> Toolbox {
    Toolbox {
      icon: "<svg></svg>".to_string(),
      title: "Note".to_string(),
    }
  }

  fn new(data: &Value, _config: (), _api: EditorApi) -> Self {
    let text = data
      .get("text")
      .and_then(|v| v.as_str())
      .unwrap_or_default()
      .to_string();
    Self { text }
  }

  fn render<V: BlockView>(&self) -> Result<V, AdBlockError> {
    let mut view = V::make("div", &["note"], &[("contenteditable", "true")])?;
    view.set_inner_html(&self.text);
    Ok(view)
  }

  fn save<V: BlockView>(&mut self, view: &V) -> Result<NoteData, AdBlockError> {
    self.text = view.inner_html();
    Ok(NoteData {
      text: self.text.clone(),
    })
  }

  fn render_settings<V: BlockView>(&self) -> Result<V, AdBlockError> {
    V::make("div", &[], &[])
  }
}

fn registry() -> ToolRegistry {
  setup_log();
  let mut registry = ToolRegistry::with_default_tools();
  registry.register::<NoteTool>(NOTE_TOOL_NAME);
  registry
}

fn empty_ad_block() -> SavedBlock {
  SavedBlock {
    id: "ad".to_string(),
    ty: AD_BLOCK_TOOL_NAME.to_string(),
    data: json!({
      "width": 0,
      "height": 0,
      "adClient": "",
      "adSlot": "",
      "adFormat": "",
    }),
  }
}

#[test]
fn default_tools_register_ad_block_test() {
  let registry = registry();
  let tool = registry.get_tool(AD_BLOCK_TOOL_NAME).unwrap();
  assert_eq!(tool.name, "googleAd");
  assert_eq!(tool.toolbox, AdBlock::toolbox());
  assert!(tool.contentless);
  assert!(tool.enable_line_breaks);
  assert!(tool.sanitize.fields.is_empty());

  let note = registry.get_tool(NOTE_TOOL_NAME).unwrap();
  assert!(!note.contentless);
  assert!(!note.enable_line_breaks);
}

#[test]
fn empty_ad_block_survives_cleanup_test() {
  let registry = registry();
  let ad = empty_ad_block();
  assert!(ad.is_empty());

  let note = SavedBlock {
    id: "note".to_string(),
    ty: NOTE_TOOL_NAME.to_string(),
    data: json!({ "text": "  " }),
  };
  let filled_note = SavedBlock {
    id: "filled".to_string(),
    ty: NOTE_TOOL_NAME.to_string(),
    data: json!({ "text": "hello" }),
  };

  let kept = registry.clean_empty_blocks(vec![ad.clone(), note, filled_note.clone()]);
  assert_eq!(kept, vec![ad, filled_note]);
}

#[test]
fn cleared_ad_block_is_saved_and_kept_test() {
  let registry = registry();
  let mut block = AdBlock::new(&json!({}), AdBlockConfig::default(), EditorApi::default());
  let mut view: Element = block.render().unwrap();
  view.set_child_html(WIDTH_CLASS, "");

  let saved = registry
    .save_block("ad-1", AD_BLOCK_TOOL_NAME, &mut block, &view)
    .unwrap();
  assert_eq!(saved.ty, AD_BLOCK_TOOL_NAME);
  assert_eq!(saved.data["width"], json!(0));
  assert_eq!(saved.data["height"], json!(180));
  assert_eq!(registry.clean_empty_blocks(vec![saved.clone()]), vec![saved]);
}

#[test]
fn unregistered_ad_block_is_dropped_when_empty_test() {
  let mut registry = registry();
  assert!(registry.unregister(AD_BLOCK_TOOL_NAME).is_some());
  assert!(!registry.is_contentless(AD_BLOCK_TOOL_NAME));
  assert!(registry.clean_empty_blocks(vec![empty_ad_block()]).is_empty());
}

#[test]
fn save_block_requires_registered_tool_test() {
  let registry = ToolRegistry::new();
  let mut block = AdBlock::new(&json!({}), AdBlockConfig::default(), EditorApi::default());
  let view: Element = block.render().unwrap();
  let err = registry
    .save_block("ad-1", AD_BLOCK_TOOL_NAME, &mut block, &view)
    .unwrap_err();
  assert!(matches!(err, AdBlockError::ToolNotFound(name) if name == AD_BLOCK_TOOL_NAME));
}

#[test]
fn save_block_rejects_tool_of_another_type_test() {
  let registry = registry();
  let mut note = NoteTool::new(&json!({ "text": "hi" }), (), EditorApi::default());
  let view: Element = note.render().unwrap();
  let err = registry
    .save_block("n1", AD_BLOCK_TOOL_NAME, &mut note, &view)
    .unwrap_err();
  assert!(matches!(err, AdBlockError::ToolMismatch(name) if name == AD_BLOCK_TOOL_NAME));
  // the tool is left untouched when the save is refused
  assert_eq!(note.text, "hi");

  let descriptor = registry.get_tool(AD_BLOCK_TOOL_NAME).unwrap();
  assert!(descriptor.is::<AdBlock>());
  assert!(!descriptor.is::<NoteTool>());
}

#[test]
fn saved_block_envelope_test() {
  let registry = registry();
  let mut note = NoteTool::new(&json!({ "text": "hi" }), (), EditorApi::default());
  let view: Element = note.render().unwrap();
  let saved = registry
    .save_block("n1", NOTE_TOOL_NAME, &mut note, &view)
    .unwrap();
  assert_eq!(
    serde_json::to_value(&saved).unwrap(),
    json!({ "id": "n1", "type": "note", "data": { "text": "hi" } })
  );

  let parsed: SavedBlock = serde_json::from_value(json!({
    "id": "ad",
    "type": "googleAd",
    "data": { "adClient": "ca-pub-1" },
  }))
  .unwrap();
  assert_eq!(parsed.ty, AD_BLOCK_TOOL_NAME);
  assert!(!parsed.is_empty());
}

#[test]
fn register_with_custom_toolbox_test() {
  let mut registry = ToolRegistry::new();
  let toolbox = Toolbox {
    icon: "<svg id=\"ad\"></svg>".to_string(),
    title: "Advert".to_string(),
  };
  registry.register_with_toolbox::<AdBlock>(AD_BLOCK_TOOL_NAME, toolbox.clone());
  let tool = registry.get_tool(AD_BLOCK_TOOL_NAME).unwrap();
  assert_eq!(tool.toolbox, toolbox);
  assert_ne!(tool.toolbox.icon, GOOGLE_AD_ICON);
  assert!(tool.contentless);
}
