use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

// do not change the key values, they are part of the saved document format.
pub const WIDTH_KEY: &str = "width";
pub const HEIGHT_KEY: &str = "height";
pub const AD_CLIENT_KEY: &str = "adClient";
pub const AD_SLOT_KEY: &str = "adSlot";
pub const AD_FORMAT_KEY: &str = "adFormat";

pub const AUTO_WIDTH: &str = "auto";
pub const DEFAULT_HEIGHT: u32 = 180;

/// Width of the ad slot: either sized by the ad network or fixed in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AdWidth {
  #[default]
  Auto,
  Pixels(u32),
}

impl AdWidth {
  /// Reads the width back from the markup of its editable region.
  pub fn from_markup(markup: &str) -> Self {
    if normalize_markup(markup).eq_ignore_ascii_case(AUTO_WIDTH) {
      AdWidth::Auto
    } else {
      AdWidth::Pixels(coerce_pixels(markup))
    }
  }

  fn from_saved(value: &Value) -> Self {
    match value {
      Value::String(s) if s.trim().eq_ignore_ascii_case(AUTO_WIDTH) => AdWidth::Auto,
      _ => pixels_from_saved(value).map_or(AdWidth::Auto, AdWidth::Pixels),
    }
  }

  pub fn pixels(&self) -> Option<u32> {
    match self {
      AdWidth::Auto => None,
      AdWidth::Pixels(px) => Some(*px),
    }
  }
}

impl Display for AdWidth {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      AdWidth::Auto => f.write_str(AUTO_WIDTH),
      AdWidth::Pixels(px) => write!(f, "{}", px),
    }
  }
}

impl Serialize for AdWidth {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      AdWidth::Auto => serializer.serialize_str(AUTO_WIDTH),
      AdWidth::Pixels(px) => serializer.serialize_u32(*px),
    }
  }
}

impl<'de> Deserialize<'de> for AdWidth {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(AdWidth::from_saved(&value))
  }
}

/// The record persisted for one ad block.
///
/// All five fields are always present. Construction from saved data never
/// fails: anything missing or unusable falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdBlockData {
  pub width: AdWidth,
  pub height: u32,
  pub ad_client: String,
  pub ad_slot: String,
  pub ad_format: String,
}

impl Default for AdBlockData {
  fn default() -> Self {
    Self {
      width: AdWidth::Auto,
      height: DEFAULT_HEIGHT,
      ad_client: String::new(),
      ad_slot: String::new(),
      ad_format: String::new(),
    }
  }
}

impl AdBlockData {
  /// Normalizes previously saved data. A value counts as missing when it is
  /// absent, `null`, `false`, `0` or an empty string. Anything that is not an
  /// object is treated as empty data.
  pub fn from_value(value: &Value) -> Self {
    match value {
      Value::Object(map) => Self::from_fields(|key| map.get(key)),
      _ => Self::default(),
    }
  }

  pub fn from_map(map: &HashMap<String, Value>) -> Self {
    Self::from_fields(|key| map.get(key))
  }

  fn from_fields<'a>(get: impl Fn(&str) -> Option<&'a Value>) -> Self {
    let defaults = Self::default();
    Self {
      width: get(WIDTH_KEY).map_or(defaults.width, AdWidth::from_saved),
      height: get(HEIGHT_KEY)
        .and_then(pixels_from_saved)
        .unwrap_or(defaults.height),
      ad_client: get(AD_CLIENT_KEY).map(string_from_saved).unwrap_or_default(),
      ad_slot: get(AD_SLOT_KEY).map(string_from_saved).unwrap_or_default(),
      ad_format: get(AD_FORMAT_KEY).map(string_from_saved).unwrap_or_default(),
    }
  }

  pub fn to_value(&self) -> Value {
    let mut map = Map::new();
    for (key, value) in self.to_map() {
      map.insert(key, value);
    }
    Value::Object(map)
  }

  /// The block data map as the document model stores it.
  pub fn to_map(&self) -> HashMap<String, Value> {
    let width = match self.width {
      AdWidth::Auto => Value::String(AUTO_WIDTH.to_string()),
      AdWidth::Pixels(px) => Value::from(px),
    };
    HashMap::from([
      (WIDTH_KEY.to_string(), width),
      (HEIGHT_KEY.to_string(), Value::from(self.height)),
      (AD_CLIENT_KEY.to_string(), Value::String(self.ad_client.clone())),
      (AD_SLOT_KEY.to_string(), Value::String(self.ad_slot.clone())),
      (AD_FORMAT_KEY.to_string(), Value::String(self.ad_format.clone())),
    ])
  }
}

impl<'de> Deserialize<'de> for AdBlockData {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(AdBlockData::from_value(&value))
  }
}

/// Converts the markup of a dimension region into pixels.
///
/// Surrounding whitespace, `&nbsp;` and trailing `<br>` tags are ignored. An
/// empty region is 0. A fractional value is rounded to the nearest pixel and
/// anything above `u32::MAX` saturates. Input that is not a finite,
/// non-negative decimal number is 0.
pub fn coerce_pixels(markup: &str) -> u32 {
  let text = normalize_markup(markup);
  if text.is_empty() {
    return 0;
  }
  match parse_pixels(&text) {
    Some(px) => px,
    None => {
      warn!("non numeric dimension `{}` saved as 0", text);
      0
    },
  }
}

fn parse_pixels(text: &str) -> Option<u32> {
  let number = text.parse::<f64>().ok()?;
  pixels_from_f64(number)
}

fn pixels_from_f64(number: f64) -> Option<u32> {
  if !number.is_finite() || number < 0.0 {
    return None;
  }
  // float to int casts saturate
  Some(number.round() as u32)
}

fn normalize_markup(markup: &str) -> String {
  let mut text = markup.replace("&nbsp;", " ");
  loop {
    let trimmed = text.trim_end();
    let lower = trimmed.to_ascii_lowercase();
    let stripped = ["<br>", "<br/>", "<br />"]
      .iter()
      .find(|tag| lower.ends_with(*tag))
      .map(|tag| trimmed[..trimmed.len() - tag.len()].to_string());
    match stripped {
      Some(rest) => text = rest,
      None => break,
    }
  }
  text.trim().to_string()
}

/// Pixels of a saved dimension, or None when the saved value is falsy
/// (`null`, `false`, `0` or an empty string) and the default applies. Any
/// other value is present and goes through [coerce_pixels].
fn pixels_from_saved(value: &Value) -> Option<u32> {
  match value {
    Value::Null | Value::Bool(false) => None,
    Value::Number(n) if n.as_f64() == Some(0.0) => None,
    Value::String(s) if s.is_empty() => None,
    Value::Number(n) => Some(n.as_f64().and_then(pixels_from_f64).unwrap_or(0)),
    Value::String(s) => Some(coerce_pixels(s)),
    _ => Some(0),
  }
}

fn string_from_saved(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    Value::Number(n) if n.as_f64() != Some(0.0) => n.to_string(),
    Value::Bool(true) => "true".to_string(),
    _ => String::new(),
  }
}
