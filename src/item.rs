use super::*;

/// A story, comment, job, poll or poll option.
///
/// Fields that do not apply to an item's kind are `None` (or empty for
/// `kids` and `parts`). A `null` response decodes to `Item::default()`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct Item {
  pub by: Option<String>,
  pub dead: Option<bool>,
  pub deleted: Option<bool>,
  pub descendants: Option<u64>,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub id: u64,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub kids: Vec<u64>,
  pub parent: Option<u64>,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub parts: Vec<u64>,
  pub poll: Option<u64>,
  pub score: Option<i64>,
  pub text: Option<String>,
  pub time: Option<u64>,
  pub title: Option<String>,
  pub r#type: Option<ItemKind>,
  pub url: Option<String>,
}

impl Item {
  /// Whether this is the zero value the API's `null` decodes to.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    *self == Self::default()
  }

  #[must_use]
  pub fn permalink(&self) -> String {
    format!("https://news.ycombinator.com/item?id={}", self.id)
  }

  /// The HTML `text` body as plain text, one blank line between
  /// paragraphs.
  #[must_use]
  pub fn plain_text(&self) -> Option<String> {
    self.text.as_deref().map(sanitize_html)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn absent_fields_decode_to_zero_values() {
    let item = serde_json::from_str::<Item>(
      r#"{"id": 2921983, "type": "comment", "parent": 2921506}"#,
    )
    .unwrap();

    assert_eq!(item.id, 2_921_983);
    assert_eq!(item.r#type, Some(ItemKind::Comment));
    assert_eq!(item.parent, Some(2_921_506));
    assert_eq!(item.by, None);
    assert_eq!(item.score, None);
    assert!(item.kids.is_empty());
    assert!(item.parts.is_empty());
    assert!(!item.is_empty());
  }

  #[test]
  fn serialized_item_decodes_unchanged() {
    let item = Item {
      by: Some("norvig".into()),
      id: 2_921_983,
      kids: vec![2_922_097, 2_922_429],
      parent: Some(2_921_506),
      text: Some("Aw shucks".into()),
      time: Some(1_314_211_127),
      r#type: Some(ItemKind::Comment),
      ..Item::default()
    };

    let encoded = serde_json::to_string(&item).unwrap();

    assert_eq!(serde_json::from_str::<Item>(&encoded).unwrap(), item);
  }

  #[test]
  fn incompatible_field_type_fails() {
    assert!(serde_json::from_str::<Item>(r#"{"id": "abc"}"#).is_err());
  }

  #[test]
  fn default_item_is_empty() {
    assert!(Item::default().is_empty());
  }

  #[test]
  fn permalink_points_at_item_page() {
    let item = Item {
      id: 8863,
      ..Item::default()
    };

    assert_eq!(item.permalink(), "https://news.ycombinator.com/item?id=8863");
  }

  #[test]
  fn plain_text_strips_markup() {
    let item = Item {
      text: Some("<p>Hello &amp; <i>goodbye</i></p>".into()),
      ..Item::default()
    };

    assert_eq!(item.plain_text().as_deref(), Some("Hello & goodbye"));
  }

  #[test]
  fn plain_text_keeps_paragraphs_and_code() {
    let item = Item {
      text: Some(
        "First para.<p>Second para.<p><pre><code>fn main() {\n    x();\n}</code></pre>"
          .into(),
      ),
      ..Item::default()
    };

    assert_eq!(
      item.plain_text().as_deref(),
      Some("First para.\n\nSecond para.\n\nfn main() {\n    x();\n}")
    );
  }
}
