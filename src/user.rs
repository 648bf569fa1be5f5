use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct User {
  pub about: Option<String>,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub created: u64,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub id: String,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub karma: i64,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub submitted: Vec<u64>,
}

impl User {
  #[must_use]
  pub fn is_empty(&self) -> bool {
    *self == Self::default()
  }

  #[must_use]
  pub fn plain_about(&self) -> Option<String> {
    self.about.as_deref().map(sanitize_html)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_user() {
    let user = serde_json::from_str::<User>(
      r#"{
        "about": "This is a test",
        "created": 1173923446,
        "id": "jl",
        "karma": 2937,
        "submitted": [8265435, 8168423, 8090946]
      }"#,
    )
    .unwrap();

    assert_eq!(
      user,
      User {
        about: Some("This is a test".into()),
        created: 1_173_923_446,
        id: "jl".into(),
        karma: 2937,
        submitted: vec![8_265_435, 8_168_423, 8_090_946],
      }
    );
  }

  #[test]
  fn missing_about_and_submissions_default() {
    let user = serde_json::from_str::<User>(
      r#"{"id": "munrocape", "created": 1400000000, "karma": 1}"#,
    )
    .unwrap();

    assert_eq!(user.about, None);
    assert!(user.submitted.is_empty());
    assert!(!user.is_empty());
  }

  #[test]
  fn plain_about_decodes_entities() {
    let user = User {
      about: Some("Founder of <a href=\"x\">Y</a>&#x2F;Z".into()),
      ..User::default()
    };

    assert_eq!(user.plain_about().as_deref(), Some("Founder of Y/Z"));
  }
}
