use super::*;

/// Recently changed items and profiles.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct Updates {
  #[serde(deserialize_with = "deserialize_nullable")]
  pub items: Vec<u64>,
  #[serde(deserialize_with = "deserialize_nullable")]
  pub profiles: Vec<String>,
}
