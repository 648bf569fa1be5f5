use super::*;

/// The `type` of an item. Values the API adds later decode as `Unknown`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
  Comment,
  Job,
  Poll,
  PollOpt,
  Story,
  #[serde(other)]
  Unknown,
}
