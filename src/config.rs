use super::*;

/// Base URL and per-resource path templates.
///
/// Templates for single resources carry one `{}` placeholder which is
/// replaced by the item id or username.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
  pub ask_stories: String,
  pub base_url: String,
  pub item: String,
  pub job_stories: String,
  pub max_item: String,
  pub new_stories: String,
  pub show_stories: String,
  pub top_stories: String,
  pub updates: String,
  pub user: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      ask_stories: "askstories.json".into(),
      base_url: Self::API_BASE_URL.into(),
      item: "item/{}.json".into(),
      job_stories: "jobstories.json".into(),
      max_item: "maxitem.json".into(),
      new_stories: "newstories.json".into(),
      show_stories: "showstories.json".into(),
      top_stories: "topstories.json".into(),
      updates: "updates.json".into(),
      user: "user/{}.json".into(),
    }
  }
}

impl Config {
  pub const API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/";

  pub(crate) fn item_url(&self, id: u64) -> String {
    self.url(&Self::render(&self.item, id))
  }

  fn render(template: &str, argument: impl Display) -> String {
    template.replacen("{}", &argument.to_string(), 1)
  }

  pub(crate) fn url(&self, path: &str) -> String {
    format!("{}{path}", self.base_url)
  }

  pub(crate) fn user_url(&self, username: &str) -> String {
    self.url(&Self::render(&self.user, username))
  }

  /// Replaces the base URL, appending the trailing `/` the templates
  /// expect when it is missing.
  #[must_use]
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    let mut base_url = base_url.into();

    if !base_url.ends_with('/') {
      base_url.push('/');
    }

    self.base_url = base_url;
    self
  }
}
