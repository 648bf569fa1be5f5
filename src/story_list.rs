use super::*;

/// The ranked story lists the API publishes, each capped at a fixed size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StoryList {
  Ask,
  Job,
  New,
  Show,
  Top,
}

impl Display for StoryList {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for StoryList {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::all()
      .iter()
      .copied()
      .find(|list| list.label() == s)
      .ok_or_else(|| {
        format!("unknown story list `{s}`, expected one of: top, new, ask, show, job")
      })
  }
}

impl StoryList {
  #[must_use]
  pub fn all() -> &'static [StoryList] {
    &[Self::Top, Self::New, Self::Ask, Self::Show, Self::Job]
  }

  #[must_use]
  pub fn label(self) -> &'static str {
    match self {
      Self::Ask => "ask",
      Self::Job => "job",
      Self::New => "new",
      Self::Show => "show",
      Self::Top => "top",
    }
  }

  /// Maximum number of ids the API returns for this list.
  #[must_use]
  pub fn limit(self) -> usize {
    match self {
      Self::New | Self::Top => 500,
      Self::Ask | Self::Job | Self::Show => 200,
    }
  }

  pub(crate) fn path(self, config: &Config) -> &str {
    match self {
      Self::Ask => &config.ask_stories,
      Self::Job => &config.job_stories,
      Self::New => &config.new_stories,
      Self::Show => &config.show_stories,
      Self::Top => &config.top_stories,
    }
  }
}
