use super::*;

/// Hacker News API client.
///
/// Holds no mutable state, so a single instance can be shared between
/// threads.
#[derive(Clone, Debug)]
pub struct Client<T = HttpTransport> {
  config: Config,
  transport: T,
}

impl Default for Client {
  fn default() -> Self {
    Self::new(Config::default())
  }
}

impl Client {
  #[must_use]
  pub fn new(config: Config) -> Self {
    Self::with_transport(config, HttpTransport::default())
  }
}

impl<T: Transport> Client<T> {
  #[must_use]
  pub fn config(&self) -> &Config {
    &self.config
  }

  fn decode<D>(url: &str, body: &[u8]) -> Result<D>
  where
    D: DeserializeOwned + Default,
  {
    serde_json::from_slice::<Option<D>>(body)
      .map(Option::unwrap_or_default)
      .map_err(|source| Error::Decode {
        source,
        url: url.to_string(),
      })
  }

  /// Most recent Ask HN stories, up to 200.
  ///
  /// # Errors
  ///
  /// See [`Client::fetch_story_list`].
  pub fn fetch_ask_stories(&self, number: usize) -> Result<Vec<u64>> {
    self.fetch_story_list(StoryList::Ask, number)
  }

  /// Fetches the item with the given id.
  ///
  /// A nonexistent id yields `Item::default()` rather than an error; use
  /// [`Client::find_item`] to tell the two apart.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Transport`] or [`Error::Io`] if the request fails and
  /// [`Error::Decode`] if the body is not an item.
  pub fn fetch_item(&self, id: u64) -> Result<Item> {
    self.fetch_json(&self.config.item_url(id))
  }

  /// Most recent job postings, up to 200.
  ///
  /// # Errors
  ///
  /// See [`Client::fetch_story_list`].
  pub fn fetch_job_stories(&self, number: usize) -> Result<Vec<u64>> {
    self.fetch_story_list(StoryList::Job, number)
  }

  fn fetch_json<D>(&self, url: &str) -> Result<D>
  where
    D: DeserializeOwned + Default,
  {
    let body = self.fetch_resource(url)?;
    Self::decode(url, &body)
  }

  /// The current largest item id.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Transport`], [`Error::Io`] or [`Error::Decode`].
  pub fn fetch_max_item(&self) -> Result<u64> {
    self.fetch_json(&self.config.url(&self.config.max_item))
  }

  /// Newest stories, up to 500.
  ///
  /// # Errors
  ///
  /// See [`Client::fetch_story_list`].
  pub fn fetch_new_stories(&self, number: usize) -> Result<Vec<u64>> {
    self.fetch_story_list(StoryList::New, number)
  }

  /// Issues one GET for `url` and returns the body unchanged, whatever the
  /// response status.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Transport`] if the request cannot be completed and
  /// [`Error::Io`] if the body cannot be read.
  pub fn fetch_resource(&self, url: &str) -> Result<Vec<u8>> {
    self.transport.get(url)
  }

  /// Most recent Show HN stories, up to 200.
  ///
  /// # Errors
  ///
  /// See [`Client::fetch_story_list`].
  pub fn fetch_show_stories(&self, number: usize) -> Result<Vec<u64>> {
    self.fetch_story_list(StoryList::Show, number)
  }

  /// Returns the first `number` ids of `list`, in the API's ranking order.
  ///
  /// # Errors
  ///
  /// Returns [`Error::LimitExceeded`] without touching the network when
  /// `number` is above the list's limit, and [`Error::OutOfBounds`] when the
  /// API returned fewer than `number` ids. Fetch and decode failures are
  /// passed through.
  pub fn fetch_story_list(
    &self,
    list: StoryList,
    number: usize,
  ) -> Result<Vec<u64>> {
    let limit = list.limit();

    if number > limit {
      return Err(Error::LimitExceeded {
        limit,
        list,
        requested: number,
      });
    }

    let mut ids =
      self.fetch_json::<Vec<u64>>(&self.config.url(list.path(&self.config)))?;

    if ids.len() < number {
      return Err(Error::OutOfBounds {
        available: ids.len(),
        list,
        requested: number,
      });
    }

    ids.truncate(number);

    Ok(ids)
  }

  /// Current top stories, up to 500.
  ///
  /// # Errors
  ///
  /// See [`Client::fetch_story_list`].
  pub fn fetch_top_stories(&self, number: usize) -> Result<Vec<u64>> {
    self.fetch_story_list(StoryList::Top, number)
  }

  /// # Errors
  ///
  /// Returns [`Error::Transport`], [`Error::Io`] or [`Error::Decode`].
  pub fn fetch_updates(&self) -> Result<Updates> {
    self.fetch_json(&self.config.url(&self.config.updates))
  }

  /// Fetches a user by case-sensitive username. An unknown username yields
  /// `User::default()`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Transport`], [`Error::Io`] or [`Error::Decode`].
  pub fn fetch_user(&self, username: &str) -> Result<User> {
    self.fetch_json(&self.config.user_url(username))
  }

  /// Like [`Client::fetch_item`], but returns `None` when the API has no
  /// item with this id.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Transport`], [`Error::Io`] or [`Error::Decode`].
  pub fn find_item(&self, id: u64) -> Result<Option<Item>> {
    self.fetch_json(&self.config.item_url(id))
  }

  /// Like [`Client::fetch_user`], but returns `None` for unknown usernames.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Transport`], [`Error::Io`] or [`Error::Decode`].
  pub fn find_user(&self, username: &str) -> Result<Option<User>> {
    self.fetch_json(&self.config.user_url(username))
  }

  #[must_use]
  pub fn with_transport(config: Config, transport: T) -> Self {
    Self { config, transport }
  }
}
