//! Blocking client for the read-only Hacker News Firebase API.
//!
//! Every accessor performs one HTTP GET, decodes the JSON body and returns
//! the typed record or an [`Error`].
//!
//! ```no_run
//! let client = hn_client::Client::default();
//!
//! for id in client.fetch_top_stories(10)? {
//!   let item = client.fetch_item(id)?;
//!   println!("{}", item.title.unwrap_or_default());
//! }
//! # Ok::<(), hn_client::Error>(())
//! ```

use {
  serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned},
  std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
    time::Duration,
  },
  tracing::{debug, warn},
  utils::{deserialize_nullable, sanitize_html},
};

pub use {
  client::Client,
  config::Config,
  error::{BoxError, Error, Result},
  item::Item,
  item_kind::ItemKind,
  story_list::StoryList,
  transport::{HttpTransport, Transport},
  updates::Updates,
  user::User,
};

mod client;
mod config;
mod error;
mod item;
mod item_kind;
mod story_list;
mod transport;
mod updates;
mod user;
mod utils;
