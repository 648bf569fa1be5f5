use super::*;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The body was not valid JSON or did not match the target record.
  #[error("failed to decode response from {url}")]
  Decode {
    #[source]
    source: serde_json::Error,
    url: String,
  },
  /// The HTTP client could not be built, so no request was made.
  #[error("failed to initialize HTTP client")]
  Initialize {
    #[source]
    source: BoxError,
  },
  /// The connection succeeded but the body could not be read in full.
  #[error("failed to read response body from {url}")]
  Io {
    #[source]
    source: BoxError,
    url: String,
  },
  #[error(
    "number {requested} greater than maximum {limit} items allowed for {list} stories"
  )]
  LimitExceeded {
    limit: usize,
    list: StoryList,
    requested: usize,
  },
  #[error(
    "requested {requested} {list} stories but upstream returned only {available}"
  )]
  OutOfBounds {
    available: usize,
    list: StoryList,
    requested: usize,
  },
  /// The GET could not be completed (DNS, connection, timeout).
  #[error("request to {url} failed")]
  Transport {
    #[source]
    source: BoxError,
    url: String,
  },
}

impl Error {
  #[must_use]
  pub fn is_range(&self) -> bool {
    matches!(self, Self::LimitExceeded { .. } | Self::OutOfBounds { .. })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn limit_exceeded_reports_family_limit() {
    let error = Error::LimitExceeded {
      limit: 200,
      list: StoryList::Ask,
      requested: 201,
    };

    assert_eq!(
      error.to_string(),
      "number 201 greater than maximum 200 items allowed for ask stories"
    );
  }

  #[test]
  fn range_errors_are_distinguishable() {
    let over = Error::LimitExceeded {
      limit: 500,
      list: StoryList::Top,
      requested: 501,
    };

    let short = Error::OutOfBounds {
      available: 5,
      list: StoryList::New,
      requested: 10,
    };

    let transport = Error::Transport {
      source: "connection refused".into(),
      url: "https://example.com".into(),
    };

    assert!(over.is_range());
    assert!(short.is_range());
    assert!(!transport.is_range());
  }

  #[test]
  fn initialize_error_names_no_url() {
    let error = Error::Initialize {
      source: "no TLS backend".into(),
    };

    assert_eq!(error.to_string(), "failed to initialize HTTP client");
    assert!(!matches!(error, Error::Transport { .. }));
    assert!(!error.is_range());
  }

  #[test]
  fn transport_error_keeps_its_cause() {
    let error = Error::Transport {
      source: "connection refused".into(),
      url: "https://example.com/v0/topstories.json".into(),
    };

    assert_eq!(
      std::error::Error::source(&error).map(ToString::to_string),
      Some("connection refused".to_string())
    );
  }
}
