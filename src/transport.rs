use super::*;

/// Performs a single GET and hands back the raw response body.
///
/// Implementations must not inspect the status code: whatever body the
/// server sends is returned and left to the decode step.
pub trait Transport: Send + Sync {
  /// # Errors
  ///
  /// Returns [`Error::Transport`] when the request cannot be completed and
  /// [`Error::Io`] when the body cannot be read.
  fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`Transport`] backed by a blocking [`reqwest`] client.
#[derive(Clone, Debug)]
pub struct HttpTransport {
  client: reqwest::blocking::Client,
  timeout: Option<Duration>,
}

/// A transport without a request timeout.
///
/// Panics if the TLS backend cannot be initialized, as
/// `reqwest::blocking::Client::new` does.
impl Default for HttpTransport {
  fn default() -> Self {
    Self::with_timeout(None).expect("failed to initialize HTTP client")
  }
}

impl Transport for HttpTransport {
  fn get(&self, url: &str) -> Result<Vec<u8>> {
    debug!(url, "fetching resource");

    let response = self.client.get(url).send().map_err(|source| {
      Error::Transport {
        source: Box::new(source),
        url: url.to_string(),
      }
    })?;

    let status = response.status();

    if !status.is_success() {
      warn!(url, %status, "unexpected response status");
    }

    let body = response.bytes().map_err(|source| Error::Io {
      source: Box::new(source),
      url: url.to_string(),
    })?;

    debug!(url, bytes = body.len(), "fetched resource");

    Ok(body.to_vec())
  }
}

impl HttpTransport {
  #[must_use]
  pub fn timeout(&self) -> Option<Duration> {
    self.timeout
  }

  /// Builds a transport whose requests give up after `timeout`, or never
  /// when `None`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Initialize`] if the underlying HTTP client cannot be
  /// built.
  pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
    let client = reqwest::blocking::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|source| Error::Initialize {
        source: Box::new(source),
      })?;

    Ok(Self { client, timeout })
  }
}
