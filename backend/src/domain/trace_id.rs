//! Correlation identifier shared by log lines and error bodies.
//!
//! Every HTTP request and every scheduled sync runs inside its own
//! [`TraceId::scope`], so anything logged or returned while serving it can be
//! tied back together. The identifier lives in tokio task-local storage,
//! which spawned tasks do not inherit.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use uuid::Uuid;

tokio::task_local! {
    static CURRENT: TraceId;
}

/// Reasons a caller-supplied trace identifier is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceIdParseError {
    /// The text is not a hyphenated or simple UUID.
    #[error("trace id is not a UUID: {0}")]
    Malformed(String),
    /// The nil UUID cannot tell two operations apart.
    #[error("trace id must not be the nil UUID")]
    Nil,
}

/// Identifier correlating the work done for one request or one sync run.
///
/// # Examples
/// ```
/// use job_offers::domain::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let id = TraceId::generate();
/// let seen = id.scope(async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// assert_eq!(TraceId::current(), None);
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Mint a random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Adopt an identifier supplied by the caller, or mint one when it is
    /// absent or unusable.
    ///
    /// # Examples
    /// ```
    /// use job_offers::domain::TraceId;
    ///
    /// let upstream = "6a2f41a3-c54c-4c6a-8f1e-2b9d0b9b3c10";
    /// assert_eq!(TraceId::from_caller(Some(upstream)).to_string(), upstream);
    /// assert_ne!(TraceId::from_caller(Some("not-a-uuid")).to_string(), "not-a-uuid");
    /// ```
    #[must_use]
    pub fn from_caller(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok())
            .unwrap_or_else(Self::generate)
    }

    /// Identifier of the enclosing scope, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Drive `fut` with this identifier as [`TraceId::current`].
    pub async fn scope<Fut>(self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(self, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TraceId {
    type Err = TraceIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let uuid = Uuid::parse_str(trimmed)
            .map_err(|_| TraceIdParseError::Malformed(trimmed.to_owned()))?;
        if uuid.is_nil() {
            return Err(TraceIdParseError::Nil);
        }
        Ok(Self(uuid))
    }
}
