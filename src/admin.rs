//! Admin Inbox
//!
//! Read-only view over the messages the backend has received. One fetch on
//! mount, no retry and no write-back.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::api::{ApiError, PortfolioBackend};

pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch messages. Please try again later.";

pub const EMPTY_INBOX_MESSAGE: &str = "You haven't received any messages yet.";

/// Message identifier; backends hand out numbers or opaque strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageId {
    Number(u64),
    Text(String),
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageId::Number(n) => write!(f, "{}", n),
            MessageId::Text(s) => f.write_str(s),
        }
    }
}

/// When a message arrived
///
/// Accepts RFC 3339 text or epoch milliseconds. Anything else is kept
/// verbatim and displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageTimestamp {
    At(DateTime<Utc>),
    Unparsed(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for MessageTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Millis(ms) => DateTime::from_timestamp_millis(ms)
                .map(MessageTimestamp::At)
                .unwrap_or_else(|| MessageTimestamp::Unparsed(ms.to_string())),
            RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(&text)
                .map(|dt| MessageTimestamp::At(dt.with_timezone(&Utc)))
                .unwrap_or(MessageTimestamp::Unparsed(text)),
        })
    }
}

impl Serialize for MessageTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MessageTimestamp::At(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            MessageTimestamp::Unparsed(raw) => serializer.serialize_str(raw),
        }
    }
}

const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

impl MessageTimestamp {
    /// Format like `Jan 5, 2024, 03:07 PM` in the given zone
    pub fn format_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            MessageTimestamp::At(dt) => dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
            MessageTimestamp::Unparsed(raw) => raw.clone(),
        }
    }

    /// Format in the viewer's local time zone
    pub fn format_local(&self) -> String {
        self.format_in(&Local)
    }
}

/// A message received through the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(alias = "_id")]
    pub id: MessageId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    pub timestamp: MessageTimestamp,
    #[serde(default)]
    pub read: bool,
}

/// Border accent distinguishing read from unread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAccent {
    Read,
    Unread,
}

impl MessageAccent {
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageAccent::Read => "message-read",
            MessageAccent::Unread => "message-unread",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MessageAccent::Read => "Read",
            MessageAccent::Unread => "Unread",
        }
    }
}

impl ContactMessage {
    pub fn subject_line(&self) -> &str {
        if self.subject.is_empty() {
            "No Subject"
        } else {
            &self.subject
        }
    }

    pub fn accent(&self) -> MessageAccent {
        if self.read {
            MessageAccent::Read
        } else {
            MessageAccent::Unread
        }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Render state of the inbox
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdminView {
    #[default]
    Loading,
    Error(String),
    Empty,
    Messages(Vec<ContactMessage>),
}

impl AdminView {
    /// Collapse a fetch outcome into a render state
    pub fn from_result(result: Result<Vec<ContactMessage>, ApiError>) -> Self {
        match result {
            Ok(messages) if messages.is_empty() => AdminView::Empty,
            Ok(messages) => {
                tracing::debug!(count = messages.len(), "Messages loaded");
                AdminView::Messages(messages)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch messages");
                AdminView::Error(FETCH_FAILURE_MESSAGE.to_string())
            }
        }
    }

    /// Issue the single fetch and resolve to a terminal state
    pub async fn load<B>(backend: &B) -> Self
    where
        B: PortfolioBackend + ?Sized,
    {
        Self::from_result(backend.fetch_messages().await)
    }

    pub fn messages(&self) -> &[ContactMessage] {
        match self {
            AdminView::Messages(messages) => messages,
            _ => &[],
        }
    }

    pub fn unread_count(&self) -> usize {
        self.messages().iter().filter(|m| !m.read).count()
    }
}
