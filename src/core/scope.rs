//! Scope selection: the whole transcript or a single sender.
//!
//! Every aggregation takes a [`Scope`]. With [`Scope::Sender`] the records are
//! first narrowed to that sender, the system sentinel included.
//!
//! # Examples
//!
//! ```
//! use chatlens::core::scope::Scope;
//! use chatlens::Sender;
//!
//! let scope: Scope = "Alice".parse()?;
//! assert_eq!(scope, Scope::Sender(Sender::user("Alice")));
//!
//! let scope: Scope = "Overall".parse()?;
//! assert!(scope.is_overall());
//!
//! let scope: Scope = "group_notification".parse()?;
//! assert_eq!(scope, Scope::Sender(Sender::GroupNotification));
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact; display names are case-sensitive
//! - A participant whose display name is literally `group_notification` cannot
//!   be selected by text, only by constructing the [`Sender`] directly

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ChatlensError;
use crate::message::{MessageRecord, Sender};

/// Filter dimension for aggregations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Every record.
    #[default]
    Overall,
    /// Only the records of one sender.
    Sender(Sender),
}

impl Scope {
    /// Textual form of [`Scope::Overall`].
    pub const OVERALL: &'static str = "Overall";

    /// Shorthand for `Scope::Sender(Sender::user(name))`.
    pub fn user(name: impl Into<String>) -> Self {
        Scope::Sender(Sender::user(name))
    }

    /// Returns `true` for [`Scope::Overall`].
    pub fn is_overall(&self) -> bool {
        matches!(self, Scope::Overall)
    }

    /// Returns `true` if `record` belongs to this scope.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            Scope::Overall => true,
            Scope::Sender(sender) => record.sender() == sender,
        }
    }

    /// Iterates over the records in this scope, in transcript order.
    pub fn filter<'a>(
        &'a self,
        records: &'a [MessageRecord],
    ) -> impl Iterator<Item = &'a MessageRecord> + 'a {
        records.iter().filter(move |r| self.matches(r))
    }
}

impl From<Sender> for Scope {
    fn from(sender: Sender) -> Self {
        Scope::Sender(sender)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Overall => f.write_str(Self::OVERALL),
            Scope::Sender(sender) => fmt::Display::fmt(sender, f),
        }
    }
}

impl FromStr for Scope {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(ChatlensError::invalid_scope(s)),
            Self::OVERALL => Ok(Scope::Overall),
            Sender::SENTINEL => Ok(Scope::Sender(Sender::GroupNotification)),
            name => Ok(Scope::user(name)),
        }
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
