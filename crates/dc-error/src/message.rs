use std::collections::TryReserveError;
use std::fmt;

/// Text held by an error record.
///
/// At most one message is live per record and its ownership is explicit:
/// `Owned` text is dropped when the record is reset or raised again,
/// `Borrowed` text is static and never freed.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Message {
    #[default]
    Absent,
    Owned(String),
    Borrowed(&'static str),
}

impl Message {
    /// Copy `text` into a freshly allocated owned message.
    ///
    /// Allocation goes through `try_reserve_exact`, so an allocator
    /// shortfall comes back as `Err` instead of aborting.
    pub fn try_copy(text: &str) -> Result<Message, TryReserveError> {
        let mut owned = String::new();
        owned.try_reserve_exact(text.len())?;
        owned.push_str(text);
        Ok(Message::Owned(owned))
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Message::Absent => None,
            Message::Owned(text) => Some(text.as_str()),
            Message::Borrowed(text) => Some(text),
        }
    }

    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Message::Owned(_))
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Message::Absent)
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Absent => f.write_str("Absent"),
            Message::Owned(text) => f.debug_tuple("Owned").field(text).finish(),
            Message::Borrowed(text) => f.debug_tuple("Borrowed").field(text).finish(),
        }
    }
}
