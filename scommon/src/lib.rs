//! Shared primitives and strongly-typed identifiers for workspace crates.
//!
//! ```rust
//! use scommon::{MessageId, TopicId};
//!
//! let topic = TopicId::from("math101");
//! let message = MessageId::new(7);
//!
//! assert_eq!(topic.as_str(), "math101");
//! assert_eq!(message.value(), 7);
//! assert_eq!(message.next(), MessageId::new(8));
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use scommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Identifier newtypes shared between the client, core, and observability crates.
    //!
    //! ```rust
    //! use scommon::{MessageId, TopicId};
    //!
    //! let topic = TopicId::new("physics201");
    //! assert_eq!(topic.to_string(), "physics201");
    //! assert_eq!(MessageId::default().to_string(), "0");
    //! ```

    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct TopicId(String);

    impl TopicId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for TopicId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for TopicId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for TopicId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }

    /// Ordinal identifier for transcript messages, unique within one transcript.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    pub struct MessageId(u64);

    impl MessageId {
        pub fn new(value: u64) -> Self {
            Self(value)
        }

        pub fn value(self) -> u64 {
            self.0
        }

        pub fn next(self) -> Self {
            Self(self.0.saturating_add(1))
        }
    }

    impl Display for MessageId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl From<u64> for MessageId {
        fn from(value: u64) -> Self {
            Self(value)
        }
    }
}

pub use context::{MessageId, TopicId};
pub use future::BoxFuture;
