//! Error types for wireval codecs.
//!
//! Errors in this crate stay internal to the codec pipeline: the public
//! [`Codec`](crate::Codec) trait converts every failure into a sentinel
//! result value plus a log line ("fail soft, log always"). The variants here
//! exist so the builder, parser, and markup layer can report precisely what
//! went wrong before the façade softens it.
//!
//! ## Error Categories
//!
//! - **Markup errors**: the lenient parse stage could not produce any tree
//! - **Structural errors**: no root element, nesting beyond the depth limit
//! - **Render errors**: the node tree could not be written out
//! - **Transcode errors**: a delegated codec (JSON, MessagePack) failed

use std::fmt;
use thiserror::Error;

/// Represents all possible errors inside the codec pipeline.
///
/// None of these cross the [`Codec`](crate::Codec) boundary; the façades
/// convert them into soft-failure values.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The markup parse stage could not produce a tree
    #[error("markup parse error: {0}")]
    Parse(String),

    /// The document contains no root element
    #[error("document has no root element")]
    NoRoot,

    /// Input nesting exceeded the recursion guard
    #[error("nesting exceeds the depth limit of {0} levels")]
    DepthLimit(usize),

    /// The node tree could not be rendered to markup text
    #[error("markup render error: {0}")]
    Render(String),

    /// A delegated codec failed to transcode a payload
    #[error("transcode error: {0}")]
    Transcode(String),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a markup parse error.
    pub fn parse<T: fmt::Display>(msg: T) -> Self {
        Error::Parse(msg.to_string())
    }

    /// Creates a render error.
    pub fn render<T: fmt::Display>(msg: T) -> Self {
        Error::Render(msg.to_string())
    }

    /// Creates a transcode error for a delegated codec failure.
    pub fn transcode<T: fmt::Display>(msg: T) -> Self {
        Error::Transcode(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wireval::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
