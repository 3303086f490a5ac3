use vpr_types::{HrefError, TextError};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("invalid link text: {0}")]
    Text(#[from] TextError),
    #[error("invalid link href: {0}")]
    Href(#[from] HrefError),
    #[error("unknown link set: {0}")]
    UnknownLinkSet(String),
}

pub type LinkResult<T> = std::result::Result<T, LinkError>;
