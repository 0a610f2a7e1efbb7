use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("no path between AS{src} and AS{dst}")]
    DisconnectedGraph { src: u32, dst: u32 },

    #[error("no link found between AS{from} and AS{to}")]
    NoEdgeFound { from: u32, to: u32 },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("unknown AS{0}")]
    UnknownAs(u32),

    #[error("path query from AS{0} to itself")]
    SelfLoop(u32),

    #[error("AS{0} added twice")]
    DuplicateAs(u32),

    #[error("link {0} added twice")]
    DuplicateLink(String),

    #[error("invalid link {id}: {reason}")]
    InvalidLink { id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, PathError>;
