use thiserror::Error;

/// The feed text could not be turned into a channel record.
#[derive(Debug, Error)]
pub enum MalformedFeed {
    #[error("malformed feed: {0}")]
    Syntax(#[from] roxmltree::Error),
    #[error("No channel found in the RSS feed")]
    NoChannel,
}
