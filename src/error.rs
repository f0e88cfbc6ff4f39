// Error types for attaching files to Jira issues.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("error reading attachment, {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing form body: {0}")]
    Encoding(String),

    #[error("error sending request")]
    Network(#[source] reqwest::Error),

    #[error("failed to decode attachment response")]
    ResponseParse(#[source] serde_json::Error),

    #[error("failed to add attachment for unknown reason")]
    EmptyResponse,

    #[error("failed to add attachment, status_code={status} respbody={body}")]
    UploadRejected { status: u16, body: String },

    #[error("failed to add comment, status_code={status} respbody={body}")]
    CommentRejected { status: u16, body: String },

    #[error("{0}")]
    Argument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
