// Orchestration of a single run: load config, upload, then comment.

use crate::api::{attachment_comment, Attachment, JiraClient};
use crate::config::Config;
use crate::error::Result;
use crate::ui::with_spinner;
use std::path::PathBuf;
use tracing::{info, warn};

/// Everything a run needs from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config_path: PathBuf,
    pub key: String,
    pub file_path: PathBuf,
    pub no_comment: bool,
}

/// Attach the file and, unless disabled, comment with a link to it.
///
/// A failed comment does not remove the attachment that was already
/// created.
pub fn run(invocation: &Invocation) -> Result<Attachment> {
    let config = Config::load(&invocation.config_path)?;
    let client = JiraClient::from_config(&config)?;
    attach_and_comment(&client, invocation)
}

pub fn attach_and_comment(client: &JiraClient, invocation: &Invocation) -> Result<Attachment> {
    let key = invocation.key.as_str();
    let attachment = with_spinner("Uploading attachment...", || {
        client.attach_file(key, &invocation.file_path)
    })?;
    info!(key, filename = %attachment.filename, content = %attachment.content, "file attached");

    if invocation.no_comment {
        return Ok(attachment);
    }

    let message = attachment_comment(&attachment);
    if let Err(err) = with_spinner("Adding comment...", || client.comment(key, &message)) {
        warn!(key, filename = %attachment.filename, "attachment created but comment failed");
        return Err(err);
    }
    info!(key, "comment added");
    Ok(attachment)
}
