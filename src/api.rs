// API client module: a small blocking HTTP client for the two Jira REST
// calls this tool makes, uploading an attachment and posting a comment.

use crate::auth::Credentials;
use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::blocking::{multipart, Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Every request gives up after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const ATLASSIAN_TOKEN: &str = "X-Atlassian-Token";

/// Attachment metadata returned by the attachments endpoint. Only the
/// fields needed for the comment are decoded.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub content: String,
    pub filename: String,
}

/// Comment payload.
#[derive(Serialize, Debug)]
pub struct Comment {
    pub body: String,
}

/// Holds a reqwest blocking client, the base URL of the Jira instance and
/// the credentials sent with every request.
#[derive(Clone)]
pub struct JiraClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl JiraClient {
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("jiraattach/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Network)?;
        Ok(JiraClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.jira_url, config.credentials())
    }

    fn issue_url(&self, key: &str, resource: &str) -> String {
        format!("{}/rest/api/2/issue/{}/{}", self.base_url, key, resource)
    }

    /// Headers shared by both calls: basic auth and the XSRF opt-out.
    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&self.credentials.to_basic_auth())
            .map_err(|e| Error::Encoding(format!("invalid authorization header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ATLASSIAN_TOKEN, HeaderValue::from_static("nocheck"));
        Ok(headers)
    }

    fn post(&self, url: &str) -> Result<RequestBuilder> {
        Ok(self.client.post(url).headers(self.headers()?))
    }

    /// Upload the file at `path` to the issue and return the first
    /// attachment record the server reports.
    pub fn attach_file(&self, key: &str, path: &Path) -> Result<Attachment> {
        let form = file_form(path)?;
        let url = self.issue_url(key, "attachments");
        debug!(%url, boundary = form.boundary(), "uploading attachment");

        let res = self
            .post(&url)?
            .multipart(form)
            .send()
            .map_err(Error::Network)?;
        let status = res.status();
        if status != StatusCode::OK {
            let body = read_body(res)?;
            return Err(Error::UploadRejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = res.bytes().map_err(Error::Network)?;
        let attachments: Vec<Attachment> =
            serde_json::from_slice(&body).map_err(Error::ResponseParse)?;
        attachments.into_iter().next().ok_or(Error::EmptyResponse)
    }

    /// Post `message` as a new comment on the issue.
    pub fn comment(&self, key: &str, message: &str) -> Result<()> {
        let url = self.issue_url(key, "comment");
        debug!(%url, "posting comment");

        let payload = Comment {
            body: message.to_string(),
        };
        // `json` also sets `Content-Type: application/json`.
        let res = self
            .post(&url)?
            .json(&payload)
            .send()
            .map_err(Error::Network)?;
        let status = res.status();
        if status != StatusCode::CREATED {
            let body = read_body(res)?;
            return Err(Error::CommentRejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// Build the multipart form for an upload: one part named `file` holding
/// the file's bytes. The part's filename is the path exactly as given,
/// which is what Jira displays for the attachment.
pub fn file_form(path: &Path) -> Result<multipart::Form> {
    let open_error = |source: std::io::Error| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(open_error)?;
    let length = file.metadata().map_err(open_error)?.len();

    let part = multipart::Part::reader_with_length(file, length)
        .file_name(path.to_string_lossy().into_owned())
        .mime_str("application/octet-stream")
        .map_err(|e| Error::Encoding(e.to_string()))?;

    Ok(multipart::Form::new().part("file", part))
}

/// Text of the comment that links to a fresh attachment.
pub fn attachment_comment(attachment: &Attachment) -> String {
    format!(
        "File attached: [{}|{}]",
        attachment.filename, attachment.content
    )
}

fn read_body(res: Response) -> Result<String> {
    res.text().map_err(Error::Network)
}
