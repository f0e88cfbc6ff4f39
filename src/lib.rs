// Library root
// -----------
// The binary (`main.rs`) only parses arguments, sets up logging and calls
// `run::run`; everything else lives here so it can be tested directly.
//
// Module responsibilities:
// - `api`: the Jira REST calls (attachment upload, comment) and the
//   multipart form for the upload.
// - `auth`: basic-auth credentials from the config `auth` string.
// - `cli`: command line parsing.
// - `config`: loading `config.json`.
// - `run`: sequencing a whole run.
// - `ui`: spinner shown while requests are in flight.
pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod run;
pub mod ui;

pub use api::{Attachment, JiraClient};
pub use error::{Error, Result};
pub use run::{run, Invocation};
