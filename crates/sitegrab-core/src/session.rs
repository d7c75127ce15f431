//! Interactive fetch-and-save loop.
//!
//! Each line of input is one target: `http://<target>` is fetched once, the
//! status is reported, and a 200 body is saved under the output root. Any
//! failure for a target is reported on one line and the loop moves on.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::error::GrabError;
use crate::fetch::Fetch;
use crate::status::status_code_message;
use crate::storage::save_body;
use crate::url_model::{derive_output_path, file_name_hint, request_url};

pub const DEFAULT_PROMPT: &str = "Please input URL without the \"HTTPS://\" or \"HTTP://\": ";

/// Result of one target.
#[derive(Debug)]
pub enum Outcome {
    /// Status 200 and the body was written to `path`.
    Saved { status: u32, path: PathBuf },
    /// A response arrived with a status other than 200; nothing was written.
    NotOk { status: u32 },
    /// `status` is set when a response arrived before the failure (e.g. save failed).
    Failed {
        status: Option<u32>,
        error: GrabError,
    },
}

impl Outcome {
    pub fn status(&self) -> Option<u32> {
        match self {
            Outcome::Saved { status, .. } | Outcome::NotOk { status } => Some(*status),
            Outcome::Failed { status, .. } => *status,
        }
    }
}

pub struct Session<F> {
    fetcher: F,
    output_root: PathBuf,
    prompt: String,
}

impl<F: Fetch> Session<F> {
    /// An empty `output_root` means the current working directory.
    pub fn new(fetcher: F, output_root: impl Into<PathBuf>) -> Self {
        Session {
            fetcher,
            output_root: output_root.into(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Fetches one target and saves it on 200.
    pub fn grab(&mut self, target: &str) -> Outcome {
        let url = match request_url(target) {
            Ok(url) => url,
            Err(error) => return Outcome::Failed { status: None, error },
        };

        let response = match self.fetcher.get(&url) {
            Ok(r) => r,
            Err(e) => {
                return Outcome::Failed {
                    status: None,
                    error: e.into(),
                }
            }
        };

        let status = response.status;
        if status != 200 {
            return Outcome::NotOk { status };
        }

        let saved = derive_output_path(&response.final_url)
            .and_then(|output| save_body(&self.output_root, &output, &response.body));
        match saved {
            Ok(path) => {
                tracing::debug!(
                    final_url = %response.final_url,
                    file_name = file_name_hint(&response.final_url),
                    "saved"
                );
                Outcome::Saved { status, path }
            }
            Err(error) => Outcome::Failed {
                status: Some(status),
                error,
            },
        }
    }

    /// Prompts, reads and grabs until `input` reaches end of file.
    ///
    /// Only failures to read input or write to `out` end the loop early.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "{}", self.prompt).context("failed to write prompt")?;
            out.flush().context("failed to flush output")?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => {
                    writeln!(out).context("failed to write output")?;
                    tracing::info!("end of input, stopping");
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    writeln!(out, "Could not read input: {e}").context("failed to write output")?;
                    continue;
                }
                Err(e) => return Err(e).context("failed to read input"),
            }

            let target = line.trim();
            let outcome = self.grab(target);
            log_outcome(target, &outcome);
            report(&mut out, &outcome).context("failed to write output")?;
        }
    }
}

/// Prints the status line (when a response arrived) and one result line.
pub fn report<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    if let Some(status) = outcome.status() {
        writeln!(out, "Status Code: {}", status_code_message(status))?;
    }
    match outcome {
        Outcome::Saved { path, .. } => {
            writeln!(out, "File saved successfully: {}", path.display())
        }
        Outcome::NotOk { status } => {
            writeln!(out, "Request failed with status code {status}")
        }
        Outcome::Failed { error, .. } => match error {
            GrabError::InvalidUrl(reason) => writeln!(out, "Invalid target: {reason}"),
            GrabError::Transport(e) => writeln!(out, "An error occurred: {e}"),
            GrabError::OutputPath(_) | GrabError::Filesystem { .. } => {
                writeln!(out, "Could not save file: {error}")
            }
        },
    }
}

fn log_outcome(target: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Saved { status, path } => {
            tracing::info!(input = target, status, path = %path.display(), "grab saved");
        }
        Outcome::NotOk { status } => {
            tracing::info!(input = target, status, "grab got non-200 status");
        }
        Outcome::Failed { status, error } => {
            tracing::warn!(input = target, ?status, "grab failed: {}", error);
        }
    }
}
