//! Runtime backed by the `docker` command-line client
//!
//! Every query spawns the binary with `--format '{{json .}}'` and decodes
//! one JSON object per output line. Children are killed when the calling
//! future is dropped, so an expired timeout never leaves a process behind.

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::process::Command;

use super::{ContainerRuntime, ContainerSummary, ImageSummary, RuntimeError};

const JSON_FORMAT: &str = "{{json .}}";

/// `docker ps` output row
#[derive(Debug, Deserialize)]
struct PsRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Image", default)]
    image: String,
}

/// `docker search` output row
#[derive(Debug, Deserialize)]
struct SearchRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "IsOfficial", default)]
    is_official: OfficialFlag,
}

/// Newer clients print "true"/"false", older ones "[OK]" or "", and
/// some emit a JSON bool.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OfficialFlag {
    Bool(bool),
    Text(String),
}

impl Default for OfficialFlag {
    fn default() -> Self {
        OfficialFlag::Bool(false)
    }
}

impl OfficialFlag {
    fn is_set(&self) -> bool {
        match self {
            OfficialFlag::Bool(b) => *b,
            OfficialFlag::Text(s) => {
                let s = s.trim();
                s.eq_ignore_ascii_case("true") || s == "[OK]"
            }
        }
    }
}

/// Docker CLI client
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: String,
}

impl DockerCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Run the binary with `args` and return its stdout
    async fn run(&self, args: &[&str]) -> Result<String, RuntimeError> {
        #[cfg(debug_assertions)]
        log::debug!("Running {} {}", self.binary, args.join(" "));

        let output = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => RuntimeError::NotFound(self.binary.clone()),
                _ => RuntimeError::Spawn(e.to_string()),
            })?;

        if !output.status.success() {
            return Err(RuntimeError::Failed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl ContainerRuntime for DockerCli {
    async fn list_containers(
        &self,
        include_stopped: bool,
    ) -> Result<Vec<ContainerSummary>, RuntimeError> {
        let mut args = vec!["ps", "--no-trunc", "--format", JSON_FORMAT];
        if include_stopped {
            args.push("--all");
        }

        let stdout = self.run(&args).await?;
        let rows: Vec<PsRow> = parse_json_lines(&stdout)?;
        Ok(rows
            .into_iter()
            .map(|row| ContainerSummary {
                id: row.id,
                image: row.image,
            })
            .collect())
    }

    async fn search_images(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<ImageSummary>, RuntimeError> {
        let limit = limit.to_string();
        let args = [
            "search",
            "--no-trunc",
            "--limit",
            limit.as_str(),
            "--format",
            JSON_FORMAT,
            term,
        ];

        let stdout = self.run(&args).await?;
        let rows: Vec<SearchRow> = parse_json_lines(&stdout)?;
        Ok(rows
            .into_iter()
            .map(|row| ImageSummary {
                is_official: row.is_official.is_set(),
                name: row.name,
                description: row.description,
            })
            .collect())
    }

    async fn ping(&self) -> Result<String, RuntimeError> {
        let stdout = self
            .run(&["info", "--format", "{{.ServerVersion}}"])
            .await?;
        Ok(stdout.trim().to_string())
    }
}

/// Decode one JSON value per non-blank line
fn parse_json_lines<T: DeserializeOwned>(stdout: &str) -> Result<Vec<T>, RuntimeError> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line).map_err(|e| RuntimeError::Decode(format!("{}: {}", e, line)))
        })
        .collect()
}

#[cfg(test)]
#[path = "docker_cli_tests.rs"]
mod docker_cli_tests;
