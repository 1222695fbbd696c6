use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error(
        "'{0}' binary not found in PATH.\n\nInstall Docker from: https://docs.docker.com/get-docker/"
    )]
    DockerNotFound(String),

    #[error("Couldn't check docker status, please make sure docker is running.\n{0}")]
    DaemonUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
