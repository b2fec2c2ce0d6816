#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid define '{0}': expected KEY=VALUE")]
    DefineParse(String),

    #[error("defines parse error: {0}")]
    ParseError(String),

    #[error("settings write error: {0}")]
    WriteError(String),

    #[error("could not determine working directory: {0}")]
    WorkingDir(String),
}
