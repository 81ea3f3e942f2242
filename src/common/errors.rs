use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Agenda item id {0:?} is declared more than once")]
    DuplicateAgendaId(String),

    #[error("Contact channel {0} must not be empty")]
    EmptyContactChannel(&'static str),

    #[error("Section {0} needs at least one entry")]
    EmptySection(&'static str),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid bind address {0:?}")]
    InvalidBindAddr(String),

    #[error("Site root {0} does not exist")]
    MissingSiteRoot(std::path::PathBuf),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}
