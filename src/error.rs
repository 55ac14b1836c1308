//! Errors of the host runner itself. Test failures are reported through the
//! exit status, not here.

#[derive(thiserror::Error, Debug)]
pub enum HostError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type HostResult<T> = Result<T, HostError>;
