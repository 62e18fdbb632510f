use nim_engine::EngineError;

/// Errors that end the program
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}
