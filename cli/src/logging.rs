use flexi_logger::{opt_format, FlexiLoggerError, Logger, LoggerHandle};

/// Start logging to stderr, honouring `RUST_LOG` when set.
///
/// The returned handle must stay alive for as long as logging is wanted.
pub fn setup_logging(verbose: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    let fallback = if verbose { "debug" } else { "warn" };
    Logger::try_with_env_or_str(fallback)?
        .format(opt_format)
        .log_to_stderr()
        .start()
}
