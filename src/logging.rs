use tracing::Level;

/// Installs the global fmt subscriber. Lambda stamps every log line itself
/// and CloudWatch shows escape codes verbatim, so timestamps and ANSI colours
/// are both switched off.
pub fn init_logger(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}
