/// Initializes the global logger on stderr.
/// Warnings are always shown; `verbose` adds per-row and per-file diagnostics.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();
}
