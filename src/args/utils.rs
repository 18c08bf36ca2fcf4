//! Small helpers shared by command-line handling.

/// What: Determine the log level from command-line arguments.
///
/// Output:
/// - `debug` with `--verbose`, otherwise the `--log-level` value.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
