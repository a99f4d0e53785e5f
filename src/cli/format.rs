//! Format output dispatch helpers

/// Dispatch output by format without repeating the match.
///
/// The json branch returns `Result<()>`; the human branch returns `()`.
///
/// ```rust,ignore
/// output_by_format_result!(format,
///     json => print_json(&value),
///     human => { println!("{}", order); }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}
