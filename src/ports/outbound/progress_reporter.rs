/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress and diagnostic output (e.g., to stderr)
/// so it never mixes with the report written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
