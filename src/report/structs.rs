//! The structs
//!
/// A single line of probe output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// The compact json echo of a fetched document, already wrapped in its section key.
    Output(String),
    Info(String),
    Error(String),
    Plain(String),
}

/// What the run should do after a check finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    /// The check found a problem, the run continues.
    Failed,
    /// The check found a problem that ends the run with exit code 1.
    Fatal,
}

#[derive(Debug)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub verdict: Verdict,
    pub lines: Vec<ReportLine>,
}
