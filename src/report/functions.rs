//! The impls and functions
//!
use std::fmt;
use colored::Colorize;
use serde_json::Value;
use crate::report::{CheckOutcome, ReportLine, Verdict};

impl ReportLine {
    /// Wrap `document` as `{"<section>": document}` for the `**OUTPUT:` echo.
    pub fn output(
        section: &str,
        document: &Value,
    ) -> Self
    {
        let mut wrapped = serde_json::Map::new();
        wrapped.insert(section.to_string(), document.clone());
        ReportLine::Output(Value::Object(wrapped).to_string())
    }
    /// The line as it is printed to a terminal, with the markers coloured.
    pub fn render(&self) -> String {
        match self {
            ReportLine::Output(json) => format!("\n\n{}\n{}", "**OUTPUT:".bold(), json),
            ReportLine::Info(message) => format!("{} {}", "**INFO:".green(), message),
            ReportLine::Error(message) => format!("{} {}", "**ERROR:".red(), message),
            ReportLine::Plain(message) => message.to_string(),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Output(json) => write!(f, "\n\n**OUTPUT:\n{}", json),
            ReportLine::Info(message) => write!(f, "**INFO: {}", message),
            ReportLine::Error(message) => write!(f, "**ERROR: {}", message),
            ReportLine::Plain(message) => write!(f, "{}", message),
        }
    }
}

impl CheckOutcome {
    pub fn new(name: &'static str) -> Self {
        CheckOutcome {
            name,
            verdict: Verdict::Passed,
            lines: Vec::new(),
        }
    }
    pub fn info(&mut self, message: impl Into<String>) {
        self.lines.push(ReportLine::Info(message.into()));
    }
    pub fn plain(&mut self, message: impl Into<String>) {
        self.lines.push(ReportLine::Plain(message.into()));
    }
    pub fn output(&mut self, section: &str, document: &Value) {
        self.lines.push(ReportLine::output(section, document));
    }
    /// Report an error that does not stop the run.
    pub fn error(&mut self, message: impl Into<String>) {
        self.lines.push(ReportLine::Error(message.into()));
        if self.verdict == Verdict::Passed {
            self.verdict = Verdict::Failed;
        }
    }
    /// Report an error that stops the run.
    pub fn fatal(&mut self, message: impl Into<String>) {
        self.lines.push(ReportLine::Error(message.into()));
        self.verdict = Verdict::Fatal;
    }
    pub fn is_fatal(&self) -> bool {
        self.verdict == Verdict::Fatal
    }
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line.render());
        }
    }
    /// The uncoloured text of all lines.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
