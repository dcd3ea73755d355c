//! The impls and functions
//!
use std::time::Instant;
use log::*;
use regex::Regex;
use reqwest::blocking::Client;
use crate::config::ClusterConfig;
use crate::checks::{Check, HealthReportCheck, MetricsCheck, QuorumCheck, RunResult};
use crate::report::{CheckOutcome, ReportLine, Verdict};
use crate::{exhibitor, health_report, mesos_metrics};

pub const DONE_MESSAGE: &str = "GET System Health: Done.";

impl Check for QuorumCheck {
    fn name(&self) -> &'static str {
        exhibitor::CHECK_NAME
    }
    fn run(
        &self,
        client: &Client,
        config: &ClusterConfig,
    ) -> CheckOutcome
    {
        exhibitor::check_quorum(client, config)
    }
}

impl Check for MetricsCheck {
    fn name(&self) -> &'static str {
        mesos_metrics::CHECK_NAME
    }
    fn run(
        &self,
        client: &Client,
        config: &ClusterConfig,
    ) -> CheckOutcome
    {
        mesos_metrics::check_metrics(client, config)
    }
}

impl Check for HealthReportCheck {
    fn name(&self) -> &'static str {
        health_report::CHECK_NAME
    }
    fn run(
        &self,
        client: &Client,
        config: &ClusterConfig,
    ) -> CheckOutcome
    {
        health_report::check_health_report(client, config, &self.unit_filter)
    }
}

/// The checks of a probe, in the order they must run.
pub fn default_checks(
    unit_filter: Regex,
) -> Vec<Box<dyn Check>>
{
    vec![
        Box::new(QuorumCheck),
        Box::new(MetricsCheck),
        Box::new(HealthReportCheck { unit_filter }),
    ]
}

pub fn run_checks(
    checks: &[Box<dyn Check>],
    client: &Client,
    config: &ClusterConfig,
    strict: bool,
) -> RunResult
{
    let mut outcomes = Vec::with_capacity(checks.len());

    for check in checks {
        info!("begin check: {}", check.name());
        let timer = Instant::now();

        let outcome = check.run(client, config);
        outcome.print();

        info!("end check: {}, verdict: {:?}, {:?}", outcome.name, outcome.verdict, timer.elapsed());

        if outcome.is_fatal() {
            warn!("check {} failed fatally, skipping remaining checks", outcome.name);
            outcomes.push(outcome);
            return RunResult { outcomes, completed: false, exit_code: 1 };
        }
        outcomes.push(outcome);
    }

    println!("\n{}\n", ReportLine::Info(DONE_MESSAGE.to_string()).render());

    let failed = outcomes.iter().filter(|r| r.verdict == Verdict::Failed).count();
    if failed > 0 {
        warn!("{} check(s) failed", failed);
    }
    let exit_code = if strict && failed > 0 { 1 } else { 0 };

    RunResult { outcomes, completed: true, exit_code }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FixedCheck {
        verdict: Verdict,
        runs: Rc<Cell<usize>>,
    }

    impl Check for FixedCheck {
        fn name(&self) -> &'static str {
            "fixed"
        }
        fn run(
            &self,
            _client: &Client,
            _config: &ClusterConfig,
        ) -> CheckOutcome
        {
            self.runs.set(self.runs.get() + 1);
            let mut outcome = CheckOutcome::new("fixed");
            match self.verdict {
                Verdict::Passed => outcome.info("fine"),
                Verdict::Failed => outcome.error("not fine"),
                Verdict::Fatal => outcome.fatal("stop"),
            }
            outcome
        }
    }

    fn config() -> ClusterConfig {
        ClusterConfig::from_lookup(|name| match name {
            "DCOS_IP" => Some(String::from("127.0.0.1")),
            "NUM_MASTERS" => Some(String::from("1")),
            "DCOS_TOKEN" => Some(String::from("abc")),
            _ => None,
        }).unwrap()
    }

    fn checks(verdicts: &[Verdict], runs: &Rc<Cell<usize>>) -> Vec<Box<dyn Check>> {
        verdicts
            .iter()
            .map(|verdict| Box::new(FixedCheck { verdict: *verdict, runs: runs.clone() }) as Box<dyn Check>)
            .collect()
    }

    #[test]
    fn unit_all_passed() {
        let runs = Rc::new(Cell::new(0));
        let result = run_checks(&checks(&[Verdict::Passed, Verdict::Passed, Verdict::Passed], &runs), &Client::new(), &config(), false);
        assert_eq!(runs.get(), 3);
        assert!(result.completed);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn unit_fatal_stops_the_run() {
        let runs = Rc::new(Cell::new(0));
        let result = run_checks(&checks(&[Verdict::Fatal, Verdict::Passed, Verdict::Passed], &runs), &Client::new(), &config(), false);
        assert_eq!(runs.get(), 1);
        assert_eq!(result.outcomes.len(), 1);
        assert!(!result.completed);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn unit_failed_continues_and_exits_zero() {
        let runs = Rc::new(Cell::new(0));
        let result = run_checks(&checks(&[Verdict::Passed, Verdict::Failed, Verdict::Failed], &runs), &Client::new(), &config(), false);
        assert_eq!(runs.get(), 3);
        assert!(result.completed);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn unit_failed_with_strict_exits_one() {
        let runs = Rc::new(Cell::new(0));
        let result = run_checks(&checks(&[Verdict::Passed, Verdict::Failed, Verdict::Passed], &runs), &Client::new(), &config(), true);
        assert_eq!(runs.get(), 3);
        assert!(result.completed);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn unit_default_checks_order() {
        let checks = default_checks(Regex::new(".*").unwrap());
        let names: Vec<&str> = checks.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["quorum", "metrics", "health report"]);
    }
}
