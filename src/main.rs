use std::{env, process};
use clap::Parser;
use dotenv::dotenv;
use log::*;
use dcos_health::config::{self, ClusterConfig, DEFAULT_EXHIBITOR_PORT, DEFAULT_HTTP_PORT, ENV_HOST, ENV_NUM_MASTERS, ENV_TOKEN};
use dcos_health::report::ReportLine;
use dcos_health::{checks, utility};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Opts {
    /// master to check, overrides DCOS_IP
    #[arg(long, value_name = "hostname")]
    host: Option<String>,
    /// expected number of masters, overrides NUM_MASTERS
    #[arg(long, value_name = "number")]
    num_masters: Option<String>,
    /// authentication token, overrides DCOS_TOKEN
    #[arg(long, value_name = "token")]
    token: Option<String>,
    /// port of the exhibitor endpoint
    #[arg(long, value_name = "port", default_value_t = DEFAULT_EXHIBITOR_PORT)]
    exhibitor_port: u16,
    /// port of the metrics and health report endpoints
    #[arg(long, value_name = "port", default_value_t = DEFAULT_HTTP_PORT)]
    port: u16,
    /// regex to select the units that are listed from the health report
    #[arg(long, value_name = "regex", default_value = ".*")]
    unit_match: String,
    /// exit with 1 when the metrics or health report check fails
    #[arg(long)]
    strict: bool,
    /// do not colour the INFO and ERROR markers
    #[arg(long)]
    no_color: bool,
}

fn exit_with_error(message: impl std::fmt::Display) -> ! {
    println!("{}", ReportLine::Error(message.to_string()).render());
    process::exit(1);
}

fn main()
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    dotenv().ok();
    let options = Opts::parse();
    if options.no_color {
        colored::control::set_override(false);
    }

    // command line options take precedence over the environment.
    let config = ClusterConfig::from_lookup(|name| {
        let option = match name {
            ENV_HOST => options.host.clone(),
            ENV_NUM_MASTERS => options.num_masters.clone(),
            ENV_TOKEN => options.token.clone(),
            _ => None,
        };
        option.or_else(|| env::var(name).ok())
    })
    .unwrap_or_else(|e| exit_with_error(e))
    .with_ports(options.exhibitor_port, options.port);
    info!("{:?}", config);

    let unit_filter = config::set_unit_filter(&options.unit_match).unwrap_or_else(|e| exit_with_error(e));
    let client = utility::build_client().unwrap_or_else(|e| exit_with_error(format!("{:#}", e)));

    let result = checks::run_checks(&checks::default_checks(unit_filter), &client, &config, options.strict);
    process::exit(result.exit_code);
}
