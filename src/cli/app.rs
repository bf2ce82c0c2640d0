//! Main CLI application

use crate::cli::{parse_run_spec, RunSpec};
use crate::config::{load_target_store, ConfigSource, GLOBAL_CONFIG_FILE, LOCAL_CONFIG_FILE};
use crate::error::{ConfigError, TortoError};
use crate::runner::{Context, Target, VarSource, Variables, Verbosity};
use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell as CompletionShell;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

/// Build the clap command
pub fn build_command() -> Command {
    Command::new("torto")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run named command lists from torto.yml")
        .override_usage("torto [OPTIONS] <target> [NAME=value ...] [args...]")
        .after_help("Example: torto hello_world VAR1=test")
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .help("Target name, NAME=value assignments and extra arguments ($CMD)")
                .num_args(0..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("force")
                .short('f')
                .long("force")
                .help("Run all commands regardless of error")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Print the commands instead of running them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Project config file")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(LOCAL_CONFIG_FILE),
        )
        .arg(
            Arg::new("global-config")
                .short('g')
                .long("global-config")
                .value_name("FILE")
                .help("Global config file")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(GLOBAL_CONFIG_FILE),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List available targets")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Print a shell completion script")
                .value_parser(clap::value_parser!(CompletionShell)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no messages of our own")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// A variable as shown in the debug plan
#[derive(Debug, Serialize)]
struct PlannedVar<'a> {
    value: &'a str,
    source: VarSource,
}

/// Summary printed before the invocations in debug mode
#[derive(Debug, Serialize)]
struct RunPlan<'a> {
    target: &'a str,
    resolved_target: &'a str,
    force: bool,
    shell: &'a str,
    vars: BTreeMap<&'a str, PlannedVar<'a>>,
    commands: &'a [String],
}

impl<'a> RunPlan<'a> {
    fn new(target: &'a Target, vars: &'a Variables, ctx: &'a Context) -> Self {
        let vars = vars
            .names()
            .into_iter()
            .filter_map(|name| {
                vars.lookup(name)
                    .map(|(source, value)| (name, PlannedVar { value, source }))
            })
            .collect();

        RunPlan {
            target: &target.name,
            resolved_target: &target.display_name,
            force: ctx.force,
            shell: ctx.shell.program,
            vars,
            commands: &target.commands,
        }
    }
}

/// Log the config sources that could not be loaded
fn report_skipped(ctx: &Context, skipped: &[(ConfigSource, ConfigError)]) {
    for (source, err) in skipped {
        if err.is_not_found() {
            ctx.print_debug(&format!("No {} config: {}", source, err));
        } else {
            ctx.print_warning(&format!("Ignoring {} config: {}", source, err));
        }
    }
}

/// CLI application
pub struct App {
    matches: ArgMatches,
}

impl App {
    /// Parse the given command line (including the program name)
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        App {
            matches: build_command().get_matches_from(args),
        }
    }

    /// Run the application
    pub fn run(self) -> Result<(), TortoError> {
        let matches = self.matches;

        if let Some(shell) = matches.get_one::<CompletionShell>("completions") {
            clap_complete::generate(*shell, &mut build_command(), "torto", &mut io::stdout());
            return Ok(());
        }

        let ctx = Context::new()
            .with_force(matches.get_flag("force"))
            .with_debug(matches.get_flag("debug"))
            .with_verbosity(get_verbosity(&matches));

        let (local_path, global_path) = match (
            matches.get_one::<PathBuf>("config"),
            matches.get_one::<PathBuf>("global-config"),
        ) {
            (Some(local), Some(global)) => (local.clone(), global.clone()),
            _ => (
                PathBuf::from(LOCAL_CONFIG_FILE),
                PathBuf::from(GLOBAL_CONFIG_FILE),
            ),
        };

        if matches.get_flag("list") {
            let report = load_target_store(&local_path, &global_path)?;
            report_skipped(&ctx, &report.skipped);
            for name in report.store.target_names() {
                println!("{}", name);
            }
            return Ok(());
        }

        let args: Vec<String> = matches
            .get_many::<String>("args")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let spec: RunSpec = parse_run_spec(&args)?;

        let report = load_target_store(&local_path, &global_path)?;
        report_skipped(&ctx, &report.skipped);

        let target = Target::from_store(&report.store, &spec.target)?;
        let vars = spec.variables(report.store.into_vars());
        let target = target.resolve_name(&vars)?;

        if ctx.debug {
            print!("{}", serde_yaml::to_string(&RunPlan::new(&target, &vars, &ctx))?);
        }

        let run_report = target.execute(&vars, &ctx)?;

        if !run_report.is_clean() {
            ctx.print_warning(&format!(
                "{}: {} of {} commands failed (ignored by --force)",
                target.display_name,
                run_report.tolerated().count(),
                target.commands.len()
            ));
        }

        Ok(())
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), TortoError> {
    App::from_args(std::env::args_os()).run()
}
