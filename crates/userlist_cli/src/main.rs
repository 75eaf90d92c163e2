//! CLI entry point.
//!
//! # Responsibility
//! - Drive the observable user store and the accumulator from the shell.
//! - Keep stdout output deterministic; diagnostics go to the log files.

use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use userlist_core::{
    default_log_level, init_logging, saved_name_line, saved_occupation_line, Accumulator,
    NewUser, UserList,
};

#[derive(Parser)]
#[command(name = "userlist")]
#[command(about = "Observable user list and file accumulator demos")]
#[command(version)]
struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logging is off when unset
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save two users into the seeded store and print listener output
    Users {
        /// Print every stored record as JSON after the saves
        #[arg(long)]
        json: bool,
    },
    /// Add the integer stored in a file to a running total
    Accumulate {
        /// File holding a decimal integer
        #[arg(long, default_value = "num.txt")]
        source: PathBuf,

        /// Number of accumulations to run
        #[arg(long, default_value_t = 2)]
        times: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("userlist: {err}");
            return ExitCode::FAILURE;
        }
    }

    match cli.command {
        Command::Users { json } => run_users(json),
        Command::Accumulate { source, times } => run_accumulate(source, times),
    }
}

fn run_users(json: bool) -> ExitCode {
    let mut users = UserList::seeded_demo();
    users.on_saved(|user| println!("{}", saved_name_line(user)));
    users.on_saved(|user| println!("{}", saved_occupation_line(user)));

    users.save(NewUser::new("Jason Frick", "Project Manager"));
    println!("<...next user...>");
    users.save(NewUser::new("Alyssa Bradley", "Sr. SCRUM Master"));

    if json {
        match serde_json::to_string_pretty(users.all()) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("userlist: failed to render users: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn run_accumulate(source: PathBuf, times: u32) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("userlist: failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(async move {
        let mut accumulator = Accumulator::new(source);
        let mut failures = 0_u32;

        for _ in 0..times {
            accumulator
                .add_from_source_then(|outcome| match outcome {
                    Ok(total) => println!("{total}"),
                    Err(err) => {
                        failures += 1;
                        eprintln!("userlist: {err}");
                    }
                })
                .await;
        }

        info!(
            "event=accumulate_run module=cli status=done runs={} failures={} total={}",
            times,
            failures,
            accumulator.total()
        );

        if failures == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    })
}
