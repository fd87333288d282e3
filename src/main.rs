//! ladder - engineering leveling matrix CLI

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ladder::LadderError;
use ladder::app::{AppContext, resolve_config, robot_mode};
use ladder::cli::output::{emit_robot, robot_error};
use ladder::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::Completions(args) = &cli.command {
        init_tracing(&cli, cli.robot);
        return finish(ladder::cli::commands::completions::run(args), cli.robot);
    }

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            init_tracing(&cli, cli.robot);
            return report(&err, cli.robot);
        }
    };
    let robot = robot_mode(&cli, &config);
    init_tracing(&cli, robot);

    let ctx = match AppContext::open(&cli, config) {
        Ok(ctx) => ctx,
        Err(err) => return report(&err, robot),
    };
    finish(ladder::cli::commands::run(&ctx, &cli.command), ctx.robot_mode)
}

fn finish(result: ladder::Result<()>, robot: bool) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, robot),
    }
}

fn report(err: &LadderError, robot: bool) -> ExitCode {
    if robot {
        // Robot mode: JSON error envelope on stdout
        if emit_robot(&robot_error(err)).is_err() {
            eprintln!("Error: {err}");
        }
    } else {
        eprintln!("Error: {err}");
        eprintln!("Hint: {}", err.code().suggestion());
    }
    ExitCode::FAILURE
}

fn init_tracing(cli: &Cli, robot: bool) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,ladder=info",
        1 => "info,ladder=debug",
        2 => "debug,ladder=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Human-readable logging
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
