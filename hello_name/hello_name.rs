use anyhow::Result;
use clap::Parser;
use log::debug;
use std::io::{self, Write};

/// A simple hello world script that greets a given name.
#[derive(Parser, Debug)]
#[command(
    name = "hello_name",
    about,
    long_about = None,
    disable_version_flag = true,
    args_override_self = true
)]
struct Args {
    #[arg(
        long,
        default_value = "World",
        allow_negative_numbers = true,
        help = "The name to greet."
    )]
    name: String,
}

fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

fn run(args: &Args, out: &mut impl Write) -> io::Result<()> {
    debug!("greeting {:?}", args.name);
    writeln!(out, "{}", greeting(&args.name))?;
    out.flush()
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())?;
    Ok(())
}
