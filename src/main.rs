use anyhow::Context;
use clap::{Parser, Subcommand};
use creational_patterns::{
    BodyStyle, CarKind, DemoConfig, DemoStep, FactoryVia,
    adapters::{RecordingConsole, StdoutConsole},
    application::DemoRunner,
    factories::Factories,
    logging,
};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "creational-patterns",
    about = "Factory Method and Abstract Factory walkthroughs",
    version
)]
struct CliArgs {
    #[arg(
        long,
        env = "CREATIONAL_PATTERNS_CONFIG",
        value_name = "FILE",
        help = "TOML file listing the demo steps to run (used by `run` only)",
        global = true
    )]
    config: Option<PathBuf>,

    #[arg(
        long,
        help = "Buffer product output and print it as a numbered transcript",
        global = true
    )]
    capture: bool,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the configured steps, or the full walkthrough when no config is given
    Run,
    /// Run the Factory Method client with one car factory
    FactoryMethod {
        #[arg(value_name = "CAR", help = "mastodon or rhino")]
        car: CarKind,

        #[arg(
            long,
            value_name = "VIA",
            default_value_t = FactoryVia::Selector,
            help = "How to obtain the factory: selector or direct"
        )]
        via: FactoryVia,

        #[arg(
            long,
            conflicts_with = "via",
            help = "Shorthand for --via direct"
        )]
        direct: bool,
    },
    /// Run the Abstract Factory client; omit STYLE to pass no factory
    AbstractFactory {
        #[arg(value_name = "STYLE", help = "sedan or hatchback")]
        style: Option<BodyStyle>,
    },
    /// List the selector keys of both examples
    List,
}

/// Maps a parsed subcommand to the steps it runs. `List` has no steps.
fn demo_config(command: Command, config: Option<&Path>) -> anyhow::Result<Option<DemoConfig>> {
    if let (Some(path), false) = (config, matches!(command, Command::Run)) {
        tracing::warn!(
            config = %path.display(),
            "--config only applies to `run`; ignoring it"
        );
    }

    let config = match command {
        Command::Run => match config {
            Some(path) => DemoConfig::load(path)
                .with_context(|| format!("loading demo config {}", path.display()))?,
            None => DemoConfig::default(),
        },
        Command::FactoryMethod { car, via, direct } => {
            let via = if direct { FactoryVia::Direct } else { via };
            DemoConfig::single(DemoStep::FactoryMethod { car, via })
        }
        Command::AbstractFactory { style } => {
            DemoConfig::single(DemoStep::AbstractFactory { style })
        }
        Command::List => return Ok(None),
    };
    Ok(Some(config))
}

fn main() -> anyhow::Result<()> {
    let cli = CliArgs::parse();
    logging::init(logging::filter_for_verbosity(cli.verbose));

    let command = cli.command.unwrap_or(Command::Run);
    let Some(config) = demo_config(command, cli.config.as_deref())? else {
        let factories = Factories::new();
        println!("factory-method:   {}", factories.car_keys().join(", "));
        println!("abstract-factory: {}", factories.family_keys().join(", "));
        return Ok(());
    };

    if cli.capture {
        let runner = DemoRunner::new(RecordingConsole::new());
        let summary = runner.run(&config)?;
        for (index, line) in runner.console().lines().iter().enumerate() {
            println!("{:>3}  {}", index + 1, line);
        }
        tracing::info!(steps = summary.steps, lines = summary.lines, "run complete");
    } else {
        let runner = DemoRunner::new(StdoutConsole::new());
        let summary = runner.run(&config)?;
        tracing::info!(steps = summary.steps, lines = summary.lines, "run complete");
    }

    Ok(())
}
