use callstack_fixtures::utils::{logger, validation::Validate};
use callstack_fixtures::{CallTreeProgram, CliConfig, FixtureEngine, StdoutConsole};
use clap::Parser;

#[derive(Parser)]
#[command(name = "callstack-fixtures")]
#[command(about = "Free-function call-tree fixture")]
struct Args {
    #[command(flatten)]
    common: CliConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Args::parse().common;

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.validate().and_then(|_| cli.load()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let engine = FixtureEngine::new(CallTreeProgram::new(config.call_tree));
    engine.run(&mut StdoutConsole::new())?;

    Ok(())
}
