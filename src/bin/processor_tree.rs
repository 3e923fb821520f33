use callstack_fixtures::utils::{logger, validation::Validate};
use callstack_fixtures::{CliConfig, FixtureEngine, ProcessorProgram, StdoutConsole};
use clap::Parser;

#[derive(Parser)]
#[command(name = "processor-tree")]
#[command(about = "Struct and generics call-tree fixture")]
struct Args {
    #[command(flatten)]
    common: CliConfig,

    /// Processor name used as the output prefix
    #[arg(long)]
    name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.common.verbose);

    let loaded = args.common.validate().and_then(|_| {
        let mut config = args.common.load()?;
        if let Some(name) = &args.name {
            tracing::info!("Processor name overridden to: {}", name);
            config.processor.name = name.clone();
            config.validate()?;
        }
        Ok(config)
    });

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let engine = FixtureEngine::new(ProcessorProgram::new(config.processor));
    engine.run(&mut StdoutConsole::new())?;

    Ok(())
}
