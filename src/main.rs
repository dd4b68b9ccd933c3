use titan_signals::{
    BinanceKlineSource,
    Cli, // The struct from lib.rs
    PipelineError,
    PipelineOutcome,
    run_pipeline,
    utils::time_utils::how_many_seconds_ago,
};

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. One pipeline run (blocking on the fetch)
    let rt = Runtime::new()?;
    let outcome = rt.block_on(run_pipeline(&BinanceKlineSource, &args.to_request()));

    // D. Report
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        if matches!(outcome, PipelineOutcome::NotReady(_)) {
            std::process::exit(1);
        }
        return Ok(());
    }

    match outcome {
        PipelineOutcome::Ready(snapshot) => {
            if let Some(last_ts) = snapshot.series.last_timestamp_ms() {
                log::info!("last candle opened {}s ago", how_many_seconds_ago(last_ts));
            }
            print!("{}", snapshot.render_report());
        }
        PipelineOutcome::NotReady(error) => {
            match &error {
                PipelineError::InvalidInstrument(_) => {
                    eprintln!("Error: {error}");
                }
                PipelineError::DataUnavailable(_) => {
                    eprintln!("⚠️  Data not ready: {error}");
                    eprintln!("Re-run to retry — nothing is retried automatically.");
                }
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
