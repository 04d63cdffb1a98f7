fn main() -> anyhow::Result<()> {
    deepcopy_observability::init();

    let config = deepcopy_shootout::ShootoutConfig::from_env()?;
    tracing::info!(
        iterations = config.iterations,
        strategies = config.strategies.len(),
        "starting deep copy shootout"
    );

    let report = deepcopy_shootout::run(&config)?;

    print!("{report}");
    if config.report_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if let Some(fastest) = report.fastest() {
        tracing::info!(strategy = fastest.strategy.name(), "fastest strategy");
    }

    Ok(())
}
