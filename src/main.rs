use clap::Parser;
use semester_planner::utils::{logger, validation::Validate};
use semester_planner::{
    hydrate, CliConfig, ConfigProvider, HttpPlanService, PlanEngine, PlanService, PlanStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting semester-planner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let service = HttpPlanService::new(config.api_base_url(), config.program());
    let engine = PlanEngine::with_max_credits(service, config.max_credits_per_semester());
    let mut store = PlanStore::new();

    engine.load_plan(&mut store).await?;

    let cap = config.max_credits_per_semester();
    for sem in store.semesters() {
        println!(
            "{:<16} {:>5.1}/{:.0} credits  {} classes",
            sem.name,
            sem.total_credits(),
            cap,
            sem.classes.len()
        );
        for class in &sem.classes {
            println!("  {:<10} {}  ({} cr)", class.code, class.title, class.credits);
        }
    }

    // Requirement progress for the first semester's order, if any.
    if let Some(first) = store.semesters().first() {
        let groups = engine
            .service()
            .search_requirements("", &config.current_term, first.order)
            .await?;
        for group in hydrate(&groups, &store) {
            println!(
                "{:<32} {}/{} planned ({:.0}%)",
                group.title,
                group.planned_count,
                group.required_count,
                group.progress() * 100.0
            );
        }
    }

    Ok(())
}
