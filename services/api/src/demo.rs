use crate::infra::{load_archetypes, load_catalog, parse_cash_flow};
use clap::{Args, ValueEnum};
use innovation_edu::config::ContentConfig;
use innovation_edu::error::AppError;
use innovation_edu::finance::{
    break_even, irr, npv, payback_period, CashFlow, CashFlowSchedule, IrrOptions, IrrResolution,
};
use innovation_edu::recommend::{
    ArchetypeSelector, CompositeWeights, RecommendationRequest, RecommendationService,
    ScoringPolicy, TagFilterMode, DEFAULT_TOP_N,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum PolicyArg {
    /// Count of shared tags
    #[default]
    Absolute,
    /// Shared tags divided by the record's tag count
    Normalized,
    /// Weighted overlap/success/maturity blend
    Composite,
}

impl From<PolicyArg> for ScoringPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Absolute => ScoringPolicy::AbsoluteOverlap,
            PolicyArg::Normalized => ScoringPolicy::NormalizedOverlap,
            PolicyArg::Composite => ScoringPolicy::Composite(CompositeWeights::default()),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Archetype name, e.g. "Digital & SaaS"
    pub(crate) archetype: String,
    /// Number of models to return
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub(crate) top_n: usize,
    /// Free-text search applied before ranking
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Required tag filter (repeatable)
    #[arg(long = "tag")]
    pub(crate) tags: Vec<String>,
    /// Require every --tag instead of any
    #[arg(long)]
    pub(crate) all_tags: bool,
    /// Scoring policy
    #[arg(long, value_enum, default_value_t = PolicyArg::Absolute)]
    pub(crate) policy: PolicyArg,
    /// Catalog data file (JSON, or CSV by extension); defaults to the built-in catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Archetype definitions JSON; defaults to the built-in taxonomy
    #[arg(long)]
    pub(crate) archetypes: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let content = ContentConfig {
        catalog_path: args.catalog,
        archetypes_path: args.archetypes,
    };
    let service = RecommendationService::new(
        Arc::new(load_catalog(&content)?),
        Arc::new(load_archetypes(&content)?),
    );

    let request = RecommendationRequest {
        archetype: ArchetypeSelector::Name(args.archetype),
        search: args.search,
        required_tags: args.tags.into_iter().collect(),
        tag_mode: if args.all_tags {
            TagFilterMode::All
        } else {
            TagFilterMode::Any
        },
        top_n: args.top_n,
        policy: args.policy.into(),
    };

    let recommendation = service.recommend(&request)?;
    render_recommendation(&recommendation.archetype_tags, recommendation.fallback);
    for entry in &recommendation.models {
        println!(
            "- {} [{}] score {:.3} | difficulty {}/5 | {}",
            entry.model.name,
            entry.model.id,
            entry.score,
            entry.model.difficulty,
            entry.model.maturity_level
        );
        if !entry.model.tags.is_empty() {
            println!("  tags: {}", entry.model.tags.join(", "));
        }
    }

    Ok(())
}

fn render_recommendation(archetype_tags: &[String], fallback: bool) {
    println!("Archetype tags: {}", archetype_tags.join(", "));
    if fallback {
        println!("No model overlaps these tags; showing the catalog front in original order.");
    }
}

#[derive(Args, Debug)]
pub(crate) struct NpvArgs {
    /// Cash flow as PERIOD:AMOUNT (repeatable), e.g. --cash-flow 0:-1000 --cash-flow 1:500
    #[arg(long = "cash-flow", required = true, value_parser = parse_cash_flow)]
    pub(crate) cash_flows: Vec<CashFlow>,
    /// Discount rate per period, e.g. 0.12
    #[arg(long)]
    pub(crate) rate: f64,
}

pub(crate) fn run_npv(args: NpvArgs) -> Result<(), AppError> {
    let schedule = CashFlowSchedule::new(args.cash_flows).map_err(AppError::Finance)?;
    let value = npv(&schedule, args.rate).map_err(AppError::Finance)?;

    println!("NPV at rate {:.4}: {:.2}", args.rate, value);
    match payback_period(&schedule) {
        Some(period) => println!("Payback period: {period}"),
        None => println!("Payback period: never recovered"),
    }
    Ok(())
}

#[derive(Args, Debug)]
pub(crate) struct IrrArgs {
    /// Cash flow as PERIOD:AMOUNT (repeatable)
    #[arg(long = "cash-flow", required = true, value_parser = parse_cash_flow)]
    pub(crate) cash_flows: Vec<CashFlow>,
    /// Absolute NPV convergence threshold
    #[arg(long, default_value_t = innovation_edu::finance::DEFAULT_IRR_TOLERANCE)]
    pub(crate) tolerance: f64,
    /// Bisection iteration cap
    #[arg(long, default_value_t = innovation_edu::finance::DEFAULT_IRR_MAX_ITERATIONS)]
    pub(crate) max_iterations: u32,
}

pub(crate) fn run_irr(args: IrrArgs) -> Result<(), AppError> {
    let schedule = CashFlowSchedule::new(args.cash_flows).map_err(AppError::Finance)?;
    let options = IrrOptions {
        tolerance: args.tolerance,
        max_iterations: args.max_iterations,
    };

    match irr(&schedule, options).map_err(AppError::Finance)? {
        IrrResolution::Converged { rate } => {
            println!("IRR: {:.4} ({:.2}% per period)", rate, rate * 100.0);
        }
        IrrResolution::Approximate { rate, residual } => {
            println!(
                "IRR (approximate, iteration cap reached): {:.4} with residual NPV {:.6}",
                rate, residual
            );
        }
        IrrResolution::NoSolution => {
            println!("No IRR between 0% and 500%: the cash flows never change NPV sign.");
        }
    }
    Ok(())
}

#[derive(Args, Debug)]
pub(crate) struct BreakEvenArgs {
    /// Fixed cost base per period
    #[arg(long)]
    pub(crate) fixed_costs: f64,
    /// Selling price per unit
    #[arg(long)]
    pub(crate) unit_price: f64,
    /// Variable cost per unit
    #[arg(long)]
    pub(crate) unit_variable_cost: f64,
}

pub(crate) fn run_break_even(args: BreakEvenArgs) -> Result<(), AppError> {
    let point = break_even(args.fixed_costs, args.unit_price, args.unit_variable_cost)
        .map_err(AppError::Finance)?;
    println!(
        "Break-even: {:.1} units ({:.2} revenue)",
        point.units, point.revenue
    );
    Ok(())
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Catalog data file (JSON or CSV); defaults to the built-in catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Skip the financial solver portion of the demo
    #[arg(long)]
    pub(crate) skip_finance: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let content = ContentConfig {
        catalog_path: args.catalog,
        archetypes_path: None,
    };
    let catalog = Arc::new(load_catalog(&content)?);
    let archetypes = Arc::new(load_archetypes(&content)?);
    let service = RecommendationService::new(catalog.clone(), archetypes.clone());

    println!("Business model recommendation demo");
    println!("Catalog: {} models\n", catalog.len());

    for archetype in archetypes.iter() {
        let request = RecommendationRequest::for_archetype(archetype.name.clone());
        let recommendation = service.recommend(&request)?;
        println!("{}", archetype.name);
        for entry in &recommendation.models {
            println!(
                "  - {} (score {:.0}, difficulty {}/5)",
                entry.model.name, entry.score, entry.model.difficulty
            );
        }
    }

    if args.skip_finance {
        return Ok(());
    }

    println!("\nFinancial solver demo");
    let schedule = demo_schedule()?;
    let baseline = npv(&schedule, 0.12).map_err(AppError::Finance)?;
    println!("NPV at 12%: {:.2}", baseline);

    match irr(&schedule, IrrOptions::default()).map_err(AppError::Finance)? {
        IrrResolution::Converged { rate } => println!("IRR: {:.2}%", rate * 100.0),
        IrrResolution::Approximate { rate, .. } => println!("IRR (approx): {:.2}%", rate * 100.0),
        IrrResolution::NoSolution => println!("IRR: no solution in range"),
    }

    match payback_period(&schedule) {
        Some(period) => println!("Payback period: {period}"),
        None => println!("Payback period: never recovered"),
    }

    let point = break_even(10_000.0, 25.0, 15.0).map_err(AppError::Finance)?;
    println!(
        "Break-even at $25 price / $15 unit cost / $10k fixed: {:.0} units",
        point.units
    );

    Ok(())
}

fn demo_schedule() -> Result<CashFlowSchedule, AppError> {
    CashFlowSchedule::from_pairs([(0, -1000.0), (1, 500.0), (2, 700.0)]).map_err(AppError::Finance)
}
