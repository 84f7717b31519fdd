use crate::demo::{run_demo, run_recommend, DemoArgs, RecommendArgs};
use crate::demo::{run_break_even, run_irr, run_npv, BreakEvenArgs, IrrArgs, NpvArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use innovation_edu::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Innovation Education Service",
    about = "Serve and demonstrate the business-model recommendation and finance teaching tools",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank the catalog against an archetype from the command line
    Recommend(RecommendArgs),
    /// Run one of the financial teaching calculators
    Finance {
        #[command(subcommand)]
        command: FinanceCommand,
    },
    /// Run an end-to-end CLI demo covering recommendations and the solver
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum FinanceCommand {
    /// Net present value of a cash-flow schedule
    Npv(NpvArgs),
    /// Internal rate of return via bisection
    Irr(IrrArgs),
    /// Break-even units and revenue
    BreakEven(BreakEvenArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Finance {
            command: FinanceCommand::Npv(args),
        } => run_npv(args),
        Command::Finance {
            command: FinanceCommand::Irr(args),
        } => run_irr(args),
        Command::Finance {
            command: FinanceCommand::BreakEven(args),
        } => run_break_even(args),
        Command::Demo(args) => run_demo(args),
    }
}
