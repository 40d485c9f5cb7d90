use crate::assess::{run_assess, run_schedule, AssessArgs, ScheduleArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use wws_rent_check::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "WWS Rent Check",
    about = "Score Dutch rental units under the WWS point system and check the legal maximum rent",
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
    /// Assess a housing unit described in a JSON file
    Assess(AssessArgs),
    /// Print the rent schedule in effect on a date
    Schedule(ScheduleArgs),
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
        Command::Assess(args) => run_assess(args),
        Command::Schedule(args) => run_schedule(args),
    }
}
