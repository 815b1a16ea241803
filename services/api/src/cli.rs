use crate::demo::{run_demo, run_lenders_list, DemoArgs, LendersListArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use finfinder::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "FinFinder",
    about = "Demonstrate and run the FinFinder lender matching service from the command line",
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
    /// Browse the lender directory for stakeholder demos
    Lenders {
        #[command(subcommand)]
        command: LendersCommand,
    },
    /// Run an end-to-end CLI demo covering matching, recommendation, and checklists
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum LendersCommand {
    /// List directory lenders with optional filters
    List(LendersListArgs),
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
        Command::Lenders {
            command: LendersCommand::List(args),
        } => run_lenders_list(args),
        Command::Demo(args) => run_demo(args),
    }
}
