//! zapi CLI - manage Zephyr for Jira test cycles, executions and folders

use clap::Parser;

mod cli;
mod models;
mod output;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, CycleCommands, ExecutionCommands, FolderCommands};
use zapi::error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Route logs to stderr; `--debug` raises the default level, `RUST_LOG` still wins
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);
    log::debug!("Debug mode enabled");

    match cli.command {
        Commands::Init {
            base_url,
            username,
            api_token,
        } => cli::init::run(
            &opts,
            cli::init::InitArgs {
                base_url,
                username,
                api_token,
            },
        ),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("zapi version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Cycle(cycle_cmd) => match cycle_cmd {
            CycleCommands::List { filter } => cli::cycle::list(&opts, &filter).await,
            CycleCommands::Create {
                name,
                project,
                version,
                description,
                build,
                environment,
                start_date,
                end_date,
            } => {
                let new = cli::cycle::NewCycle {
                    name,
                    project_id: project,
                    version_id: version,
                    description,
                    build,
                    environment,
                    start_date,
                    end_date,
                };
                cli::cycle::create(&opts, new).await
            }
        },
        Commands::Execution(exe_cmd) => match exe_cmd {
            ExecutionCommands::Create {
                issue,
                project,
                cycle,
                version,
                folder,
                assignee,
            } => {
                let new = cli::execution::NewExecution {
                    issue_id: issue,
                    project_id: project,
                    cycle_id: cycle,
                    version_id: version,
                    folder_id: folder,
                    assignee,
                };
                cli::execution::create(&opts, new).await
            }
            ExecutionCommands::Execute {
                id,
                status,
                assignee,
            } => cli::execution::execute(&opts, id, status, assignee).await,
        },
        Commands::Folder(folder_cmd) => match folder_cmd {
            FolderCommands::List { cycle_id, filter } => {
                cli::folder::list(&opts, cycle_id, &filter).await
            }
            FolderCommands::Create {
                name,
                cycle,
                project,
                version,
                description,
            } => {
                let new = cli::folder::NewFolder {
                    name,
                    cycle_id: cycle,
                    project_id: project,
                    version_id: version,
                    description,
                };
                cli::folder::create(&opts, new).await
            }
        },
        Commands::Completions { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
