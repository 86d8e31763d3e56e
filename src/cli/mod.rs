//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod cycle;
pub mod execution;
pub mod folder;
pub mod init;
pub mod status;

pub use args::{ListFilterArgs, OutputFormat};
pub use context::CommandContext;

/// zapi - command-line client for Zephyr for Jira test cycles, executions and folders
#[derive(Parser, Debug)]
#[command(name = "zapi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "ZAPI_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "ZAPI_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ZAPI_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize zapi configuration
    Init {
        /// Jira base URL (prompted if omitted)
        #[arg(long)]
        base_url: Option<String>,

        /// Jira username (prompted if omitted)
        #[arg(long)]
        username: Option<String>,

        /// Jira API token (prompted if omitted)
        #[arg(long)]
        api_token: Option<String>,
    },

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Manage test cycles
    #[command(subcommand)]
    Cycle(CycleCommands),

    /// Manage test executions
    #[command(subcommand)]
    Execution(ExecutionCommands),

    /// Manage cycle folders
    #[command(subcommand)]
    Folder(FolderCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Cycle subcommands
#[derive(Subcommand, Debug)]
pub enum CycleCommands {
    /// List cycles of a project/version
    List {
        #[command(flatten)]
        filter: ListFilterArgs,
    },

    /// Create a cycle
    Create {
        /// Cycle name
        #[arg(long)]
        name: String,

        /// Jira project ID
        #[arg(long)]
        project: i64,

        /// Jira version ID (-1 for Unscheduled)
        #[arg(long, allow_negative_numbers = true)]
        version: i64,

        /// Cycle description
        #[arg(long)]
        description: Option<String>,

        /// Build under test
        #[arg(long)]
        build: Option<String>,

        /// Environment under test
        #[arg(long)]
        environment: Option<String>,

        /// Start date in the Jira date format (e.g. 12/Mar/19)
        #[arg(long)]
        start_date: Option<String>,

        /// End date in the Jira date format
        #[arg(long)]
        end_date: Option<String>,
    },
}

/// Execution subcommands
#[derive(Subcommand, Debug)]
pub enum ExecutionCommands {
    /// Add an issue to a cycle as a new execution
    Create {
        /// Jira issue (test) ID
        #[arg(long)]
        issue: i64,

        /// Jira project ID
        #[arg(long)]
        project: i64,

        /// Cycle ID (-1 for ad hoc)
        #[arg(long, allow_negative_numbers = true)]
        cycle: i64,

        /// Jira version ID (-1 for Unscheduled)
        #[arg(long, allow_negative_numbers = true)]
        version: Option<i64>,

        /// Folder ID inside the cycle
        #[arg(long)]
        folder: Option<i64>,

        /// Assignee username
        #[arg(long)]
        assignee: Option<String>,
    },

    /// Set the status of an execution
    Execute {
        /// Execution ID
        id: i64,

        /// Status code (e.g. 1 = pass, 2 = fail, -1 = unexecuted)
        #[arg(long, allow_negative_numbers = true)]
        status: String,

        /// Reassign the execution
        #[arg(long)]
        assignee: Option<String>,
    },
}

/// Folder subcommands
#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// List folders of a cycle
    List {
        /// Cycle ID
        #[arg(allow_negative_numbers = true)]
        cycle_id: i64,

        #[command(flatten)]
        filter: ListFilterArgs,
    },

    /// Create a folder inside a cycle
    Create {
        /// Folder name
        #[arg(long)]
        name: String,

        /// Cycle ID
        #[arg(long)]
        cycle: i64,

        /// Jira project ID
        #[arg(long)]
        project: i64,

        /// Jira version ID (-1 for Unscheduled)
        #[arg(long, allow_negative_numbers = true)]
        version: i64,

        /// Folder description
        #[arg(long)]
        description: Option<String>,
    },
}
