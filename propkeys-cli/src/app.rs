use clap::{Parser, Subcommand};
use propkeys::{config::TABLE_VERSION_ENV, TableConfig, TableVersion};

/// propkeys - inspect and translate versioned property key tables
#[derive(Debug, Parser)]
#[command(name = "propkeys", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table version to resolve against: current (a) or legacy (b).
    #[arg(
        long = "table-version",
        global = true,
        env = TABLE_VERSION_ENV,
        default_value = "current",
        value_name = "VERSION"
    )]
    pub table_version: TableVersion,

    /// Also accept short names (scrollDirection for kPropertyScrollDirection).
    #[arg(long = "short-names", global = true)]
    pub short_names: bool,
}

impl GlobalOptions {
    /// Table configuration selected by the global options.
    pub fn table_config(&self) -> TableConfig {
        TableConfig::new(self.table_version).with_short_names(self.short_names)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every key of the selected table version.
    List {
        /// Show only keys whose name contains this substring (case-insensitive).
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Look up a key by name or code.
    Lookup {
        /// Key name (kPropertyOpacity; opacity with --short-names) or code (116, 0x74).
        #[arg(value_name = "NAME|CODE")]
        query: String,

        /// Resolve the query against every table version instead of the selected one.
        #[arg(long)]
        all: bool,
    },

    /// Show keys added, removed, and renumbered between two table versions.
    Diff {
        /// Source table version.
        #[arg(long, default_value = "legacy")]
        from: TableVersion,

        /// Target table version.
        #[arg(long, default_value = "current")]
        to: TableVersion,

        /// Omit the renumbered keys from the output.
        #[arg(long)]
        no_renumbered: bool,
    },

    /// Translate a code from one table version to another through its name.
    Translate {
        /// Code in the source version (decimal or 0x hex).
        #[arg(value_name = "CODE")]
        code: String,

        /// Source table version.
        #[arg(long)]
        from: TableVersion,

        /// Target table version.
        #[arg(long)]
        to: TableVersion,
    },

    /// Decode a dirty-property payload against the selected table version.
    Decode {
        /// JSON array of codes or {"dirtyProperties": [...]} object; "-" reads stdin.
        #[arg(value_name = "PAYLOAD")]
        payload: String,
    },
}
