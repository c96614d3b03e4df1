// CLI argument parsing and definitions

use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "lemp")]
#[command(about = "Scaffold a LEMP-stack Vagrant development box")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Install the Lemp environment into the current project
    Make {
        /// The name of the virtual machine (defaults to the project slug)
        #[arg(long)]
        name: Option<String>,

        /// The hostname of the virtual machine (defaults to the project slug)
        #[arg(long)]
        hostname: Option<String>,

        /// The IP address of the virtual machine
        #[arg(long)]
        ip: Option<String>,

        /// Also snapshot the settings as a Server.json.example file
        #[arg(long)]
        example: bool,

        /// Write the settings file in JSON format (the only format)
        #[arg(long)]
        json: bool,
    },
}
