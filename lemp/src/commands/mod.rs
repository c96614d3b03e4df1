mod make;

use anyhow::Result;

use crate::cli::{Args, Command};

pub fn execute_command(args: Args) -> Result<()> {
    match args.command {
        Command::Make {
            name,
            hostname,
            ip,
            example,
            json,
        } => make::handle_make(make::MakeOptions {
            name,
            hostname,
            ip,
            example,
            json,
        }),
    }
}
