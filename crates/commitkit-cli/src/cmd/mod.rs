use anyhow::Result;

use crate::args::{Cli, Command};

mod commit;
mod encode;
mod enums;
mod hash;
mod verify;

pub fn dispatch(cli: Cli) -> Result<()> {
    let enums_path = cli.enums.as_deref();
    match cli.command {
        Command::Encode { input } => encode::run(enums_path, &input),
        Command::Hash { inputs, alg } => hash::run(enums_path, &inputs, &alg),
        Command::Commit { actions, secret } => commit::run(enums_path, &actions, &secret),
        Command::Verify { actions, secret, expected } => verify::run(enums_path, &actions, &secret, &expected),
        Command::Enums => enums::run(enums_path),
    }
}
