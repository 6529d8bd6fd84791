use std::io;

use anyhow::Result;
use commitkit_core::bytes::Bytes32;
use commitkit_core::commitment::Commitment;
use commitkit_core::registry::Resolver;
use serde::Serialize;
use termcolor::StandardStream;

use crate::io::input;
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct CommitOut {
    pub actions: usize,
    pub len: usize,
    pub bytes: String,
    pub commitment: String,
}

impl Render for CommitOut {
    fn render(&self, out: &mut StandardStream) -> io::Result<()> {
        output::field(out, "actions", self.actions)?;
        output::field(out, "encoded length", self.len)?;
        output::field(out, "bytes", &self.bytes)?;
        output::field(out, "commitment", &self.commitment)
    }
}

pub fn run(enums: Option<&str>, actions_path: &str, secret: &str) -> Result<()> {
    let registry = input::load_registry(enums)?;
    let actions = input::read_actions(actions_path)?;
    let secret: Bytes32 = secret.parse()?;

    let c = Commitment::build(&actions, &secret, &Resolver::with_base(None, &registry))?;
    output::print(&CommitOut {
        actions: actions.len(),
        len: c.len(),
        bytes: format!("0x{}", hex::encode(&c.bytes)),
        commitment: c.digest.to_hex(),
    })
}
