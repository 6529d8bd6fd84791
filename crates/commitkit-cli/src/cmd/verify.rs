use std::io;

use anyhow::{bail, Result};
use commitkit_core::bytes::{Bytes32, Digest};
use commitkit_core::commitment::commitment_hash;
use commitkit_core::registry::Resolver;
use serde::Serialize;
use termcolor::StandardStream;

use crate::io::input;
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct VerifyOut {
    pub ok: bool,
    pub expected: String,
    pub actual: String,
}

impl Render for VerifyOut {
    fn render(&self, out: &mut StandardStream) -> io::Result<()> {
        output::status(out, self.ok, "match", "mismatch")?;
        output::field(out, "expected", &self.expected)?;
        output::field(out, "actual", &self.actual)
    }
}

pub fn run(enums: Option<&str>, actions_path: &str, secret: &str, expected: &str) -> Result<()> {
    let registry = input::load_registry(enums)?;
    let actions = input::read_actions(actions_path)?;
    let secret: Bytes32 = secret.parse()?;
    let expected: Digest = expected.parse()?;

    let actual = commitment_hash(&actions, &secret, &Resolver::with_base(None, &registry))?;
    let ok = actual == expected;
    output::print(&VerifyOut {
        ok,
        expected: expected.to_hex(),
        actual: actual.to_hex(),
    })?;

    if !ok {
        bail!("revealed actions and secret do not match the commitment");
    }
    Ok(())
}
