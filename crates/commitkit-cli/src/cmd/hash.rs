use std::io;

use anyhow::Result;
use commitkit_core::hash::parse_alg;
use commitkit_core::hasher::Hasher;
use serde::Serialize;
use termcolor::StandardStream;
use tracing::debug;

use crate::io::input;
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct HashOut {
    pub alg: String,
    pub inputs: usize,
    pub len: usize,
    pub digest: String,
}

impl Render for HashOut {
    fn render(&self, out: &mut StandardStream) -> io::Result<()> {
        output::field(out, "algorithm", &self.alg)?;
        output::field(out, "encoded length", self.len)?;
        output::field(out, "digest", &self.digest)
    }
}

pub fn run(enums: Option<&str>, paths: &[String], alg: &str) -> Result<()> {
    let alg = parse_alg(alg)?;
    let registry = input::load_registry(enums)?;

    let mut hasher = Hasher::with_context(registry).algorithm(alg);
    for p in paths {
        let value = input::read_value(p)?;
        hasher.update(&value)?;
        debug!(path = %p, total = hasher.len(), "appended value");
    }

    output::print(&HashOut {
        alg: hasher.alg().to_string(),
        inputs: paths.len(),
        len: hasher.len(),
        digest: hasher.finalize().to_hex(),
    })
}
