use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use termcolor::StandardStream;

use crate::io::input;
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct EnumsOut {
    pub enums: BTreeMap<String, Vec<String>>,
}

impl Render for EnumsOut {
    fn render(&self, out: &mut StandardStream) -> io::Result<()> {
        for (name, variants) in &self.enums {
            writeln!(out, "{name}")?;
            for (i, v) in variants.iter().enumerate() {
                writeln!(out, "  {i:>3}  {v}")?;
            }
        }
        Ok(())
    }
}

pub fn run(enums: Option<&str>) -> Result<()> {
    let registry = input::load_registry(enums)?;
    output::print(&EnumsOut {
        enums: registry.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
    })
}
