use std::io;

use anyhow::Result;
use commitkit_core::encoder::encode_with;
use commitkit_core::registry::Resolver;
use serde::Serialize;
use termcolor::StandardStream;

use crate::io::input;
use crate::output::{self, Render};

#[derive(Debug, Serialize)]
pub struct EncodeOut {
    pub len: usize,
    pub hex: String,
}

impl Render for EncodeOut {
    fn render(&self, out: &mut StandardStream) -> io::Result<()> {
        output::field(out, "length", self.len)?;
        output::field(out, "bytes", &self.hex)
    }
}

pub fn run(enums: Option<&str>, path: &str) -> Result<()> {
    let registry = input::load_registry(enums)?;
    let value = input::read_value(path)?;

    let bytes = encode_with(&value, &Resolver::with_base(None, &registry))?;
    output::print(&EncodeOut {
        len: bytes.len(),
        hex: format!("0x{}", hex::encode(&bytes)),
    })
}
