use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "commitkit", version, about = "Canonical encoding and commit-reveal hashing")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enum config JSON. Entries override the built-in protocol enums.
    #[arg(long, global = true)]
    pub enums: Option<String>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Encode a value file and print the canonical bytes.
    Encode {
        /// Value JSON file.
        input: String,
    },

    /// Hash the concatenated encodings of one or more value files.
    Hash {
        /// Value JSON files, encoded in the order given.
        #[arg(required = true)]
        inputs: Vec<String>,

        /// sha256 (default, matches the chain) or blake3.
        #[arg(long, default_value = "sha256")]
        alg: String,
    },

    /// Build a commitment over an action list and a secret.
    Commit {
        /// JSON file holding a `seq` value (or a bare array of values).
        #[arg(long)]
        actions: String,

        /// 0x-prefixed 32-byte secret.
        #[arg(long)]
        secret: String,
    },

    /// Check revealed actions and secret against a published commitment.
    Verify {
        #[arg(long)]
        actions: String,
        #[arg(long)]
        secret: String,
        /// 0x-prefixed commitment digest.
        #[arg(long)]
        expected: String,
    },

    /// List the effective enum registry.
    Enums,
}
