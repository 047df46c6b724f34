use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "volume-discount")]
#[command(about = "Evaluate volume discount rules against a cart payload")]
pub struct CliConfig {
    /// Path to a run-input JSON document; stdin when omitted
    #[arg(long)]
    pub input: Option<String>,

    /// Pretty-print the result JSON
    #[arg(long)]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
