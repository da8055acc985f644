use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "exposable-model")]
#[command(about = "Expose whitelisted model fields as API-ready JSON")]
pub struct CliConfig {
    #[arg(long, short, help = "TOML file declaring exposable models")]
    pub config: String,

    #[arg(long, short, help = "JSON input file (reads stdin when omitted)")]
    pub input: Option<String>,

    #[arg(long, short, help = "Expose every record as this model")]
    pub model: Option<String>,

    #[arg(long, help = "Pretty-print the output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;

        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }

        if let Some(model) = &self.model {
            validate_non_empty_string("model", model)?;
        }

        Ok(())
    }
}
