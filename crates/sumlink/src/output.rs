use std::io::IsTerminal;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Text
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct SumOutput {
    one: u64,
    two: u64,
    sum: u64,
}

pub fn print_sum(one: u64, two: u64, sum: u64, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{one} + {two} = {sum}"),
        OutputFormat::Json => {
            let out = SumOutput { one, two, sum };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
    }
}
