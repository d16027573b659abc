use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Substitute `{:name}` placeholders in a filter template
    Render {
        #[arg(long, help = "Filter template, e.g. \"name={:name} && age>{:age}\"")]
        template: String,

        #[arg(
            long,
            help = "Params file: a JSON object (.json) or KEY=VALUE lines"
        )]
        params: Option<PathBuf>,

        #[arg(
            long = "param",
            value_name = "KEY=VALUE",
            help = "Single parameter, applied after the params file (repeatable)"
        )]
        param: Vec<String>,
    },
    /// Build a filter matching a value against several fields
    Search {
        #[arg(long, value_delimiter = ',', required = true, help = "Comma-separated field paths")]
        fields: Vec<String>,

        #[arg(long, help = "Text to look for")]
        value: String,

        #[arg(
            long,
            help = "If set, prints the template and values as JSON instead of the rendered filter"
        )]
        raw: bool,
    },
    /// List the comparison operators
    Operators {
        #[arg(long, help = "If set, prints the operators as JSON instead of a table")]
        json: bool,
    },
}
