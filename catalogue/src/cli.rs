use clap::{ArgAction, Parser, Subcommand};

use catalogue::strings::Transform;
use catalogue::walkthrough::Topic;

#[derive(Parser)]
#[command(name = "dsa", about = "Data-structure and algorithm catalogue with runnable walkthroughs", version)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the catalogue: path, technique, time and space cost
    List {
        #[arg(long, value_enum)]
        topic: Option<Topic>,
    },
    /// Run the walkthrough demos and print each answer
    Run {
        #[arg(long, value_enum)]
        topic: Option<Topic>,
    },
    /// Run the walkthrough demos and fail if any answer is wrong
    Check {
        #[arg(long, value_enum)]
        topic: Option<Topic>,
    },
    /// Apply a pipeline of string transforms, left to right
    Transform {
        text: String,
        #[arg(long = "op", required = true, value_parser = parse_transform)]
        ops: Vec<Transform>,
    },
    /// Print a character profile of the text
    Analyze {
        text: String,
    },
}

fn parse_transform(s: &str) -> Result<Transform, String> {
    s.parse().map_err(|e: catalogue::CatalogueError| e.to_string())
}
