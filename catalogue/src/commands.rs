use anyhow::{bail, Result};
use tracing::{debug, info};

use catalogue::catalogue_map::entries_for;
use catalogue::strings::{analyze, apply_pipeline};
use catalogue::walkthrough::{self, Report};

use crate::cli::Command;

pub fn execute_command(cmd: Command, json: bool) -> Result<()> {
    match cmd {
        Command::List { topic } => {
            let entries: Vec<_> = entries_for(topic).collect();
            debug!(count = entries.len(), "listing catalogue");
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for e in entries {
                    println!("{:<55} | {:<9} | {:<30} | {:<15} | {}", e.path, e.topic, e.technique, e.time, e.space);
                }
            }
        }
        Command::Run { topic } => {
            let report = walkthrough::run(topic);
            print_report(&report, json)?;
        }
        Command::Check { topic } => {
            let report = walkthrough::run(topic);
            print_report(&report, json)?;
            if !report.all_passed() {
                let names: Vec<&str> = report.failures().map(|o| o.name).collect();
                bail!("{} demo(s) failed: {}", names.len(), names.join(", "));
            }
            info!(passed = report.passed(), "all demos passed");
        }
        Command::Transform { text, ops } => {
            let out = apply_pipeline(&text, &ops);
            if json {
                let steps: Vec<&str> = ops.iter().map(|op| op.name()).collect();
                println!("{}", serde_json::json!({ "input": text, "ops": steps, "output": out }));
            } else {
                println!("{out}");
            }
        }
        Command::Analyze { text } => {
            let profile = analyze(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("length:              {}", profile.length);
                println!("top characters:      {:?}", profile.top_characters);
                println!("first non-repeating: {:?}", profile.first_non_repeating);
                println!("duplicates:          {:?}", profile.duplicates);
                println!("max occurring:       {:?}", profile.max_occurring);
                println!("vowels/consonants:   {}/{}", profile.vowels, profile.consonants);
            }
        }
    }
    Ok(())
}

fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json(true)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
