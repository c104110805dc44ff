//! Worked examples for every topic, each paired with the answer it must
//! produce. `run` executes them and collects a [`Report`].

pub mod demo;
pub mod registry;
pub mod topic;

pub use demo::{to_json, Demo, Outcome, Report};
pub use registry::{demos_for, registry};
pub use topic::Topic;

use tracing::{info, info_span};

/// Runs the demos of one topic, or of all topics.
pub fn run(topic: Option<Topic>) -> Report {
    let _span = info_span!("walkthrough", topic = topic.map_or("all", Topic::name)).entered();
    let demos = match topic {
        Some(t) => demos_for(t),
        None => registry(),
    };
    let report = Report { outcomes: demos.iter().map(Demo::run).collect() };
    info!(passed = report.passed(), failed = report.failed(), "walkthrough finished");
    report
}
