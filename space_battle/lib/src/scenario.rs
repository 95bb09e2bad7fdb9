use crate::fleet::{Fleet, StepReport};
use crate::ship::Ship;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

fn default_steps() -> u32 {
    1
}

/// A fleet and how many steps to play it for, as read from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_steps")]
    pub steps: u32,
    pub ships: Vec<Ship>,
}

impl Scenario {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path)?;
        contents.parse()
    }
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SimulationConfig {
    steps: Option<u32>,
    stop_on_stall: bool,
}

impl SimulationConfig {
    /// Overrides the number of steps given by the scenario.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn with_stop_on_stall(mut self, stop_on_stall: bool) -> Self {
        self.stop_on_stall = stop_on_stall;
        self
    }
}

pub struct Simulation {
    fleet: Fleet,
    steps: u32,
    stop_on_stall: bool,
}

impl Simulation {
    pub fn new(scenario: Scenario, config: SimulationConfig) -> Self {
        Self {
            fleet: Fleet::new(scenario.ships),
            steps: config.steps.unwrap_or(scenario.steps),
            stop_on_stall: config.stop_on_stall,
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn into_fleet(self) -> Fleet {
        self.fleet
    }

    pub fn run(&mut self) -> Vec<StepReport> {
        let mut reports = Vec::new();
        for step in 1..=self.steps {
            let report = self.fleet.advance();
            log::info!(
                "step {}/{}: {} moved, {} stalled",
                step,
                self.steps,
                report.moved.len(),
                report.stalled.len()
            );
            let stalled = report.has_stalled();
            reports.push(report);
            if stalled && self.stop_on_stall {
                log::warn!("stopping after step {} because a ship stalled", step);
                break;
            }
        }
        reports
    }
}
