use clap::Parser;
use space_battle::{Fleet, Scenario, ScenarioError, Simulation, SimulationConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "space-battle", about = "Moves a fleet of ships through a battle scenario")]
pub struct Args {
    /// JSON scenario describing the fleet
    pub scenario: PathBuf,

    /// Number of steps to play, overriding the scenario
    #[arg(long)]
    pub steps: Option<u32>,

    /// Stop as soon as a ship fails to move
    #[arg(long)]
    pub stop_on_stall: bool,
}

impl Args {
    pub fn config(&self) -> SimulationConfig {
        let config = SimulationConfig::default().with_stop_on_stall(self.stop_on_stall);
        match self.steps {
            Some(steps) => config.with_steps(steps),
            None => config,
        }
    }
}

pub fn simulate(scenario: Scenario, config: SimulationConfig) -> Fleet {
    log::info!("simulating {} ships", scenario.ships.len());
    let mut simulation = Simulation::new(scenario, config);
    let reports = simulation.run();
    let stalled: usize = reports.iter().map(|report| report.stalled.len()).sum();
    if stalled > 0 {
        log::warn!("{} moves failed over {} steps", stalled, reports.len());
    }
    simulation.into_fleet()
}

pub fn run(args: &Args) -> Result<Fleet, ScenarioError> {
    let scenario = Scenario::load_from_file(&args.scenario)?;
    Ok(simulate(scenario, args.config()))
}
