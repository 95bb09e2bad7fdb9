use crate::command::{MoveCommand, MoveError};
use crate::ship::{Ship, ShipId};
use util::command::Command;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StepReport {
    pub moved: Vec<ShipId>,
    pub stalled: Vec<(ShipId, MoveError)>,
}

impl StepReport {
    pub fn has_stalled(&self) -> bool {
        !self.stalled.is_empty()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new(ships: Vec<Ship>) -> Self {
        Self { ships }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: &ShipId) -> Option<&Ship> {
        self.ships.iter().find(|ship| ship.id() == id)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Moves every ship once, in the order they were added. A ship that
    /// cannot move keeps its position and does not hold up the others.
    pub fn advance(&mut self) -> StepReport {
        let mut report = StepReport::default();
        for ship in self.ships.iter_mut() {
            let id = ship.id().clone();
            let result = MoveCommand::new(&mut *ship).run();
            match result {
                Ok(()) => {
                    log::debug!("ship {} ({}) moved", id, ship.name());
                    report.moved.push(id);
                }
                Err(err) => {
                    log::warn!("ship {} ({}) could not move: {}", id, ship.name(), err);
                    report.stalled.push((id, err));
                }
            }
        }
        report
    }
}
