use crate::command::error::{InvalidMoveReason, MoveError};
use crate::movable::Movable;
use util::command::Command;
use util::validate::ValidateExt;

/// Displaces one movable by its move speed.
///
/// The command is bound to a single movable when it is created. Pass
/// `&mut entity` to keep ownership with the caller. Every call to `run`
/// reads the current vectors again, so running twice moves twice.
#[derive(Debug)]
pub struct MoveCommand<M> {
    movable: M,
}

impl<M> MoveCommand<M>
where
    M: Movable,
{
    pub fn new(movable: M) -> Self {
        Self { movable }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct MoveState {
    position: Option<Vec<i32>>,
    move_speed: Option<Vec<i32>>,
}

impl MoveState {
    fn capture(movable: &impl Movable) -> Self {
        Self {
            position: movable.position(),
            move_speed: movable.move_speed(),
        }
    }

    // Only meaningful once the state has been validated.
    fn next_position(&self) -> Vec<i32> {
        self.position
            .iter()
            .flatten()
            .zip(self.move_speed.iter().flatten())
            .map(|(position, speed)| position.wrapping_add(*speed))
            .collect()
    }
}

fn have_position(state: &MoveState) -> Option<InvalidMoveReason> {
    match state.position {
        Some(_) => None,
        None => Some(InvalidMoveReason::MissingPosition),
    }
}

fn have_move_speed(state: &MoveState) -> Option<InvalidMoveReason> {
    match state.move_speed {
        Some(_) => None,
        None => Some(InvalidMoveReason::MissingMoveSpeed),
    }
}

fn have_matching_dimensions(state: &MoveState) -> Option<InvalidMoveReason> {
    match (&state.position, &state.move_speed) {
        (Some(position), Some(move_speed)) if position.len() != move_speed.len() => {
            Some(InvalidMoveReason::DimensionMismatch {
                position: position.len(),
                move_speed: move_speed.len(),
            })
        }
        _ => None,
    }
}

impl<M> Command for MoveCommand<M>
where
    M: Movable,
{
    type Error = MoveError;

    fn run(&mut self) -> Result<(), Self::Error> {
        let state = MoveState::capture(&self.movable);

        state
            .should(have_position)
            .should(have_move_speed)
            .should(have_matching_dimensions)
            .validate()
            .map_err(|reasons| MoveError::InvalidState { reasons })?;

        self.movable.set_position(state.next_position());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movable::MockMovable;
    use crate::ship::Ship;
    use mockall::predicate;

    fn mock_movable(position: Option<Vec<i32>>, move_speed: Option<Vec<i32>>) -> MockMovable {
        let mut mock = MockMovable::new();
        mock.expect_position().return_const(position);
        mock.expect_move_speed().return_const(move_speed);
        mock
    }

    fn expect_moved_to(mock: &mut MockMovable, expected: Vec<i32>) {
        mock.expect_set_position()
            .with(predicate::eq(expected))
            .times(1)
            .return_const(());
    }

    fn run_failing(mut mock: MockMovable) -> MoveError {
        mock.expect_set_position().never();
        MoveCommand::new(&mut mock).run().unwrap_err()
    }

    #[test]
    pub fn it_should_add_move_speed_to_position() {
        let cases = [
            ((0, 0), (0, 0)),
            ((0, 0), (1, 2)),
            ((0, 0), (-1, -2)),
            ((0, 0), (-1, 2)),
            ((0, 0), (1, -2)),
            ((1, 2), (0, 0)),
            ((-1, 2), (0, 0)),
            ((1, -2), (0, 0)),
            ((-1, -2), (0, 0)),
            ((1, 2), (-2, -1)),
            ((-3, -4), (1, 2)),
            ((12, 5), (-7, 3)),
        ];

        for ((pos_x, pos_y), (mov_x, mov_y)) in cases {
            let mut mock = mock_movable(Some(vec![pos_x, pos_y]), Some(vec![mov_x, mov_y]));
            expect_moved_to(&mut mock, vec![pos_x + mov_x, pos_y + mov_y]);

            assert!(MoveCommand::new(&mut mock).run().is_ok());
        }
    }

    #[test]
    pub fn it_should_move_from_the_origin() {
        let mut mock = mock_movable(Some(vec![0, 0]), Some(vec![1, 2]));
        expect_moved_to(&mut mock, vec![1, 2]);

        assert!(MoveCommand::new(&mut mock).run().is_ok());
    }

    #[test]
    pub fn it_should_move_from_negative_coordinates() {
        let mut mock = mock_movable(Some(vec![-3, -4]), Some(vec![1, 2]));
        expect_moved_to(&mut mock, vec![-2, -2]);

        assert!(MoveCommand::new(&mut mock).run().is_ok());
    }

    #[test]
    pub fn it_should_move_random_vectors_with_wrapping_addition() {
        for _ in 0..50 {
            let position = vec![rand::random::<i32>(), rand::random::<i32>()];
            let move_speed = vec![rand::random::<i32>(), rand::random::<i32>()];
            let expected = vec![
                position[0].wrapping_add(move_speed[0]),
                position[1].wrapping_add(move_speed[1]),
            ];

            let mut mock = mock_movable(Some(position), Some(move_speed));
            expect_moved_to(&mut mock, expected);

            assert!(MoveCommand::new(&mut mock).run().is_ok());
        }
    }

    #[test]
    pub fn it_should_wrap_around_on_overflow() {
        let mut mock = mock_movable(Some(vec![i32::MAX, i32::MIN]), Some(vec![1, -1]));
        expect_moved_to(&mut mock, vec![i32::MIN, i32::MAX]);

        assert!(MoveCommand::new(&mut mock).run().is_ok());
    }

    #[test]
    pub fn it_should_move_zero_size_vectors() {
        let mut mock = mock_movable(Some(vec![]), Some(vec![]));
        expect_moved_to(&mut mock, vec![]);

        assert!(MoveCommand::new(&mut mock).run().is_ok());
    }

    #[test]
    pub fn it_should_not_move_without_a_position() {
        let error = run_failing(mock_movable(None, Some(vec![0, 0])));
        assert_eq!(error.reasons(), &[InvalidMoveReason::MissingPosition]);
    }

    #[test]
    pub fn it_should_not_move_without_a_move_speed() {
        let error = run_failing(mock_movable(Some(vec![0, 0]), None));
        assert_eq!(error.reasons(), &[InvalidMoveReason::MissingMoveSpeed]);
    }

    #[test]
    pub fn it_should_report_both_missing_vectors() {
        let error = run_failing(mock_movable(None, None));
        assert_eq!(
            error,
            MoveError::InvalidState {
                reasons: vec![
                    InvalidMoveReason::MissingPosition,
                    InvalidMoveReason::MissingMoveSpeed,
                ]
            }
        );
    }

    #[test]
    pub fn it_should_not_move_when_position_is_longer_than_move_speed() {
        let error = run_failing(mock_movable(Some(vec![1, 2, 3]), Some(vec![1, 2])));
        assert_eq!(
            error.reasons(),
            &[InvalidMoveReason::DimensionMismatch {
                position: 3,
                move_speed: 2,
            }]
        );
    }

    #[test]
    pub fn it_should_not_move_when_move_speed_is_longer_than_position() {
        let error = run_failing(mock_movable(Some(vec![1, 2]), Some(vec![1, 2, 3])));
        assert_eq!(
            error.reasons(),
            &[InvalidMoveReason::DimensionMismatch {
                position: 2,
                move_speed: 3,
            }]
        );
    }

    #[test]
    pub fn it_should_not_move_when_position_is_empty() {
        let error = run_failing(mock_movable(Some(vec![]), Some(vec![1, 2, 3])));
        assert_eq!(
            error.reasons(),
            &[InvalidMoveReason::DimensionMismatch {
                position: 0,
                move_speed: 3,
            }]
        );
    }

    #[test]
    pub fn it_should_not_move_when_move_speed_is_empty() {
        let error = run_failing(mock_movable(Some(vec![1, 2]), Some(vec![])));
        assert_eq!(
            error.reasons(),
            &[InvalidMoveReason::DimensionMismatch {
                position: 2,
                move_speed: 0,
            }]
        );
    }

    #[test]
    pub fn it_should_move_again_on_every_run() {
        let mut ship = Ship::new("Rocinante".to_string())
            .with_position(vec![0, 0])
            .with_move_speed(vec![2, -1]);

        let mut command = MoveCommand::new(&mut ship);
        assert!(command.run().is_ok());
        assert!(command.run().is_ok());

        assert_eq!(ship.position(), Some(vec![4, -2]));
        assert_eq!(ship.move_speed(), Some(vec![2, -1]));
    }

    #[test]
    pub fn it_should_leave_a_missing_position_missing() {
        let mut ship = Ship::new("Derelict".to_string()).with_move_speed(vec![0, 0]);

        assert!(MoveCommand::new(&mut ship).run().is_err());
        assert_eq!(ship.position(), None);
    }

    #[test]
    pub fn it_should_leave_position_unchanged_on_mismatch() {
        let mut ship = Ship::new("Tachi".to_string())
            .with_position(vec![1, 2, 3])
            .with_move_speed(vec![1, 2]);

        assert!(MoveCommand::new(&mut ship).run().is_err());
        assert_eq!(ship.position(), Some(vec![1, 2, 3]));
    }
}
