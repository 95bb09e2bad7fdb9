/// Anything with a position that can be displaced by its own move speed.
///
/// Either vector may be absent; nothing here requires the two to agree in
/// length. That is checked when a move is actually run.
#[cfg_attr(test, mockall::automock)]
pub trait Movable {
    fn position(&self) -> Option<Vec<i32>>;

    /// Replaces the whole position vector.
    fn set_position(&mut self, position: Vec<i32>);

    fn move_speed(&self) -> Option<Vec<i32>>;
}

impl<T> Movable for &mut T
where
    T: Movable + ?Sized,
{
    fn position(&self) -> Option<Vec<i32>> {
        (**self).position()
    }

    fn set_position(&mut self, position: Vec<i32>) {
        (**self).set_position(position)
    }

    fn move_speed(&self) -> Option<Vec<i32>> {
        (**self).move_speed()
    }
}
