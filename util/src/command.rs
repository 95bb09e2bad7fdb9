pub trait Command {
    type Error;
    fn run(&mut self) -> Result<(), Self::Error>;
}

impl<T> Command for Box<T>
where
    T: Command + ?Sized,
{
    type Error = T::Error;

    fn run(&mut self) -> Result<(), Self::Error> {
        self.as_mut().run()
    }
}

/// Runs every command in order and collects the errors of those that failed.
/// A failing command does not stop the ones after it.
pub fn run_all<C, E>(commands: impl IntoIterator<Item = C>) -> Vec<E>
where
    C: Command<Error = E>,
{
    commands
        .into_iter()
        .filter_map(|mut command| command.run().err())
        .collect()
}
