use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Turns a `try_` result into the behaviour of its panicking counterpart: the value on
    /// success, otherwise a panic carrying the message of the error itself. The panic location is
    /// reported at the caller.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
