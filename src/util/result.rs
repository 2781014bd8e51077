use std::fmt::Display;

pub(crate) trait ResultExtension<T, E: Display> {
    /// A method similar to [`Result::unwrap`], except that it panics with the [`Display`] message
    /// of the error itself, rather than its debug output. This also covers errors like `QueueOverflow`,
    /// which only implement [`Error`](std::error::Error) when their contents are
    /// [`Debug`](std::fmt::Debug).
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Display> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}
