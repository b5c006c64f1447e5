use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Unwraps a link or node that the structure of a container guarantees is present, like the
    /// successor of a front node in a list with more than one element.
    ///
    /// Debug builds check the claim with [`unreachable!`], release builds rely on it through
    /// [`unreachable_unchecked`](hint::unreachable_unchecked).
    ///
    /// # Safety
    /// The caller must guarantee that `self` is [`Some`].
    #[track_caller]
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!("container invariant broken: missing link"),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible when
            // invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
