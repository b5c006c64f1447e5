/// Asserts that a block panics. The block is run behind [`AssertUnwindSafe`], so it may borrow
/// containers mutably; those containers must not be inspected afterwards unless the test knows
/// the panic happened before any mutation.
///
/// [`AssertUnwindSafe`]: std::panic::AssertUnwindSafe
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
