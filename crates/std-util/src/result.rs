/// Asserts that a `Result` is `Err` and evaluates to the error. Extra
/// arguments are formatted into the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Asserts that a `Result` is `Err` and that the error answers `true` to
/// the given predicate method, e.g. `assert_err_is!(res, is_busy)`.
#[macro_export]
macro_rules! assert_err_is {
    ($e:expr, $pred:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$pred(),
            "expected error satisfying `{}`; actual={}",
            stringify!($pred),
            err
        );
        err
    }};
}

/// Asserts that a `Result` is `Ok` and evaluates to the value.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; actual=Err({})", e),
        }
    };
}
