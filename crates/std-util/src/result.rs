/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
///
/// The second form also asserts a predicate method on the error, e.g.
/// `assert_err!(mapper.hydrate::<User>(&doc), is_missing_identifier)`.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            Ok(actual) => panic!("expected `Err`; actual=Ok({:?})", actual),
        }
    };
    ($e:expr, $pred:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$pred(),
            "expected error matching `{}`; actual={}",
            stringify!($pred),
            err
        );
        err
    }};
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(err) => panic!("expected `Ok`; actual=Err({})", err),
        }
    };
}
