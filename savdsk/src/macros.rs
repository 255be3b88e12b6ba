/// Returns early with the handler's error wrapped in a `SavDskError`.
macro_rules! unwrap_error_savdsk_convertible {
    ($v:expr) => {
        match $v {
            Ok(val) => val,
            Err(e) => return Err(e.into_savdsk_error()),
        }
    };
}
