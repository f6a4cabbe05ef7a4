//===========================================================================//

macro_rules! malformed {
    ($e:expr) => {
        return Err($crate::error::Error::TruncatedOrMalformed(
            ::std::string::String::from($e),
        ))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::error::Error::TruncatedOrMalformed(
            format!($fmt, $($arg)+),
        ))
    };
}

macro_rules! invalid_input {
    ($kind:ident, $e:expr) => {
        return Err($crate::error::Error::$kind(
            ::std::string::String::from($e),
        ))
    };
    ($kind:ident, $fmt:expr, $($arg:tt)+) => {
        return Err($crate::error::Error::$kind(format!($fmt, $($arg)+)))
    };
}

//===========================================================================//
