//! Error macros for graphwalk

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphwalkError::invalid_value($context, $value))
    };
}

/// Macro for creating graph parse errors
#[macro_export]
macro_rules! bail_graph {
    ($line:expr, $($arg:tt)*) => {
        return Err($crate::error::GraphwalkError::invalid_graph($line, format!($($arg)*)))
    };
}
