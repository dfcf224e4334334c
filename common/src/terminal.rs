pub mod colors;
pub mod logging;
pub mod print;

/// Logs an info event that reads as a success in the terminal.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}
