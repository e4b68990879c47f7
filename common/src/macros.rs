/// Logs a positive outcome. Rendered with its own marker by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "teamnet::success", $($arg)*)
    };
}
