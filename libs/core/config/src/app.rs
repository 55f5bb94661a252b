/// Application identity, reported by the health endpoint.
#[derive(Clone, Debug)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Capture the calling crate's name and version from Cargo metadata.
///
/// Must be a macro so `CARGO_PKG_NAME`/`CARGO_PKG_VERSION` expand in the
/// binary crate that invokes it, not in this library.
///
/// # Example
/// ```ignore
/// use core_config::app_info;
///
/// let info = app_info!();
/// assert_eq!(info.name, env!("CARGO_PKG_NAME"));
/// ```
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}
