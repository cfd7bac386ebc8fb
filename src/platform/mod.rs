//! Operating system naming and path style conversion.

#[cfg(target_os = "linux")]
const CURRENT_OS: &str = "linux";

#[cfg(target_os = "macos")]
const CURRENT_OS: &str = "darwin";

#[cfg(target_os = "windows")]
const CURRENT_OS: &str = "windows";

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const CURRENT_OS: &str = std::env::consts::OS;

/// Name of the running operating system as accepted by [`format_path`].
pub fn current_os() -> &'static str {
    CURRENT_OS
}

/// Rewrites the separators of `path` for the named operating system.
///
/// `windows` turns `/` into `\`, `linux` and `darwin` turn `\` into `/`.
/// Any other name leaves the path untouched. The result does not depend on
/// the host the code runs on.
pub fn format_path(path: &str, os: &str) -> String {
    match os {
        "windows" => path.replace('/', "\\"),
        "linux" | "darwin" => path.replace('\\', "/"),
        _ => path.to_string(),
    }
}
