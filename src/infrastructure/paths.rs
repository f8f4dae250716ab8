//! Host paths as seen from inside the Zellij sandbox.
//!
//! The plugin runs in a WASI sandbox where the user's home directory is
//! mounted at `/host`.

use std::path::PathBuf;

/// Home directory mount point inside the sandbox.
pub const HOST_HOME: &str = "/host";

/// Directory for the plugin's trace file.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_HOME).join(".local/share/zellij/shelfscout")
}

/// Rewrites a leading `~` to the sandbox home mount.
///
/// ```rust
/// use shelfscout::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_HOME.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_HOME}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_under_host_home() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/shelfscout")
        );
    }

    #[test]
    fn tilde_forms() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a"), "/host/a");
        assert_eq!(expand_tilde("~user/a"), "~user/a");
        assert_eq!(expand_tilde("relative/~"), "relative/~");
    }
}
