//! Paths inside the Zellij plugin sandbox, where the host filesystem is
//! mounted under `/host`.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory for plugin-owned files such as traces.
///
/// `/host` is the cwd of the last focused terminal (usually the user's home),
/// so this normally resolves to `~/.local/share/zellij/jobboard`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/jobboard")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// ```
/// use jobboard::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/jobs.json"), "/host/jobs.json");
/// assert_eq!(expand_tilde("/data/jobs.json"), "/data/jobs.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/fixtures/jobs.json"), "/host/fixtures/jobs.json");
        assert_eq!(expand_tilde("~other/jobs.json"), "~other/jobs.json");
        assert_eq!(expand_tilde("relative/jobs.json"), "relative/jobs.json");
    }

    #[test]
    fn test_data_dir_is_under_host() {
        let dir = get_data_dir();
        assert!(dir.starts_with("/host"));
        assert!(dir.ends_with("zellij/jobboard"));
    }
}
