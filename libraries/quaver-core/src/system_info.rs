//! Diagnostics for the about page and bug reports

use std::collections::BTreeMap;
use std::fmt;

/// Display server the client is running under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSystem {
    Wayland,
    X11,
    Unknown,
}

impl WindowSystem {
    /// Detect from session environment variables, Wayland wins over XWayland
    pub fn detect(env: impl Fn(&str) -> Option<String>) -> Self {
        let set = |name: &str| env(name).is_some_and(|value| !value.is_empty());

        if set("WAYLAND_DISPLAY") {
            Self::Wayland
        } else if set("DISPLAY") {
            Self::X11
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for WindowSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wayland => "Wayland",
            Self::X11 => "X11",
            Self::Unknown => "Unknown",
        })
    }
}

/// Sorted key/value pairs describing the running system
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemInfo {
    info: BTreeMap<String, String>,
}

impl SystemInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect from the current process environment
    pub fn collect() -> Self {
        Self::collect_with(|name| std::env::var(name).ok())
    }

    /// Collect using `env` for variable lookups
    pub fn collect_with(env: impl Fn(&str) -> Option<String>) -> Self {
        let mut info = Self::new();

        info.add("Client version", env!("CARGO_PKG_VERSION"));

        if let Some(desktop) = env("XDG_CURRENT_DESKTOP").filter(|value| !value.is_empty()) {
            info.add("Current desktop", desktop);
        }

        info.add("Kernel", kernel());
        info.add(
            "ABI",
            format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS),
        );

        let window_system = WindowSystem::detect(&env);
        if window_system != WindowSystem::Unknown {
            info.add("Window system", window_system.to_string());
        }

        info
    }

    /// Insert or replace an entry
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.info.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.info.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.info.len()
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_empty()
    }

    /// One `key: value` line per entry
    pub fn to_text(&self) -> String {
        self.info
            .iter()
            .map(|(key, value)| format!("{}: {}\n", key, value))
            .collect()
    }

    pub fn to_html(&self) -> String {
        let rows: String = self
            .info
            .iter()
            .map(|(key, value)| format!("<tr><td>{}:</td> <td>{}</td></tr>", key, value))
            .collect();

        format!("<table>{}</table>", rows)
    }
}

#[cfg(target_os = "linux")]
fn kernel() -> String {
    let release = std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|release| release.trim().to_string())
        .unwrap_or_default();

    format!("linux {}", release).trim_end().to_string()
}

#[cfg(not(target_os = "linux"))]
fn kernel() -> String {
    std::env::consts::OS.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn window_system_prefers_wayland() {
        let env = env_from(&[("WAYLAND_DISPLAY", "wayland-0"), ("DISPLAY", ":0")]);
        assert_eq!(WindowSystem::detect(env), WindowSystem::Wayland);

        let env = env_from(&[("DISPLAY", ":0")]);
        assert_eq!(WindowSystem::detect(env), WindowSystem::X11);

        assert_eq!(WindowSystem::detect(env_from(&[])), WindowSystem::Unknown);
    }

    #[test]
    fn collect_includes_desktop_and_window_system() {
        let info = SystemInfo::collect_with(env_from(&[
            ("XDG_CURRENT_DESKTOP", "KDE"),
            ("WAYLAND_DISPLAY", "wayland-0"),
        ]));

        assert_eq!(info.get("Current desktop"), Some("KDE"));
        assert_eq!(info.get("Window system"), Some("Wayland"));
        assert!(info.get("Kernel").is_some());
        assert!(info.get("ABI").is_some());
    }

    #[test]
    fn headless_omits_optional_entries() {
        let info = SystemInfo::collect_with(env_from(&[]));
        assert_eq!(info.get("Current desktop"), None);
        assert_eq!(info.get("Window system"), None);
    }

    #[test]
    fn text_and_html_are_sorted_by_key() {
        let mut info = SystemInfo::new();
        info.add("Kernel", "linux 6.8");
        info.add("ABI", "x86_64-linux");

        assert_eq!(info.to_text(), "ABI: x86_64-linux\nKernel: linux 6.8\n");
        assert_eq!(
            info.to_html(),
            "<table><tr><td>ABI:</td> <td>x86_64-linux</td></tr>\
             <tr><td>Kernel:</td> <td>linux 6.8</td></tr></table>"
        );
    }
}
