/// Build-time settings for the frontend. Nothing is read from the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Document title and page heading.
    pub title: &'static str,
    /// Level the client initialises `console_log` with.
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Porcana Frontend",
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_title() {
        assert_eq!(AppConfig::default().title, "Porcana Frontend");
    }
}
