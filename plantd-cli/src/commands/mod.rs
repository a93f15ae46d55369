//! CLI command implementations

pub mod migrate;
pub mod serve;

/// Default SQLite database URL when neither flag nor env is set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://plants.db";

/// Resolve the database URL.
///
/// clap fills the argument from `--database-url` or the DATABASE_URL
/// environment; this only supplies the default when both are absent.
pub fn resolve_database_url(flag: Option<String>) -> String {
    flag.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_wins() {
        let url = resolve_database_url(Some("sqlite://custom.db".into()));
        assert_eq!(url, "sqlite://custom.db");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(resolve_database_url(None), DEFAULT_DATABASE_URL);
    }
}
