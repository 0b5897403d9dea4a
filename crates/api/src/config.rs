/// Server configuration loaded from environment variables.
///
/// The database settings are deliberately optional: a missing address or
/// name leaves the store unconfigured and the process still starts, with
/// the data endpoints reporting the condition per request.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Database server address, e.g. `postgres://user:pw@localhost:5432`.
    pub database_url: Option<String>,
    /// Database name appended to the address.
    pub database_name: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var         | Default   |
    /// |-----------------|-----------|
    /// | `HOST`          | `0.0.0.0` |
    /// | `PORT`          | `8000`    |
    /// | `DATABASE_URL`  | unset     |
    /// | `DATABASE_NAME` | unset     |
    ///
    /// Empty strings count as unset for the database variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.is_empty());
        let database_name = std::env::var("DATABASE_NAME")
            .ok()
            .filter(|value| !value.is_empty());

        Self {
            host,
            port,
            database_url,
            database_name,
        }
    }
}
