#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub busy_timeout_ms: u64,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "league.db".to_string()),
            busy_timeout_ms: 5_000,
            pool_size: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080, // http-alt
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::default(),
            server: ServerSettings::default(),
        }
    }
}
