use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub catalog_path: PathBuf,
    /// Length of the cosmetic wheel animation shown before a result is revealed.
    pub spin_duration_ms: u64,
    /// Fixed RNG seed; `None` draws from OS entropy on every run.
    pub spin_seed: Option<u64>,
    pub password_salt: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("catalog_path", &self.catalog_path)
            .field("spin_duration_ms", &self.spin_duration_ms)
            .field("spin_seed", &self.spin_seed)
            .field("password_salt", &"[redacted]")
            .finish()
    }
}
