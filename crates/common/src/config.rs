/// All configuration loaded from environment variables at startup.
/// Every setting has a default; an unparseable value panics with a clear message.
#[derive(Debug, Clone)]
pub struct Config {
    // HTTP
    pub port: u16,

    // Market data
    pub binance_base_url: String,

    // AI commentary
    pub ai_provider: String,
    pub gemini_api_key: String,
    pub gemini_model: String,

    // Logging
    pub log_level: String,

    /// Optional TOML file overriding the signal policy thresholds.
    pub policy_config_path: Option<String>,
}

impl Config {
    pub const DEFAULT_PORT: u16 = 8000;
    pub const DEFAULT_BINANCE_BASE_URL: &'static str = "https://api.binance.com";
    pub const DEFAULT_GEMINI_MODEL: &'static str = "gemini-1.5-flash-002";

    /// Load all configuration from environment variables.
    /// Loads `.env` if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // ignore error if .env not present
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                panic!("ERROR: PORT must be a valid TCP port number, got: '{raw}'")
            }),
            None => Self::DEFAULT_PORT,
        };

        Config {
            port,
            binance_base_url: var("BINANCE_BASE_URL")
                .unwrap_or_else(|| Self::DEFAULT_BINANCE_BASE_URL.to_string()),
            ai_provider: var("AI_PROVIDER").unwrap_or_else(|| "gemini".to_string()),
            gemini_api_key: var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: var("GEMINI_MODEL")
                .unwrap_or_else(|| Self::DEFAULT_GEMINI_MODEL.to_string()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            policy_config_path: var("POLICY_CONFIG_PATH").filter(|p| !p.trim().is_empty()),
        }
    }
}
