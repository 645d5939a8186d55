use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub genai_base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub listings_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("genai_base_url", &self.genai_base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_level", &self.log_level)
            .field("listings_path", &self.listings_path)
            .finish()
    }
}
