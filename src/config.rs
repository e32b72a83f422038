use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_key: String,
    pub llm_base_url: String,
    pub model: String,
    pub searx_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or_else(|_| "ollama".into()),
            llm_base_url: std::env::var("LLM_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434/v1/chat/completions".into()),
            model: std::env::var("MODEL").unwrap_or_else(|_| "llama3.2:latest".into()),
            searx_url: std::env::var("SEARX_URL")
                .unwrap_or_else(|_| "http://localhost:8888/search".into()),
        })
    }
}
