use anyhow::Result;

use crate::llm::{LlmClient, LlmResponse};

const SYSTEM_PROMPT: &str = r#"You are a news synthesis expert. Your task is to:
1. Analyze the raw news articles provided
2. Identify the key themes and important information
3. Combine information from multiple sources
4. Create a comprehensive but concise synthesis
5. Focus on facts and maintain journalistic objectivity
6. Write in a clear, professional style

Provide a 2-3 paragraph synthesis of the main points."#;

pub struct Synthesizer {
    llm: LlmClient,
    model: String,
}

impl Synthesizer {
    pub fn new(llm: LlmClient, model: String) -> Self {
        Self { llm, model }
    }

    pub async fn synthesize(&self, raw_news: &str) -> Result<(String, LlmResponse)> {
        let user_message = format!("Synthesize these news articles:\n{}", raw_news);

        let response = self
            .llm
            .complete(&self.model, SYSTEM_PROMPT, &user_message)
            .await?;

        Ok((response.text.clone(), response))
    }
}
