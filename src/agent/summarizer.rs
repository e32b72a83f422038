use anyhow::Result;

use crate::llm::{LlmClient, LlmResponse};

const SYSTEM_PROMPT: &str = r#"You are an expert news summarizer combining AP and Reuters style clarity with digital-age brevity.

Your task:
1. Core Information:
   - Lead with the most newsworthy development
   - Include key stakeholders and their actions
   - Add critical numbers/data if relevant
   - Explain why this matters now
   - Mention immediate implications

2. Style Guidelines:
   - Use strong, active verbs
   - Be specific, not general
   - Maintain journalistic objectivity
   - Make every word count
   - Explain technical terms if necessary

Format: Create a paragraph of 150-300 words that informs and engages for each piece of news. If there are 5 news items, create 5 paragraphs. Each paragraph must be separated by 2 new lines.

Pattern: [Major News] + [Key Details/Data] + [Why It Matters/What's Next]

Focus on answering: What happened? Why is it significant? What's the impact?

IMPORTANT: Provide ONLY the summary paragraphs. Do not include any introductory phrases, labels, or meta-text like "Here's a summary" or "In AP/Reuters style." Start directly with the news content."#;

pub struct Summarizer {
    llm: LlmClient,
    model: String,
}

impl Summarizer {
    pub fn new(llm: LlmClient, model: String) -> Self {
        Self { llm, model }
    }

    pub async fn summarize(&self, synthesized_news: &str) -> Result<(String, LlmResponse)> {
        let user_message = format!("Summarize this synthesis:\n{}", synthesized_news);

        let response = self
            .llm
            .complete(&self.model, SYSTEM_PROMPT, &user_message)
            .await?;

        Ok((response.text.clone(), response))
    }
}
