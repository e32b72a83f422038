use anyhow::Result;
use chrono::NaiveDate;

use crate::llm::{LlmClient, LlmResponse};
use crate::search::SearchResult;

const SYSTEM_PROMPT: &str = r#"You are a news search specialist. Your task is to:
1. Review the search results for the most relevant and recent news on the given topic
2. Prefer results from reputable sources
   - For Malaysia news: Malaysiakini, China Press, Sin Chew Daily
   - For Singapore news: New Straits Times, Zaobao, CNA
   - For USA news: CNN, BBC
   - For other countries: the country's major reputable newspapers and TV stations
3. Never fabricate news. If there are no results, say so plainly instead of inventing stories
4. Return the raw search results in a structured format"#;

pub struct Searcher {
    llm: LlmClient,
    model: String,
}

impl Searcher {
    pub fn new(llm: LlmClient, model: String) -> Self {
        Self { llm, model }
    }

    pub async fn report(
        &self,
        topic: &str,
        results: &[SearchResult],
    ) -> Result<(String, LlmResponse)> {
        let user_message = format!(
            "Find recent news about {}.\n\nSearch results:\n\n{}",
            topic,
            format_search_results(topic, results)
        );

        let response = self
            .llm
            .complete(&self.model, SYSTEM_PROMPT, &user_message)
            .await?;

        Ok((response.text.clone(), response))
    }
}

/// The query sent to the search engine: the topic, the word "news", and the
/// current calendar day.
pub fn build_query(topic: &str, today: NaiveDate) -> String {
    format!("{} news {}", topic, today.format("%Y-%m-%d"))
}

/// Renders hits as Title/URL/Summary blocks separated by blank lines, in
/// engine order. Zero hits yield a fixed no-news line, never invented text.
pub fn format_search_results(topic: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!("No news found for {}.", topic);
    }

    results
        .iter()
        .map(|r| format!("Title: {}\nURL: {}\nSummary: {}", r.title, r.url, r.snippet))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, url: &str, snippet: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            url: url.to_string(),
            snippet: snippet.to_string(),
        }
    }

    #[test]
    fn formats_results_as_blank_line_separated_blocks() {
        let results = vec![
            result("AI Breakthrough", "https://a.example", "..."),
            result("AI Policy", "https://b.example", "..."),
        ];

        let text = format_search_results("artificial intelligence", &results);
        assert_eq!(
            text,
            "Title: AI Breakthrough\nURL: https://a.example\nSummary: ...\n\n\
             Title: AI Policy\nURL: https://b.example\nSummary: ..."
        );
    }

    #[test]
    fn no_results_yields_the_literal_no_news_line() {
        assert_eq!(
            format_search_results("artificial intelligence", &[]),
            "No news found for artificial intelligence."
        );
    }

    #[test]
    fn query_carries_topic_the_word_news_and_the_day() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(
            build_query("artificial intelligence", day),
            "artificial intelligence news 2026-08-05"
        );
    }
}
