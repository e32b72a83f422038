pub mod searcher;
pub mod summarizer;
pub mod synthesizer;

use anyhow::Result;
use std::time::Instant;

use crate::config::Config;
use crate::instrumentation::{RunLog, RunLogger, StageLog};
use crate::llm::LlmClient;
use crate::search::SearxClient;

use searcher::Searcher;
use summarizer::Summarizer;
use synthesizer::Synthesizer;

/// Cap on hits requested from the search engine per run.
pub const MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Searching,
    Synthesizing,
    Summarizing,
}

impl Stage {
    pub fn step(self) -> usize {
        match self {
            Stage::Searching => 1,
            Stage::Synthesizing => 2,
            Stage::Summarizing => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Searching => "search",
            Stage::Synthesizing => "synthesize",
            Stage::Summarizing => "summarize",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Searching => "Searching for news",
            Stage::Synthesizing => "Synthesizing information",
            Stage::Summarizing => "Creating summary",
        }
    }
}

pub struct Curator {
    searcher: Searcher,
    synthesizer: Synthesizer,
    summarizer: Summarizer,
    search: SearxClient,
    logger: RunLogger,
}

impl Curator {
    pub fn new(config: &Config) -> Result<Self> {
        let llm = LlmClient::new(&config.llm_api_key, &config.llm_base_url);
        let search = SearxClient::new(&config.searx_url);
        let logger = RunLogger::new("logs")?;

        Ok(Self {
            searcher: Searcher::new(llm.clone(), config.model.clone()),
            synthesizer: Synthesizer::new(llm.clone(), config.model.clone()),
            summarizer: Summarizer::new(llm, config.model.clone()),
            search,
            logger,
        })
    }

    /// Runs the three stages in fixed order for one topic. `progress` is
    /// called with each stage before it executes. Any collaborator failure
    /// aborts the whole run; there is no retry and no partial result.
    pub async fn run(
        &self,
        topic: &str,
        verbose: bool,
        mut progress: impl FnMut(Stage),
    ) -> Result<RunLog> {
        let run_start = Instant::now();
        let mut stages: Vec<StageLog> = Vec::new();

        // Step 1: web search, then report the raw results
        progress(Stage::Searching);
        let query = searcher::build_query(topic, chrono::Utc::now().date_naive());

        let search_start = Instant::now();
        let results = self.search.search(&query, MAX_RESULTS).await?;
        let search_latency = search_start.elapsed().as_millis() as u64;
        let num_results = results.len();

        let stage_start = Instant::now();
        let (raw_news, search_response) = self.searcher.report(topic, &results).await?;
        stages.push(StageLog {
            stage: Stage::Searching.name().to_string(),
            latency_ms: stage_start.elapsed().as_millis() as u64,
            input_tokens: search_response.input_tokens,
            output_tokens: search_response.output_tokens,
        });

        if verbose {
            eprintln!(
                "[search] {} results, search={}ms llm={}ms",
                num_results,
                search_latency,
                stages[0].latency_ms
            );
        }

        // Step 2: synthesize
        progress(Stage::Synthesizing);
        let stage_start = Instant::now();
        let (synthesized_news, synth_response) = self.synthesizer.synthesize(&raw_news).await?;
        stages.push(StageLog {
            stage: Stage::Synthesizing.name().to_string(),
            latency_ms: stage_start.elapsed().as_millis() as u64,
            input_tokens: synth_response.input_tokens,
            output_tokens: synth_response.output_tokens,
        });

        if verbose {
            eprintln!("[synthesize] llm={}ms", stages[1].latency_ms);
        }

        // Step 3: summarize
        progress(Stage::Summarizing);
        let stage_start = Instant::now();
        let (final_summary, summary_response) =
            self.summarizer.summarize(&synthesized_news).await?;
        stages.push(StageLog {
            stage: Stage::Summarizing.name().to_string(),
            latency_ms: stage_start.elapsed().as_millis() as u64,
            input_tokens: summary_response.input_tokens,
            output_tokens: summary_response.output_tokens,
        });

        if verbose {
            eprintln!("[summarize] llm={}ms", stages[2].latency_ms);
        }

        let run_log = RunLog {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            topic: topic.to_string(),
            query,
            num_results: num_results as u32,
            search_latency_ms: search_latency,
            total_latency_ms: run_start.elapsed().as_millis() as u64,
            total_input_tokens: stages.iter().map(|s| s.input_tokens).sum(),
            total_output_tokens: stages.iter().map(|s| s.output_tokens).sum(),
            stages,
            raw_news,
            synthesized_news,
            final_summary,
        };

        self.logger.write(&run_log)?;

        Ok(run_log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_ordered_search_synthesize_summarize() {
        assert_eq!(Stage::Searching.step(), 1);
        assert_eq!(Stage::Synthesizing.step(), 2);
        assert_eq!(Stage::Summarizing.step(), 3);
    }

    #[test]
    fn at_most_five_results_are_requested() {
        assert_eq!(MAX_RESULTS, 5);
    }
}
