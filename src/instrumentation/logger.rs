use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageLog {
    pub stage: String,
    pub latency_ms: u64,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunLog {
    pub id: String,
    pub timestamp: String,
    pub topic: String,
    pub query: String,
    pub num_results: u32,
    pub search_latency_ms: u64,
    pub stages: Vec<StageLog>,
    pub total_latency_ms: u64,
    pub total_input_tokens: u32,
    pub total_output_tokens: u32,
    pub raw_news: String,
    pub synthesized_news: String,
    pub final_summary: String,
}

impl RunLog {
    pub fn total_tokens(&self) -> u32 {
        self.total_input_tokens + self.total_output_tokens
    }

    pub fn summary(&self) -> String {
        format!(
            "Results: {} | Total latency: {:.1}s | Tokens used by LLM: {}",
            self.num_results,
            self.total_latency_ms as f64 / 1000.0,
            self.total_tokens(),
        )
    }
}

pub struct RunLogger {
    dir: PathBuf,
}

impl RunLogger {
    pub fn new(dir: &str) -> Result<Self> {
        let dir = PathBuf::from(dir);
        fs::create_dir_all(&dir).context("Failed to create logs directory")?;
        Ok(Self { dir })
    }

    pub fn write(&self, run_log: &RunLog) -> Result<()> {
        let path = self.dir.join("runs.jsonl");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .context("Failed to open log file")?;

        let json = serde_json::to_string(run_log).context("Failed to serialize run log")?;
        writeln!(file, "{}", json).context("Failed to write log")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_run() -> RunLog {
        RunLog {
            id: "test".into(),
            timestamp: "2026-08-05T00:00:00Z".into(),
            topic: "artificial intelligence".into(),
            query: "artificial intelligence news 2026-08-05".into(),
            num_results: 2,
            search_latency_ms: 40,
            stages: vec![
                StageLog {
                    stage: "search".into(),
                    latency_ms: 900,
                    input_tokens: 100,
                    output_tokens: 50,
                },
                StageLog {
                    stage: "synthesize".into(),
                    latency_ms: 1200,
                    input_tokens: 200,
                    output_tokens: 80,
                },
            ],
            total_latency_ms: 2500,
            total_input_tokens: 300,
            total_output_tokens: 130,
            raw_news: "raw".into(),
            synthesized_news: "synth".into(),
            final_summary: "summary".into(),
        }
    }

    #[test]
    fn total_tokens_sums_input_and_output() {
        assert_eq!(sample_run().total_tokens(), 430);
    }

    #[test]
    fn summary_reports_results_latency_and_tokens() {
        assert_eq!(
            sample_run().summary(),
            "Results: 2 | Total latency: 2.5s | Tokens used by LLM: 430"
        );
    }
}
