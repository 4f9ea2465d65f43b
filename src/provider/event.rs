use tokio::{
    fs::File,
    io::{AsyncBufReadExt, BufReader},
};
use tracing::info;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::parse_event,
    types::Event_Log,
};

/// Replays newline delimited decoded logs, one event at a time.
#[derive(Debug)]
pub struct Event {
    app_state: AppState<State>,
}

impl Event {
    pub fn new(app_state: AppState<State>) -> Self {
        Self { app_state }
    }

    pub async fn run(&mut self) -> Result<u64, Error> {
        let source = self.app_state.config.events_source.to_owned();
        let file = File::open(&source).await?;
        let mut lines = BufReader::new(file).lines();
        let mut processed = 0;

        info!("Reading events from {}", source);

        while let Some(line) = lines.next_line().await? {
            if self.parse_message(&line).await? {
                processed += 1;
            }
        }

        info!("Processed {} events from {}", processed, source);

        Ok(processed)
    }

    async fn parse_message(&self, line: &str) -> Result<bool, Error> {
        let line = line.trim();

        if line.is_empty() {
            return Ok(false);
        }

        let item = self.to_json(line)?;
        parse_event(&self.app_state, item).await?;

        Ok(true)
    }

    fn to_json(&self, line: &str) -> Result<Event_Log, Error> {
        serde_json::from_str::<Event_Log>(line)
            .map_err(|e| Error::ParseMessage(format!("{}: {}", e, line)))
    }
}
