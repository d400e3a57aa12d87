use crate::game::GameEvent;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Game event stamped with when it happened
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Milliseconds since the log was created
    pub timestamp_ms: u64,
    /// Tick on which the event was produced
    pub tick: u64,
    pub event: GameEvent,
}

/// Session event recorder
pub struct EventLog {
    start_time: Instant,
    events: Vec<LoggedEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog {
            start_time: Instant::now(),
            events: Vec::new(),
        }
    }

    pub fn record(&mut self, tick: u64, event: GameEvent) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.events.push(LoggedEvent {
            timestamp_ms,
            tick,
            event,
        });
    }

    pub fn record_all(&mut self, tick: u64, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.record(tick, event);
        }
    }

    pub fn get_events(&self) -> &[LoggedEvent] {
        &self.events
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.events)
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Print log to console
    pub fn print(&self) {
        println!("\n=== Event Log ({} events) ===", self.events.len());
        for (i, logged) in self.events.iter().enumerate() {
            println!("[{:6}ms] tick {:6} #{:3} {:?}", logged.timestamp_ms, logged.tick, i + 1, logged.event);
        }
        println!("=== End of Log ===\n");
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut completed = 0;
        let mut highest_level = 1;
        let mut largest_maze = 0;

        for logged in &self.events {
            match &logged.event {
                GameEvent::LevelComplete { .. } => completed += 1,
                GameEvent::LevelStarted { level, maze_size } => {
                    highest_level = highest_level.max(*level);
                    largest_maze = largest_maze.max(*maze_size);
                }
            }
        }

        let duration = self.events.last().map_or(0, |last| last.timestamp_ms);

        format!(
            "Session Duration: {}ms\n\
             Levels Completed: {}\n\
             Highest Level: {} (largest maze {}x{})",
            duration, completed, highest_level, largest_maze, largest_maze
        )
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_levels() {
        let mut log = EventLog::new();
        log.record(0, GameEvent::LevelStarted { level: 1, maze_size: 5 });
        log.record_all(
            120,
            vec![
                GameEvent::LevelComplete { level: 1 },
                GameEvent::LevelStarted { level: 2, maze_size: 6 },
            ],
        );

        assert_eq!(log.get_events().len(), 3);
        assert_eq!(log.get_events()[1].tick, 120);
        let summary = log.summary();
        assert!(summary.contains("Levels Completed: 1"));
        assert!(summary.contains("Highest Level: 2 (largest maze 6x6)"));
    }

    #[test]
    fn test_json_export() {
        let mut log = EventLog::new();
        log.record(7, GameEvent::LevelComplete { level: 3 });
        let json = log.to_json().unwrap();
        let parsed: Vec<LoggedEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].event, GameEvent::LevelComplete { level: 3 });
        assert_eq!(parsed[0].tick, 7);
    }
}
