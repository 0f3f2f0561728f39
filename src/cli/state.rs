use chrono::{Local, NaiveDate};

use crate::config::{Config, ConfigManager};
use crate::domain::{OversellPolicy, Venue};
use crate::storage::JsonStorage;

use super::{output, CliError};

/// Mutable session state: the open venue, the date cursor, the store, and the
/// persisted configuration.
pub struct ShellState {
    pub store: JsonStorage,
    pub config: Config,
    pub venue: Venue,
    pub date: NaiveDate,
    manager: ConfigManager,
}

impl ShellState {
    pub fn new() -> Result<Self, CliError> {
        let store = JsonStorage::new_default()?;
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let venue = config
            .last_venue
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(Venue::Bar);
        Ok(Self {
            store,
            config,
            venue,
            date: Local::now().date_naive(),
            manager,
        })
    }

    pub fn prompt(&self) -> String {
        format!("{} {} > ", self.venue.resource(), self.date)
    }

    pub fn open(&mut self, venue: Venue, date: Option<NaiveDate>) {
        self.venue = venue;
        if let Some(date) = date {
            self.date = date;
        }
        self.config.last_venue = Some(venue.resource().to_string());
        self.persist_config();
    }

    pub fn set_policy(&mut self, policy: OversellPolicy) {
        self.config.oversell_policy = policy;
        self.persist_config();
    }

    pub fn policy(&self) -> OversellPolicy {
        self.config.oversell_policy
    }

    fn persist_config(&self) {
        if let Err(err) = self.manager.save(&self.config) {
            output::warn(&format!("could not save configuration: {}", err));
        }
    }
}
