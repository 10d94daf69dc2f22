use super::factories::{PageBodyFactory, RecordFactory, ScriptedFetcher};

pub struct Factory;

impl Factory {
    pub fn page_body() -> PageBodyFactory {
        PageBodyFactory::new()
    }

    pub fn record() -> RecordFactory {
        RecordFactory::new()
    }

    pub fn scripted_fetcher() -> ScriptedFetcher {
        ScriptedFetcher::new()
    }
}
