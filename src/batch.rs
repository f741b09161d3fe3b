use std::fmt;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use itertools::Itertools;

use crate::catalog::{Catalog, Destination};
use crate::config::Settings;
use crate::downloader::{Downloader, Fetcher, StoredFile};
use crate::error::{ConfigError, DownloadError};
use crate::search::ImageSearch;

/// Keeps at least `delay` between consecutive search requests.
pub struct Pacer {
    delay: Duration,
    last: Option<Instant>,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, last: None }
    }

    pub fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.delay {
                thread::sleep(self.delay - elapsed);
            }
        }

        self.last = Some(Instant::now());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Main,
    Related(usize),
}

impl Slot {
    pub fn file_name(&self) -> String {
        match self {
            Slot::Main => "main.jpg".to_string(),
            Slot::Related(index) => format!("{}.jpg", index),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Main => write!(f, "main image"),
            Slot::Related(index) => write!(f, "related image {}", index),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct SlotOutcome {
    pub destination: String,
    pub slot: Slot,
    pub result: Result<StoredFile, DownloadError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<SlotOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&SlotOutcome, &DownloadError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|err| (o, err)))
    }

    pub fn summary(&self) -> String {
        let failed = self.outcomes.len() - self.succeeded();

        let destinations = self
            .outcomes
            .iter()
            .map(|o| o.destination.as_str())
            .dedup()
            .count();

        format!(
            "{} of {} images saved across {} destinations, {} failed",
            self.succeeded(),
            self.outcomes.len(),
            destinations,
            failed
        )
    }

    pub fn log(&self) {
        log::info!("[BATCH] {}", self.summary());

        for (outcome, err) in self.failures() {
            log::warn!(
                "[BATCH] {} {}: {}",
                outcome.destination,
                outcome.slot.file_name(),
                err
            );
        }
    }
}

/// Walks the catalog one destination at a time, searching and saving a main
/// image plus up to three related images for each.
pub struct Batch<'a, F: Fetcher> {
    search: ImageSearch<&'a F>,
    downloader: Downloader<&'a F>,
    pacer: Pacer,
}

impl<'a, F: Fetcher> Batch<'a, F> {
    pub fn new(fetcher: &'a F, settings: &Settings) -> Result<Self, ConfigError> {
        let search = ImageSearch::new(fetcher, &settings.api_url, &settings.api_key);
        let downloader = Downloader::with_fetcher(&settings.base_dir, fetcher)?;

        log::info!("[BATCH] Saving images under {:?}", downloader.base_dir());

        Ok(Self {
            search,
            downloader,
            pacer: Pacer::new(settings.request_delay),
        })
    }

    pub fn run(&mut self, catalog: &Catalog) -> BatchReport {
        let mut report = BatchReport::default();

        for destination in catalog.destinations() {
            report.outcomes.extend(self.run_destination(destination));
        }

        report
    }

    fn run_destination(&mut self, destination: &Destination) -> Vec<SlotOutcome> {
        log::info!("[BATCH] Processing {}...", destination.id);

        let dir = PathBuf::from(&destination.id);

        let mut outcomes = vec![self.fetch_slot(
            &destination.id,
            &dir,
            Slot::Main,
            destination.main_phrase(),
        )];

        for (index, phrase) in destination.related_phrases() {
            outcomes.push(self.fetch_slot(&destination.id, &dir, Slot::Related(index), phrase));
        }

        outcomes
    }

    fn fetch_slot(&mut self, id: &str, dir: &Path, slot: Slot, phrase: &str) -> SlotOutcome {
        self.pacer.wait();

        let result = self.search.find_image(phrase).and_then(|url| {
            log::info!("[BATCH] Downloading {} for {}", slot, id);
            self.downloader.download(&url, &dir.join(slot.file_name()))
        });

        match &result {
            Ok(stored) => {
                log::debug!("[BATCH] Wrote {} bytes to {:?}", stored.bytes, stored.path)
            }
            Err(err) => {
                log::warn!("[BATCH] Skipping {} for {} ({:?}): {}", slot, id, phrase, err)
            }
        }

        SlotOutcome {
            destination: id.to_string(),
            slot,
            result,
        }
    }
}
