use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use stocklog_infra::{InventoryLogger, JsonFilePersistence, LoadOutcome, Persistence};
use stocklog_inventory::{InventoryItem, sample_items};

/// Console-facing wrapper around an inventory logger.
#[derive(Debug)]
pub struct InventoryApp<P = JsonFilePersistence> {
    logger: InventoryLogger<InventoryItem, P>,
}

impl InventoryApp<JsonFilePersistence> {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_persistence(JsonFilePersistence::new(path.as_ref()))
    }
}

impl<P: Persistence> InventoryApp<P> {
    pub fn with_persistence(persistence: P) -> Self {
        Self {
            logger: InventoryLogger::new(persistence),
        }
    }

    /// Add the five sample records, stamped with the current time.
    pub fn seed_sample_data(&mut self) {
        self.seed_sample_data_at(Utc::now());
    }

    pub fn seed_sample_data_at(&mut self, added_at: DateTime<Utc>) {
        for item in sample_items(added_at) {
            self.logger.add(item);
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        self.logger.get_all()
    }

    pub fn save_data<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.logger.save_to_file() {
            Ok(()) => writeln!(out, "Inventory saved to file."),
            Err(err) => writeln!(out, "Error saving to file: {err}"),
        }
    }

    pub fn load_data<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.logger.load_from_file() {
            Ok(LoadOutcome::Loaded { .. }) => writeln!(out, "Inventory loaded from file."),
            Ok(LoadOutcome::NotFound) => writeln!(out, "File not found. No data loaded."),
            Err(err) => writeln!(out, "Error loading from file: {err}"),
        }
    }

    pub fn print_all_items<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Inventory Items:")?;
        for item in self.logger.store() {
            writeln!(out, "{item}")?;
        }
        Ok(())
    }
}

/// Seed, save, restart against the same file, load, print.
pub fn run_demo_session<W: Write>(path: &Path, out: &mut W) -> io::Result<()> {
    let mut app = InventoryApp::new(path);
    app.seed_sample_data();
    app.save_data(out)?;

    writeln!(out)?;
    writeln!(out, "Simulating new session...")?;
    let mut restarted = InventoryApp::new(path);
    restarted.load_data(out)?;
    restarted.print_all_items(out)
}
