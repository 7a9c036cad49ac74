//! Book loading from a textual snapshot source.
//!
//! The source is drained completely before any validation happens: the
//! empty-side and crossed-book checks need the whole record set.

use crate::record::parse_record;
use obstats_core::{Error, LoaderConfig, Order, OrderBook, Result, Side};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Counters describing one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Whether a first line was discarded as header.
    pub header_skipped: bool,
    /// Records parsed into orders.
    pub records: usize,
    /// Whitespace-only lines skipped.
    pub blank_lines: usize,
    /// Orders on the bid side.
    pub bids: usize,
    /// Orders on the ask side.
    pub asks: usize,
}

/// Loads and validates order book snapshots.
#[derive(Debug, Clone, Default)]
pub struct BookLoader {
    config: LoaderConfig,
}

impl BookLoader {
    /// Create a new loader.
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a book from in-memory text.
    pub fn load_str(&self, text: &str) -> Result<OrderBook> {
        self.load_str_with_summary(text).map(|(book, _)| book)
    }

    /// Load a book from in-memory text, also returning load counters.
    pub fn load_str_with_summary(&self, text: &str) -> Result<(OrderBook, LoadSummary)> {
        let mut summary = LoadSummary::default();
        let mut lines = text.lines().enumerate();

        if self.config.has_header {
            // Discarded whatever it contains.
            if let Some((_, header)) = lines.next() {
                debug!(header, "skipping header line");
                summary.header_skipped = true;
            }
        }

        let mut orders: Vec<Order> = Vec::new();
        for (idx, line) in lines {
            let line_number = idx + 1;
            if line.trim().is_empty() {
                summary.blank_lines += 1;
                continue;
            }
            orders.push(parse_record(line, line_number)?);
        }

        summary.records = orders.len();
        summary.bids = orders.iter().filter(|o| o.side == Side::Bid).count();
        summary.asks = summary.records - summary.bids;
        debug!(
            records = summary.records,
            bids = summary.bids,
            asks = summary.asks,
            blank_lines = summary.blank_lines,
            "parsed snapshot records"
        );

        let book = OrderBook::from_orders(orders)?;
        info!(
            best_bid = book.best_bid(),
            best_ask = book.best_ask(),
            orders = book.len(),
            "order book loaded"
        );

        Ok((book, summary))
    }

    /// Drain a reader and load a book from its contents.
    ///
    /// `source_name` identifies the source in error messages.
    pub fn load_reader<R: Read>(&self, reader: R, source_name: &str) -> Result<OrderBook> {
        self.load_reader_with_summary(reader, source_name)
            .map(|(book, _)| book)
    }

    /// Drain a reader and load a book, also returning load counters.
    pub fn load_reader_with_summary<R: Read>(
        &self,
        mut reader: R,
        source_name: &str,
    ) -> Result<(OrderBook, LoadSummary)> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| Error::source_unavailable(source_name, e))?;
        self.load_str_with_summary(&text)
    }

    /// Load a book from a file.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<OrderBook> {
        self.load_path_with_summary(path).map(|(book, _)| book)
    }

    /// Load a book from a file, also returning load counters.
    pub fn load_path_with_summary(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<(OrderBook, LoadSummary)> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::source_unavailable(&source_name, e))?;
        debug!(source = %source_name, "reading snapshot");
        self.load_reader_with_summary(BufReader::new(file), &source_name)
    }
}
