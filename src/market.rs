// src/market.rs

use crate::agents::Agent;
use crate::error::Result;
use crate::types::order::Order;

/// One side of the market's books, in whatever order the market keeps it.
/// The scheduling core never looks inside; it only moves snapshots around.
pub type Book = Vec<Order>;

/// The `{sellbook, buybook}` pair the world publishes and the market
/// consumes at run entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookSnapshot {
    pub sellbook: Book,
    pub buybook: Book,
}

/// The market collaborator. Matching, clearing and book internals live
/// behind this trait; the engine only orchestrates the calls.
///
/// Implementations signal failure through the returned `Result`; the engine
/// propagates those unmodified, it never retries.
pub trait Market {
    /// Normalize a raw agent order (rounding, clamping, whatever the market
    /// needs) before validation.
    fn sanitize_order(&self, order: Order) -> Order;

    /// May this agent place this (already sanitized) order? A `false` here
    /// is a normal outcome: the engine drops the order silently.
    fn is_valid(&self, agent: &dyn Agent, order: &Order) -> bool;

    /// Record a valid order against the books. `token` is the configured
    /// `unique_by_agent` value, passed through opaquely.
    fn record_order(&mut self, order: Order, tick: u64, token: &str) -> Result<()>;

    /// End-of-day clearing, called exactly once per day with the tick
    /// reached at the end of that day.
    fn do_clearing(&mut self, tick: u64) -> Result<()>;

    /// Reset the books; called after clearing when `clearbooksateod` is set.
    fn clear_books(&mut self) -> Result<()>;

    /// Print/emit the current books, keyed by tick (`showbooks` option).
    fn output_books(&mut self, tick: u64) -> Result<()>;

    fn sellbook(&self) -> &Book;
    fn set_sellbook(&mut self, book: Book);
    fn buybook(&self) -> &Book;
    fn set_buybook(&mut self, book: Book);
}
