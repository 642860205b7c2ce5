// src/world.rs

use crate::market::BookSnapshot;

/// The world collaborator: owns the simulation clock and the last published
/// market state. Tick bookkeeping internals are out of scope here; the
/// engine only requires that `advance_tick` bumps the counter by exactly 1.
pub trait World {
    /// Authoritative book state the market is (re)installed from at run
    /// entry.
    fn state(&self) -> BookSnapshot;

    /// Current value of the monotonic period counter.
    fn tick(&self) -> u64;

    /// Advance the clock by one period. The engine calls this exactly once
    /// per period, whether or not the period's order was accepted.
    fn advance_tick(&mut self);

    /// Post-record publication of the market's books, so observers always
    /// see the state as of the last accepted order.
    fn update_last_market_info(&mut self, snapshot: BookSnapshot);

    /// Progress display hook (`timer` option). Pure side effect.
    fn show_time(&self, day: u32, period: u32, total: u64);
}
