// src/agents/mod.rs

pub mod order_log;

use crate::error::Result;
use crate::types::order::Order;

/// The one capability the engine needs from a market participant.
///
/// Whatever the decision logic is (log replay, zero-intelligence, anything
/// else an embedder plugs in), the engine samples an agent and asks it for
/// exactly one order. Errors propagate; there is no retry and no fallback
/// order.
pub trait Agent {
    fn produce_order(&mut self) -> Result<Order>;
}
