// src/types/order.rs

use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A directional trade intent. Produced fresh by an agent each time it is
/// sampled, then handed over to the market; immutable after that.
///
/// `direction` is a raw signed integer on purpose: its meaning (which value
/// is a bid, which is an ask) belongs to the Market collaborator, not to the
/// scheduling core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub direction: i32,
    pub price: f64,
    pub quantity: i64,
}

impl Order {
    /// The wire form used by the order log: `direction;price;quantity`.
    pub fn log_line(&self) -> String {
        format!("{};{};{}", self.direction, self.price, self.quantity)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.direction, self.price, self.quantity)
    }
}

impl FromStr for Order {
    type Err = SimError;

    /// Parse one order-log line. Exactly three `;`-separated fields,
    /// `direction;price;quantity`. Anything else is malformed and fatal to
    /// the caller; no fallback order is invented.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| SimError::MalformedOrderLine {
            line: s.to_string(),
            reason,
        };

        let fields: Vec<&str> = s.trim().split(';').collect();
        if fields.len() != 3 {
            return Err(malformed(format!(
                "expected 3 fields, found {}",
                fields.len()
            )));
        }

        let direction: i32 = fields[0]
            .parse()
            .map_err(|_| malformed(format!("bad direction {:?}", fields[0])))?;
        let price: f64 = fields[1]
            .parse()
            .map_err(|_| malformed(format!("bad price {:?}", fields[1])))?;
        let quantity: i64 = fields[2]
            .parse()
            .map_err(|_| malformed(format!("bad quantity {:?}", fields[2])))?;

        Ok(Order {
            direction,
            price,
            quantity,
        })
    }
}
