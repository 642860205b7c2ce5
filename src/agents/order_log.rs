// src/agents/order_log.rs

//! Log-replay agent: takes its decisions from an order log file.
//!
//! The log is one global, sequential order tape. Every agent constructed
//! against the same filename resolves to the *same* open cursor, so whichever
//! instance happens to be sampled consumes the next line; there is no
//! per-instance read position. The registry below makes that sharing explicit
//! in the types instead of hiding it in shared instance state.

use crate::agents::Agent;
use crate::error::{Result, SimError};
use crate::types::order::Order;
use log::debug;
use once_cell::sync::OnceCell;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One open order log: file handle plus read position. At most one of these
/// exists per filename for the whole process; it is dropped only at process
/// teardown.
#[derive(Debug)]
pub struct OrderLogCursor {
    reader: BufReader<File>,
}

/// Handle to a process-shared cursor. Clones point at the same position.
pub type SharedCursor = Arc<Mutex<OrderLogCursor>>;

static OPEN_LOGS: OnceCell<RwLock<HashMap<PathBuf, SharedCursor>>> = OnceCell::new();

impl OrderLogCursor {
    fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        debug!("opened order log {}", path.display());
        Ok(Self {
            reader: BufReader::new(file),
        })
    }

    /// Advance past comment lines and parse the next order.
    ///
    /// Reading past the last line is `OrderLogExhausted`, which is fatal to
    /// this call just like a malformed line, only distinguishable.
    pub fn next_order(&mut self) -> Result<Order> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(SimError::OrderLogExhausted);
            }
            if line.starts_with('#') {
                continue;
            }
            return line.parse();
        }
    }
}

/// Look up (or open, once) the process-wide cursor for `path`.
pub fn shared_cursor(path: &Path) -> Result<SharedCursor> {
    let registry = OPEN_LOGS.get_or_init(|| RwLock::new(HashMap::new()));
    if let Some(cursor) = registry.read().get(path) {
        return Ok(cursor.clone());
    }
    let mut map = registry.write();
    // A racing constructor may have opened it between our read and write.
    if let Some(cursor) = map.get(path) {
        return Ok(cursor.clone());
    }
    let cursor = Arc::new(Mutex::new(OrderLogCursor::open(path)?));
    map.insert(path.to_path_buf(), cursor.clone());
    Ok(cursor)
}

#[derive(Debug)]
pub struct OrderLogAgent {
    cursor: SharedCursor,
}

impl OrderLogAgent {
    /// Build from the agent's positional argument list. The first argument
    /// is the log filename; without it construction fails immediately.
    pub fn new(args: &[String]) -> Result<Self> {
        let filename = args
            .first()
            .ok_or(SimError::MissingParameter("filename"))?;
        Self::from_path(Path::new(filename))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self {
            cursor: shared_cursor(path)?,
        })
    }
}

impl Agent for OrderLogAgent {
    fn produce_order(&mut self) -> Result<Order> {
        self.cursor.lock().next_order()
    }
}
