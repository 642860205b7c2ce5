// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod agents;
pub mod config;
pub mod engine;
pub mod error;
pub mod market;
pub mod types;
pub mod world;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `agents` ---
pub use agents::Agent;
pub use agents::order_log::{OrderLogAgent, OrderLogCursor, SharedCursor};

// --- From `config` ---
pub use config::SimulationConfig;

// --- From `engine` ---
pub use engine::SimulationEngine;

// --- From `error` ---
pub use error::{Result, SimError};

// --- From `market` ---
pub use market::{Book, BookSnapshot, Market};

// --- From `types` ---
pub use types::order::Order;

// --- From `world` ---
pub use world::World;
