// src/engine.rs

use crate::agents::Agent;
use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::market::{BookSnapshot, Market};
use crate::types::order::Order;
use crate::world::World;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Synchronous scheduling engine: samples agents uniformly at random (with
/// replacement) and lets them speak on the market, one per period. After
/// each day of `daylength` periods it calls the market's clearing.
///
/// The engine owns its own PRNG. Seed it through `randomseed` in the config
/// and two runs over the same agent pool replay the same sampling sequence.
pub struct SimulationEngine {
    config: SimulationConfig,
    rank: usize,
    rng: StdRng,
    orders_log: Option<BufWriter<File>>,
}

impl SimulationEngine {
    /// Build an engine from its configuration. `offset` is the engine's rank
    /// when several engines are stacked; this core runs exactly one.
    ///
    /// Opens the configured `orderslogfile` for writing, so a bad path fails
    /// here rather than mid-run.
    pub fn new(config: SimulationConfig, offset: usize) -> Result<Self> {
        let rng = match config.randomseed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let orders_log = match &config.orderslogfile {
            Some(path) => Some(BufWriter::new(File::create(path)?)),
            None => None,
        };
        Ok(Self {
            config,
            rank: offset,
            rng,
            orders_log,
        })
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Append a valid order to the orders log, in the same
    /// `direction;price;quantity` form the log-replay agent reads.
    fn output_order(&mut self, order: &Order) -> Result<()> {
        if let Some(log) = self.orders_log.as_mut() {
            writeln!(log, "{}", order.log_line())?;
        }
        Ok(())
    }

    /// Drive the whole simulation: `days * daylength` periods, one clearing
    /// per day. Any error from an agent or a collaborator aborts the run
    /// as-is; invalid orders are dropped silently and cost nothing but the
    /// period.
    pub fn run(
        &mut self,
        world: &mut dyn World,
        agents: &mut [Box<dyn Agent>],
        market: &mut dyn Market,
    ) -> Result<()> {
        if agents.is_empty() {
            return Err(SimError::EmptyAgentPool);
        }

        // The world's snapshot is authoritative at run entry; whatever the
        // market held before is stale.
        let start = world.state();
        market.set_sellbook(start.sellbook);
        debug!("starting with sellbook {:?}", market.sellbook());
        market.set_buybook(start.buybook);
        debug!("starting with buybook {:?}", market.buybook());

        let total = self.config.total_periods();
        for day in 0..self.config.days {
            for period in 0..self.config.daylength {
                let sampled = self.rng.gen_range(0..agents.len());
                let order = market.sanitize_order(agents[sampled].produce_order()?);
                if market.is_valid(agents[sampled].as_ref(), &order) {
                    self.output_order(&order)?;
                    market.record_order(order, world.tick(), &self.config.unique_by_agent)?;
                    if self.config.showbooks {
                        market.output_books(world.tick())?;
                    }
                    world.update_last_market_info(BookSnapshot {
                        sellbook: market.sellbook().clone(),
                        buybook: market.buybook().clone(),
                    });
                }
                // Tick advances whether or not the order was accepted.
                world.advance_tick();
                if self.config.timer {
                    world.show_time(day, period, total);
                }
            }
            market.do_clearing(world.tick())?;
            if self.config.clearbooksateod {
                market.clear_books()?;
            }
        }

        if let Some(log) = self.orders_log.as_mut() {
            log.flush()?;
        }
        debug!("ending with sellbook {:?}", market.sellbook());
        debug!("ending with buybook {:?}", market.buybook());
        Ok(())
    }
}
