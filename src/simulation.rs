//! The Idle/Running simulation state machine.
//!
//! A run owns exactly two lattices. Each tick writes the next generation into
//! the scratch slot and flips which slot is current; nothing is allocated
//! after `start`.

use std::mem;

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::automaton::{
    create_new_generation, create_new_generation_par, generate_field, LatticeView,
};
use crate::config::GameOptions;
use crate::error::SimulationError;
use crate::lattice::Lattice;

/// A caller-owned simulation handle.
///
/// `R` is the source for the initial field; tests inject a seeded RNG.
pub struct Simulation<R = StdRng> {
    rng: R,
    state: RunState,
}

enum RunState {
    Idle,
    Running(Run),
}

/// Everything scoped to one run. Dropped on `stop`.
struct Run {
    options: GameOptions,
    buffers: [Lattice; 2],
    /// Slot holding the current generation; the other slot is scratch.
    current: usize,
    generation: u64,
    pool: Option<rayon::ThreadPool>,
}

impl Run {
    fn current(&self) -> &Lattice {
        &self.buffers[self.current]
    }

    fn view(&self) -> LatticeView<'_> {
        LatticeView::new(self.current(), self.generation)
    }

    fn advance(&mut self) {
        let (left, right) = self.buffers.split_at_mut(1);
        let (prev, next) = if self.current == 0 {
            (&left[0], &mut right[0])
        } else {
            (&right[0], &mut left[0])
        };

        match &self.pool {
            Some(pool) => pool.install(|| {
                create_new_generation_par(prev, next);
            }),
            None => {
                create_new_generation(prev, next);
            }
        }

        self.current ^= 1;
        self.generation += 1;

        // The retired initial field still carries random boundary cells.
        // Kill them once so every later generation has a dead boundary.
        if self.generation == 1 {
            self.buffers[self.current ^ 1].clear_boundary();
        }

        trace!(
            "generation {} population {}",
            self.generation,
            self.current().population()
        );
    }
}

impl Simulation<StdRng> {
    /// Simulation seeded from system entropy.
    pub fn new() -> Self {
        Simulation::with_rng(StdRng::from_entropy())
    }

    /// Simulation with a reproducible initial field.
    pub fn seeded(seed: u64) -> Self {
        Simulation::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Simulation<StdRng> {
    fn default() -> Self {
        Simulation::new()
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(rng: R) -> Self {
        Simulation {
            rng,
            state: RunState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running(_))
    }

    /// Idle → Running.
    ///
    /// Validates `options` before allocating, then generates the initial
    /// field and an all-dead scratch lattice.
    ///
    /// # Errors
    /// - [`SimulationError::AlreadyRunning`] if called while running
    /// - [`SimulationError::Config`] for invalid options
    /// - [`SimulationError::ThreadPool`] if `threads > 1` and rayon fails
    pub fn start(&mut self, options: GameOptions) -> Result<(), SimulationError> {
        if self.is_running() {
            warn!("start called on a running simulation; stop it first");
            return Err(SimulationError::AlreadyRunning);
        }
        options.validate()?;

        let pool = if options.threads > 1 {
            debug!("building transition pool with {} threads", options.threads);
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(options.threads)
                    .build()?,
            )
        } else {
            None
        };

        let (nx, ny, nz) = options.dimensions();
        let current = generate_field(nx, ny, nz, options.density, &mut self.rng);
        let scratch = Lattice::new(nx, ny, nz);

        info!(
            "starting {}x{}x{} simulation at density {}",
            nx, ny, nz, options.density
        );
        debug!("initial population {}", current.population());

        self.state = RunState::Running(Run {
            options,
            buffers: [current, scratch],
            current: 0,
            generation: 0,
            pool,
        });
        Ok(())
    }

    /// Running → Idle, releasing both lattices. No-op when idle.
    pub fn stop(&mut self) {
        if let RunState::Running(run) = mem::replace(&mut self.state, RunState::Idle) {
            info!("stopped after {} generations", run.generation);
        }
    }

    /// Advance one generation and return a view of it. `None` when idle.
    pub fn tick(&mut self) -> Option<LatticeView<'_>> {
        match &mut self.state {
            RunState::Running(run) => {
                run.advance();
                Some(run.view())
            }
            RunState::Idle => None,
        }
    }

    /// View of the current generation without advancing.
    pub fn current(&self) -> Option<LatticeView<'_>> {
        match &self.state {
            RunState::Running(run) => Some(run.view()),
            RunState::Idle => None,
        }
    }

    /// Generations computed in this run; 0 when idle.
    pub fn generation(&self) -> u64 {
        match &self.state {
            RunState::Running(run) => run.generation,
            RunState::Idle => 0,
        }
    }

    pub fn options(&self) -> Option<&GameOptions> {
        match &self.state {
            RunState::Running(run) => Some(&run.options),
            RunState::Idle => None,
        }
    }

    /// Storage addresses of the two run buffers, current first.
    pub fn buffer_ids(&self) -> Option<[usize; 2]> {
        match &self.state {
            RunState::Running(run) => Some([
                run.buffers[run.current].storage_id(),
                run.buffers[run.current ^ 1].storage_id(),
            ]),
            RunState::Idle => None,
        }
    }
}
