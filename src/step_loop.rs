//! Frame-driven stepping.
//!
//! The host owns the display cadence. It asks a [`FrameScheduler`] for frame
//! callbacks and delivers each one to [`StepLoop::on_frame`], which ticks the
//! simulation once and hands the result to a [`Renderer`]. The next frame is
//! requested only after the tick body returns, so ticks never overlap.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;

use crate::automaton::LatticeView;
use crate::config::GameOptions;
use crate::error::SimulationError;
use crate::simulation::Simulation;

/// Handle for one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// Source of frame callbacks (an animation-frame API, a vsync timer, a test).
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameId;
    fn cancel_frame(&mut self, id: FrameId);
}

/// Consumer of each new generation.
pub trait Renderer {
    fn render(&mut self, view: LatticeView<'_>);
}

impl<F> Renderer for F
where
    F: FnMut(LatticeView<'_>),
{
    fn render(&mut self, view: LatticeView<'_>) {
        self(view)
    }
}

/// Queue-backed scheduler for headless hosts and tests.
///
/// Frames fire only when the owner calls [`ManualScheduler::pop`] (or
/// [`StepLoop::fire_next`]).
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    queue: VecDeque<FrameId>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of outstanding frame requests.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Take the oldest outstanding frame.
    pub fn pop(&mut self) -> Option<FrameId> {
        self.queue.pop_front()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.queue.push_back(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.queue.retain(|&queued| queued != id);
    }
}

/// A [`Simulation`] driven by frame callbacks.
pub struct StepLoop<S, R = StdRng> {
    simulation: Simulation<R>,
    scheduler: S,
    pending: Option<FrameId>,
}

impl<S: FrameScheduler, R: Rng> StepLoop<S, R> {
    pub fn new(simulation: Simulation<R>, scheduler: S) -> Self {
        StepLoop {
            simulation,
            scheduler,
            pending: None,
        }
    }

    /// Start the simulation and request the first frame.
    pub fn start(&mut self, options: GameOptions) -> Result<(), SimulationError> {
        self.simulation.start(options)?;
        self.pending = Some(self.scheduler.request_frame());
        Ok(())
    }

    /// Cancel the outstanding frame and stop the simulation. Idempotent.
    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel_frame(id);
        }
        self.simulation.stop();
    }

    /// Stop, then start with new options. Used when dimensions change.
    pub fn restart(&mut self, options: GameOptions) -> Result<(), SimulationError> {
        self.stop();
        self.start(options)
    }

    /// Handle a frame callback.
    ///
    /// Stale or cancelled ids are ignored. Otherwise ticks once, renders, and
    /// requests the next frame. Returns whether a tick ran.
    pub fn on_frame<Re>(&mut self, id: FrameId, renderer: &mut Re) -> bool
    where
        Re: Renderer + ?Sized,
    {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;

        let view = match self.simulation.tick() {
            Some(view) => view,
            None => return false,
        };
        renderer.render(view);

        self.pending = Some(self.scheduler.request_frame());
        true
    }

    pub fn is_running(&self) -> bool {
        self.simulation.is_running()
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.simulation
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The outstanding frame request, if any.
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.pending
    }
}

impl<R: Rng> StepLoop<ManualScheduler, R> {
    /// Fire the oldest queued frame. Returns whether a tick ran.
    pub fn fire_next<Re>(&mut self, renderer: &mut Re) -> bool
    where
        Re: Renderer + ?Sized,
    {
        match self.scheduler.pop() {
            Some(id) => self.on_frame(id, renderer),
            None => false,
        }
    }

    /// Fire up to `frames` frames, stopping early once the queue drains.
    /// Returns the number of ticks run.
    pub fn run_frames<Re>(&mut self, frames: usize, renderer: &mut Re) -> usize
    where
        Re: Renderer + ?Sized,
    {
        let mut ticks = 0;
        for _ in 0..frames {
            if !self.fire_next(renderer) {
                break;
            }
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn step_loop() -> StepLoop<ManualScheduler, ChaCha8Rng> {
        let _ = env_logger::builder().is_test(true).try_init();
        let sim = Simulation::with_rng(ChaCha8Rng::seed_from_u64(17));
        StepLoop::new(sim, ManualScheduler::new())
    }

    fn options(n: usize) -> GameOptions {
        GameOptions::builder().cells(n, n, n).build().unwrap()
    }

    #[test]
    fn test_start_requests_one_frame() {
        let mut lp = step_loop();
        assert_eq!(lp.scheduler().pending(), 0);
        lp.start(options(8)).unwrap();
        assert_eq!(lp.scheduler().pending(), 1);
        assert!(lp.pending_frame().is_some());
    }

    #[test]
    fn test_each_frame_ticks_and_renders_once() {
        let mut lp = step_loop();
        lp.start(options(8)).unwrap();

        let mut generations = Vec::new();
        let mut renderer = |view: LatticeView<'_>| generations.push(view.generation());
        let ticks = lp.run_frames(5, &mut renderer);

        assert_eq!(ticks, 5);
        assert_eq!(generations, vec![1, 2, 3, 4, 5]);
        // Exactly one frame outstanding after each tick
        assert_eq!(lp.scheduler().pending(), 1);
    }

    #[test]
    fn test_stop_cancels_pending_frame() {
        let mut lp = step_loop();
        lp.start(options(8)).unwrap();
        let stale = lp.pending_frame().unwrap();

        lp.stop();
        assert!(!lp.is_running());
        assert_eq!(lp.scheduler().pending(), 0);

        let mut rendered = 0;
        let mut renderer = |_: LatticeView<'_>| rendered += 1;
        assert!(!lp.on_frame(stale, &mut renderer));
        assert!(!lp.fire_next(&mut renderer));
        assert_eq!(rendered, 0);

        // Stop again is harmless
        lp.stop();
    }

    #[test]
    fn test_stale_frame_after_restart_ignored() {
        let mut lp = step_loop();
        lp.start(options(10)).unwrap();
        let old = lp.pending_frame().unwrap();

        lp.restart(options(20)).unwrap();
        let mut dims = Vec::new();
        let mut renderer = |view: LatticeView<'_>| dims.push(view.dimensions());

        assert!(!lp.on_frame(old, &mut renderer));
        assert!(lp.fire_next(&mut renderer));
        assert_eq!(dims, vec![(20, 20, 20)]);
        assert_eq!(lp.simulation().generation(), 1);
    }

    #[test]
    fn test_struct_renderer() {
        struct Counter {
            frames: usize,
            live: usize,
        }

        impl Renderer for Counter {
            fn render(&mut self, view: LatticeView<'_>) {
                self.frames += 1;
                self.live = view.live_positions().count();
            }
        }

        let mut lp = step_loop();
        lp.start(options(12)).unwrap();
        let mut counter = Counter { frames: 0, live: 0 };
        lp.run_frames(3, &mut counter);

        assert_eq!(counter.frames, 3);
        assert_eq!(
            counter.live,
            lp.simulation().current().unwrap().population()
        );
    }
}
