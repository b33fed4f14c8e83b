use crate::{Grid, SharedGame};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, MutexGuard,
    },
    time::Duration,
};
use futures::FutureExt;
use tokio::{sync::Notify, task::JoinHandle};
use tracing::{debug, trace, warn};

/// Receives the current grid after every generation.
pub type GridCallback<G> = Box<dyn FnMut(&G) + Send>;
/// Receives the iteration count after every generation.
pub type IterationCallback = Box<dyn FnMut(u64) + Send>;

/// Parameters of a [`LifeRunner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeControl {
    interval: Duration,
}

impl LifeControl {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
        }
    }

    /// Pause between two generations.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Advances a shared game on a fixed interval until cancelled.
///
/// Every tick runs one transition, then calls the grid callback and the
/// iteration callback in this order, then sleeps. The loop stops when the
/// run flag is cleared (checked before each tick) or when [`interrupt`] is
/// signalled (ends the current sleep without another transition).
///
/// Callbacks run on the runner's task while the game is locked, so they must
/// not lock the game themselves. To run again after the loop ended, raise the
/// run flag with [`set_running`](LifeRunner::set_running) first.
///
/// [`interrupt`]: LifeRunner::interrupt
pub struct LifeRunner<G: Grid> {
    control: LifeControl,
    game: SharedGame<G>,
    grid_callback: Arc<Mutex<GridCallback<G>>>,
    iteration_callback: Arc<Mutex<IterationCallback>>,
    run: Arc<AtomicBool>,
    interrupt: Arc<Notify>,
}

impl<G: Grid> Clone for LifeRunner<G> {
    fn clone(&self) -> Self {
        Self {
            control: self.control,
            game: Arc::clone(&self.game),
            grid_callback: Arc::clone(&self.grid_callback),
            iteration_callback: Arc::clone(&self.iteration_callback),
            run: Arc::clone(&self.run),
            interrupt: Arc::clone(&self.interrupt),
        }
    }
}

impl<G: Grid> LifeRunner<G> {
    pub fn new(control: LifeControl, game: SharedGame<G>) -> Self {
        let on_grid: GridCallback<G> = Box::new(|_: &G| {});
        let on_iteration: IterationCallback = Box::new(|_: u64| {});
        Self {
            control,
            game,
            grid_callback: Arc::new(Mutex::new(on_grid)),
            iteration_callback: Arc::new(Mutex::new(on_iteration)),
            run: Arc::new(AtomicBool::new(true)),
            interrupt: Arc::new(Notify::new()),
        }
    }

    pub fn control(&self) -> LifeControl {
        self.control
    }

    pub fn game(&self) -> &SharedGame<G> {
        &self.game
    }

    /// Takes effect from the next tick on.
    ///
    /// Must not be called from inside the grid callback itself.
    pub fn set_grid_callback(&self, callback: impl FnMut(&G) + Send + 'static) {
        *lock(&self.grid_callback) = Box::new(callback);
    }

    /// Takes effect from the next tick on.
    ///
    /// Must not be called from inside the iteration callback itself.
    pub fn set_iteration_callback(&self, callback: impl FnMut(u64) + Send + 'static) {
        *lock(&self.iteration_callback) = Box::new(callback);
    }

    pub fn is_running(&self) -> bool {
        self.run.load(Ordering::Relaxed)
    }

    /// Clearing the flag stops the loop before its next transition.
    ///
    /// Raising a cleared flag starts a new session: an interrupt left over
    /// from the previous one is dropped.
    pub fn set_running(&self, run: bool) {
        let was_running = self.run.swap(run, Ordering::Relaxed);
        if run && !was_running && self.interrupt.notified().now_or_never().is_some() {
            debug!("dropped interrupt left over from the previous session");
        }
    }

    /// Ends the current sleep and the loop with it.
    ///
    /// If the loop is not sleeping, the signal is kept and ends the next sleep.
    pub fn interrupt(&self) {
        self.interrupt.notify_one();
    }

    /// Clears the run flag and interrupts the sleep.
    pub fn stop(&self) {
        self.set_running(false);
        self.interrupt();
    }

    /// Runs one transition and publishes it. Returns the new iteration count.
    pub fn tick(&self) -> u64 {
        let mut game = lock(&self.game);
        game.transition();
        let iteration = game.iteration();
        {
            let mut on_grid = lock(&self.grid_callback);
            (*on_grid)(game.current());
        }
        drop(game);
        let mut on_iteration = lock(&self.iteration_callback);
        (*on_iteration)(iteration);
        iteration
    }

    /// Ticks until the run flag is cleared or an interrupt arrives.
    ///
    /// An interrupt sent before `run` is called is kept and ends the first
    /// sleep, unless the run flag was cleared and raised again in between.
    pub async fn run(&self) {
        debug!(interval = ?self.control.interval(), "life runner started");
        while self.is_running() {
            let iteration = self.tick();
            trace!(iteration, "generation published");
            tokio::select! {
                biased;
                _ = self.interrupt.notified() => {
                    debug!(iteration, "life runner interrupted");
                    return;
                }
                _ = tokio::time::sleep(self.control.interval()) => {}
            }
        }
        debug!("life runner stopped");
    }

    /// Starts [`run`](LifeRunner::run) as a background task.
    pub fn spawn(&self) -> JoinHandle<()>
    where
        G: Send + 'static,
    {
        let runner = self.clone();
        tokio::spawn(async move { runner.run().await })
    }
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        warn!("lock poisoned by a panicking holder, recovering");
        poisoned.into_inner()
    })
}
