//! Concurrency driver.
//!
//! One OS thread per actor, each looping tick → redraw request → wait one
//! tick interval on the stop channel. Dropping the stop sender wakes every
//! thread at once. Redraw requests go through a single-slot [`RedrawSignal`]
//! that coalesces bursts instead of blocking the producing actor.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TrySendError, bounded};
use tracing::{debug, info, warn};

use crate::game::{ActorId, Game, TickOutcome};

/// Producer side of the redraw channel.
#[derive(Debug, Clone)]
pub struct RedrawSignal {
    tx: Sender<()>,
}

/// Consumer side of the redraw channel.
#[derive(Debug)]
pub struct RedrawReceiver {
    rx: Receiver<()>,
}

/// Create a connected redraw signal pair.
#[must_use]
pub fn redraw_channel() -> (RedrawSignal, RedrawReceiver) {
    let (tx, rx) = bounded(1);
    (RedrawSignal { tx }, RedrawReceiver { rx })
}

impl RedrawSignal {
    /// Request a redraw without blocking.
    ///
    /// Returns `false` if a request was already pending (the two coalesce)
    /// or the consumer is gone.
    pub fn request(&self) -> bool {
        match self.tx.try_send(()) {
            Ok(()) => true,
            Err(TrySendError::Full(())) => false,
            Err(TrySendError::Disconnected(())) => {
                debug!("redraw consumer gone");
                false
            }
        }
    }
}

impl RedrawReceiver {
    /// Take the pending request, if any.
    pub fn try_take(&self) -> bool {
        self.rx.try_recv().is_ok()
    }
}

/// Handles of the running actor threads.
#[derive(Debug)]
pub struct ActorThreads {
    /// Never sent on; dropping it disconnects every actor's receiver.
    stop: Sender<()>,
    handles: Vec<JoinHandle<()>>,
}

impl ActorThreads {
    /// Number of running threads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no thread was spawned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Stop every thread and wait for it to finish.
    ///
    /// Sleeping threads wake as soon as the stop channel closes; a thread in
    /// the middle of a tick finishes that tick first.
    pub fn stop_and_join(self) {
        let Self { stop, handles } = self;
        drop(stop);
        for handle in handles {
            if handle.join().is_err() {
                warn!("actor thread panicked");
            }
        }
        info!("actor threads stopped");
    }
}

/// Spawn one thread per actor of `game`.
///
/// # Errors
///
/// Returns an error if the OS refuses to create a thread. Threads already
/// spawned are stopped and joined before returning.
pub fn spawn_actors(
    game: &Arc<Game>,
    redraw: &RedrawSignal,
    tick_interval: Duration,
) -> io::Result<ActorThreads> {
    let (stop_tx, stop_rx) = bounded::<()>(0);
    let mut threads = ActorThreads {
        stop: stop_tx,
        handles: Vec::new(),
    };

    for id in game.actor_ids() {
        let game = Arc::clone(game);
        let redraw = redraw.clone();
        let stop = stop_rx.clone();
        let spawned = thread::Builder::new()
            .name(id.to_string())
            .spawn(move || run_actor(&game, id, &redraw, &stop, tick_interval));
        match spawned {
            Ok(handle) => threads.handles.push(handle),
            Err(e) => {
                threads.stop_and_join();
                return Err(e);
            }
        }
    }

    info!(actors = threads.len(), "actor threads started");
    Ok(threads)
}

/// Body of one actor thread.
fn run_actor(game: &Game, id: ActorId, redraw: &RedrawSignal, stop: &Receiver<()>, interval: Duration) {
    debug!(actor = %id, "actor loop started");
    loop {
        let outcome = game.tick_actor(id);
        if outcome != TickOutcome::Halted {
            redraw.request();
        }
        match stop.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    debug!(actor = %id, "actor loop finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redraw_requests_coalesce() {
        let (signal, receiver) = redraw_channel();
        assert!(signal.request());
        assert!(!signal.request());
        assert!(!signal.clone().request());
        assert!(receiver.try_take());
        assert!(!receiver.try_take());
        assert!(signal.request());
        assert!(receiver.try_take());
    }

    #[test]
    fn test_request_after_consumer_dropped() {
        let (signal, receiver) = redraw_channel();
        drop(receiver);
        assert!(!signal.request());
    }
}
