use crate::*;
use mmx_dto::*;
use mmx_search::*;
use std::future::Future;
use std::time::Duration;

/// Drives a [`Replay`] forward on a fixed interval.
///
/// Each tick consumes one step and hands the resulting frame to a sink.
/// Playback ends when the trace is exhausted or when the `stop` future
/// resolves, in which case the replay is left paused where it was.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    interval: Duration,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(mmx_core::interval())
    }
}

impl Player {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn play<S, F>(
        &self,
        replay: &mut Replay,
        stop: S,
        mut sink: F,
    ) -> Result<Phase, SearchError>
    where
        S: Future<Output = ()>,
        F: FnMut(ApiFrame),
    {
        match replay.phase() {
            Phase::Idle => return Err(SearchError::EmptyTree),
            Phase::Ready => return Err(SearchError::NotSearched),
            Phase::Done => return Err(SearchError::Exhausted),
            Phase::Paused => {
                replay.resume();
            }
            Phase::Running => {}
        }
        log::debug!(
            "playing {} steps every {:?}",
            replay.remaining(),
            self.interval
        );
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        ticker.tick().await;
        tokio::pin!(stop);
        loop {
            tokio::select! {
                biased;
                _ = &mut stop => {
                    replay.pause();
                    log::debug!("playback stopped at step {}", replay.cursor());
                    break;
                }
                _ = ticker.tick() => {
                    if replay.tick().is_some() && let Some(frame) = replay.frame() {
                        sink(frame);
                    }
                    if replay.phase() != Phase::Running {
                        break;
                    }
                }
            }
        }
        Ok(replay.phase())
    }
}
