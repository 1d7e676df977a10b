use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use news_core::{DebounceToken, Effect, Msg};
use news_engine::{EngineEvent, EngineHandle};
use news_logging::{news_debug, news_info, news_warn};

pub struct EffectRunner {
    engine: EngineHandle,
    debounce: DebounceTimer,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        Self {
            engine,
            debounce: DebounceTimer::spawn(msg_tx.clone()),
            msg_tx,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { request_id, url } => {
                    news_info!("FetchPage request_id={} url={}", request_id, url);
                    self.engine.fetch_page(request_id, url);
                }
                Effect::ScheduleSearchCommit { token, delay } => {
                    self.debounce.schedule(token, delay);
                }
            }
        }
    }

    /// Forwards finished engine work into the message channel.
    pub fn pump_engine(&self) {
        while let Some(event) = self.engine.try_recv() {
            let _ = self.msg_tx.send(map_event(event));
        }
    }
}

/// One timer thread for the search box. Scheduling replaces the armed
/// token, so only the latest keystroke's token is ever delivered.
struct DebounceTimer {
    tx: mpsc::Sender<(DebounceToken, Duration)>,
}

impl DebounceTimer {
    fn spawn(msg_tx: mpsc::Sender<Msg>) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || run_debounce(rx, msg_tx));
        Self { tx }
    }

    fn schedule(&self, token: DebounceToken, delay: Duration) {
        if self.tx.send((token, delay)).is_err() {
            news_warn!("Debounce timer stopped; search token {} dropped", token);
        }
    }
}

fn run_debounce(rx: mpsc::Receiver<(DebounceToken, Duration)>, msg_tx: mpsc::Sender<Msg>) {
    let mut armed: Option<(DebounceToken, Instant)> = None;
    loop {
        let next = match armed {
            Some((_, deadline)) => {
                rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match next {
            Ok((token, delay)) => armed = Some((token, Instant::now() + delay)),
            Err(RecvTimeoutError::Timeout) => {
                if let Some((token, _)) = armed.take() {
                    if msg_tx.send(Msg::SearchDebounceElapsed { token }).is_err() {
                        return;
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { request_id, result } => match result {
            Ok(page) => {
                news_debug!(
                    "Page {} arrived for request {} ({} articles)",
                    page.current_page,
                    request_id,
                    page.data.len()
                );
                Msg::PageFetched { request_id, page }
            }
            Err(err) => {
                news_warn!("Request {} failed: {}", request_id, err);
                Msg::PageFetchFailed {
                    request_id,
                    reason: err.to_string(),
                }
            }
        },
    }
}
