use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::Context;
use news_core::{update, Msg, Page, TableState, TableViewModel, TimestampFormat};
use news_engine::{EngineHandle, PageSource};
use news_logging::{news_info, news_warn};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use super::effects::EffectRunner;
use super::ui::keys::{Action, Controller};
use super::ui::render;

const EVENT_POLL: Duration = Duration::from_millis(50);

/// Runs the interactive table against `source`, starting at `initial_url`.
pub fn run_browser(
    source: Arc<dyn PageSource>,
    initial_url: &str,
    timestamp_format: TimestampFormat,
) -> anyhow::Result<()> {
    let engine = EngineHandle::new(source).context("starting fetch engine")?;
    let initial = initial_page(&engine, initial_url);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(engine, msg_tx);
    let browser = Browser::new(TableState::new(initial, timestamp_format), runner, msg_rx);

    let mut terminal = ratatui::try_init().context("initializing terminal")?;
    let result = browser.run(&mut terminal);
    ratatui::restore();
    result
}

fn initial_page(engine: &EngineHandle, url: &str) -> Page {
    match engine.fetch_page_blocking(url) {
        Some(Ok(page)) => {
            news_info!(
                "Initial page {} loaded with {} articles",
                page.current_page,
                page.data.len()
            );
            page
        }
        Some(Err(err)) => {
            news_warn!("Initial page failed: {}", err);
            Page::empty()
        }
        None => {
            news_warn!("Fetch engine stopped before the initial page arrived");
            Page::empty()
        }
    }
}

struct Browser {
    state: TableState,
    view: TableViewModel,
    controller: Controller,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    needs_redraw: bool,
}

impl Browser {
    fn new(mut state: TableState, runner: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        let view = state.view();
        state.consume_dirty();
        let mut controller = Controller::default();
        controller.sync(&view);
        Self {
            state,
            view,
            controller,
            runner,
            msg_rx,
            needs_redraw: true,
        }
    }

    fn run(mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        loop {
            self.process_pending_messages();

            if self.needs_redraw {
                terminal.draw(|frame| render::draw(frame, &self.view, &self.controller))?;
                self.needs_redraw = false;
            }

            if !event::poll(EVENT_POLL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                // Resize and focus events only need a fresh frame.
                self.needs_redraw = true;
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match self.controller.handle_key(key, &self.view) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Msg(msg)) => self.dispatch_msg(msg),
                Some(Action::Redraw) => self.needs_redraw = true,
                None => {}
            }
        }
    }

    fn process_pending_messages(&mut self) {
        self.runner.pump_engine();
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.enqueue(effects);

        if state.consume_dirty() {
            self.view = state.view();
            self.controller.sync(&self.view);
            self.needs_redraw = true;
        }
        self.state = state;
    }
}
