use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use pawview_core::{update, AppState, AppViewModel, Msg};
use pawview_engine::FlagStore;
use pawview_logging::{paw_debug, paw_info};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::persistence;
use super::ui::{self, UiEvent};

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    paw_info!("Starting pawview with {:?}", config.engine.policy);

    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>();
    let flags = FlagStore::new(&config.state_dir);
    let initial_theme = persistence::load_theme(&flags);
    let providers: Vec<String> = config
        .engine
        .registry
        .names()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect();
    let effects = EffectRunner::new(config.engine, flags, ui_tx.clone())
        .context("failed to start the fetch engine")?;

    spawn_input_reader(ui_tx, providers);

    let mut app = App::new(effects, io::stdout());
    app.print(ui::input::HELP)?;
    app.dispatch_msg(Msg::RestoreTheme(initial_theme))?;
    app.dispatch_msg(Msg::Started)?;

    while let Ok(event) = ui_rx.recv() {
        match event {
            UiEvent::Msg(msg) => app.dispatch_msg(msg)?,
            UiEvent::Help => app.print(ui::input::HELP)?,
            UiEvent::Unknown(text) => app.print(&format!("Unknown command {text:?}; h for help"))?,
            UiEvent::Quit => break,
        }
    }

    paw_info!("Exiting");
    Ok(())
}

/// Reads stdin line by line; end of input quits.
fn spawn_input_reader(ui_tx: mpsc::Sender<UiEvent>, providers: Vec<String>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if ui_tx.send(ui::input::parse_command(&line, &providers)).is_err() {
                return;
            }
        }
        let _ = ui_tx.send(UiEvent::Quit);
    });
}

struct App<W: Write> {
    state: AppState,
    effects: EffectRunner,
    out: W,
}

impl<W: Write> App<W> {
    fn new(effects: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            effects,
            out,
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        paw_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        self.effects.run(effects);
        if was_dirty {
            self.render(&view)?;
        }
        Ok(())
    }

    fn render(&mut self, view: &AppViewModel) -> io::Result<()> {
        for line in ui::render::render(view) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}
