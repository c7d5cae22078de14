use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use extractor_core::{update, Appearance, AppState, Effect, Msg, ThemeContext, ThemeMode};
use extractor_engine::{EngineHandle, PreferenceStore, ReqwestExtractionClient};
use extractor_logging::{extractor_debug, extractor_info};

use crate::commands::{parse_line, Command};
use crate::config::Args;
use crate::effects::EffectRunner;
use crate::{persistence, render};

/// Everything the app loop reacts to, serialized through one channel.
pub enum AppEvent {
    Line(String),
    Msg(Msg),
    InputClosed,
}

/// Whether the app loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Where the app loop sends the effects `update` returns.
pub(crate) trait EffectSink {
    fn run(&self, effects: Vec<Effect>);
}

pub fn run_app(args: Args) -> anyhow::Result<()> {
    let store = PreferenceStore::open(args.state_dir());
    let theme = ThemeContext::new(
        persistence::load_theme_mode(&store),
        args.system_theme.into(),
    );

    let client = ReqwestExtractionClient::new(args.client_settings())?;
    extractor_info!("Using extraction service at {}", client.settings().base_url);
    let (engine, engine_events) = EngineHandle::spawn(Arc::new(client))?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(engine, engine_events, event_tx.clone());
    spawn_stdin_reader(event_tx);

    let mut app = App::new(theme, store, runner);
    app.render_now();

    while let Ok(event) = event_rx.recv() {
        if app.handle_event(event) == Flow::Exit {
            break;
        }
    }

    extractor_info!("Shutting down");
    Ok(())
}

pub(crate) struct App<R> {
    state: AppState,
    theme: ThemeContext,
    store: PreferenceStore,
    runner: R,
    input_closed: bool,
}

impl<R: EffectSink> App<R> {
    pub(crate) fn new(theme: ThemeContext, store: PreferenceStore, runner: R) -> Self {
        Self {
            state: AppState::new(),
            theme,
            store,
            runner,
            input_closed: false,
        }
    }

    /// Once input has closed, the loop only lives until the running
    /// extraction settles.
    pub(crate) fn handle_event(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Msg(msg) => self.dispatch_msg(msg),
            AppEvent::Line(line) => match parse_line(&line, self.state.current_view()) {
                Ok(Command::Msg(msg)) => self.dispatch_msg(msg),
                Ok(Command::Theme(mode)) => self.set_theme(mode),
                Ok(Command::SystemTheme(appearance)) => self.set_system_theme(appearance),
                Ok(Command::Help) => println!("{}", render::HELP),
                Ok(Command::Quit) => return Flow::Exit,
                Err(err) => eprintln!("{err:#}"),
            },
            AppEvent::InputClosed => {
                self.input_closed = true;
                if self.state.is_loading() {
                    extractor_info!("Input closed; waiting for the running extraction");
                }
            }
        }

        if self.input_closed && !self.state.is_loading() {
            Flow::Exit
        } else {
            Flow::Continue
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        extractor_debug!("Dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
        if self.state.consume_dirty() {
            self.render_now();
        }
    }

    fn set_theme(&mut self, mode: ThemeMode) {
        if self.theme.set_mode(mode) {
            persistence::save_theme_mode(&mut self.store, mode);
        }
        println!("Theme: {} (showing {})", mode, self.theme.effective());
        self.render_now();
    }

    fn set_system_theme(&mut self, appearance: Appearance) {
        extractor_info!("System appearance is now {}", appearance);
        if self.theme.set_system_preference(appearance) {
            self.render_now();
        }
    }

    fn render_now(&self) {
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "{}", render::render(&self.state.view(), &self.theme));
        let _ = stdout.flush();
    }
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}
