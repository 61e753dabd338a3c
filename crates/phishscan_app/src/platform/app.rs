use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use phishscan_core::{present, update, AppState, AppViewModel, DisplayPort, Msg};
use scan_logging::{scan_debug, scan_info, scan_warn};

use super::config::{load_config, AppConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::terminal::TerminalDisplay;

const TICK_INTERVAL: Duration = Duration::from_millis(75);

/// Everything the main loop reacts to.
pub enum LoopEvent {
    Msg(Msg),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_problem) = match load_config(Path::new(CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(reason) => (AppConfig::default(), Some(reason)),
    };
    logging::initialize(&config.log);
    match config_problem {
        Some(reason) => scan_warn!("Using default config: {}", reason),
        None => scan_info!("Service base url {}", config.base_url),
    }

    let (tx, rx) = mpsc::channel::<LoopEvent>();
    let effects = EffectRunner::new(&config.client_settings(), tx.clone())
        .context("starting the scan engine")?;

    let mut display = TerminalDisplay::new(io::stdout());
    let mut presenter = Presenter::default();
    let mut state = AppState::new();
    presenter.present(&state, &mut display);

    spawn_ticker(tx.clone());
    spawn_input_reader(tx.clone());
    let _ = tx.send(LoopEvent::Msg(Msg::Started));

    while let Ok(event) = rx.recv() {
        let msg = match event {
            LoopEvent::Msg(msg) => msg,
            LoopEvent::Quit => break,
        };
        let (next, pending) = update(state, msg);
        state = next;
        effects.enqueue(pending);
        if state.consume_dirty() {
            presenter.present(&state, &mut display);
        }
    }

    scan_info!("Exiting");
    Ok(())
}

/// Remembers the last presented view so only changes reach the display.
#[derive(Default)]
struct Presenter {
    last: Option<AppViewModel>,
}

impl Presenter {
    fn present(&mut self, state: &AppState, port: &mut dyn DisplayPort) {
        let view = state.view();
        present(self.last.as_ref(), &view, port);
        self.last = Some(view);
    }
}

fn spawn_ticker(tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let mut last = Instant::now();
        loop {
            thread::sleep(TICK_INTERVAL);
            let now = Instant::now();
            let elapsed = now.duration_since(last);
            last = now;
            if tx.send(LoopEvent::Msg(Msg::Tick(elapsed))).is_err() {
                break;
            }
        }
    });
}

fn spawn_input_reader(tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            for event in parse_command(&line) {
                if tx.send(event).is_err() {
                    return;
                }
            }
        }
        scan_debug!("stdin closed");
        let _ = tx.send(LoopEvent::Quit);
    });
}

/// Maps one line of terminal input to loop events.
fn parse_command(line: &str) -> Vec<LoopEvent> {
    match line.trim() {
        ":q" | ":quit" => vec![LoopEvent::Quit],
        ":r" | ":reset" => vec![LoopEvent::Msg(Msg::ResetClicked)],
        _ => vec![
            LoopEvent::Msg(Msg::InputChanged(line.to_string())),
            LoopEvent::Msg(Msg::ScanSubmitted),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msgs(line: &str) -> Vec<Option<Msg>> {
        parse_command(line)
            .into_iter()
            .map(|event| match event {
                LoopEvent::Msg(msg) => Some(msg),
                LoopEvent::Quit => None,
            })
            .collect()
    }

    #[test]
    fn commands_are_recognised() {
        assert_eq!(msgs(" :q "), vec![None]);
        assert_eq!(msgs(":reset"), vec![Some(Msg::ResetClicked)]);
    }

    #[test]
    fn other_lines_are_submitted_verbatim() {
        assert_eq!(
            msgs("  example.com "),
            vec![
                Some(Msg::InputChanged("  example.com ".to_string())),
                Some(Msg::ScanSubmitted),
            ]
        );
        assert_eq!(
            msgs(""),
            vec![Some(Msg::InputChanged(String::new())), Some(Msg::ScanSubmitted)]
        );
    }
}
