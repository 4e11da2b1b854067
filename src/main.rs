mod display;

use std::collections::{HashMap, HashSet};
use std::io::{stdout, BufWriter, Stdout, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use duel_minigames::assets::{Assets, FileAssetLoader};
use duel_minigames::consts::FPS;
use duel_minigames::entities::Key;
use duel_minigames::orchestrator::{Match, MatchResult};
use duel_minigames::platform::{InputSnapshot, Platform};
use duel_minigames::render::Frame;
use duel_minigames::{logging, GameError};

/// A local two-player arcade duel across five minigames
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the sprite text-art files
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Seed the random number generator for a reproducible match
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write log records to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

const FRAME: Duration = Duration::from_micros(1_000_000 / FPS as u64);

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

fn map_key(code: &KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Key::W,
        KeyCode::Char('a') | KeyCode::Char('A') => Key::A,
        KeyCode::Char('s') | KeyCode::Char('S') => Key::S,
        KeyCode::Char('d') | KeyCode::Char('D') => Key::D,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(key)
}

// ── Terminal platform ─────────────────────────────────────────────────────────

/// Input model: instead of acting on each key event individually, we keep a
/// `key_frame` map recording the frame of the last press/repeat event for
/// every key.  Each poll, keys still "fresh" (within `HOLD_WINDOW` frames)
/// count as held, so both duelists can hold keys at the same time.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames.
struct TerminalPlatform<'a> {
    out: BufWriter<Stdout>,
    rx: &'a mpsc::Receiver<Event>,
    assets: &'a Assets,
    key_frame: HashMap<Key, u64>,
    frame: u64,
    frame_start: Instant,
}

impl<'a> TerminalPlatform<'a> {
    fn new(out: BufWriter<Stdout>, rx: &'a mpsc::Receiver<Event>, assets: &'a Assets) -> Self {
        Self { out, rx, assets, key_frame: HashMap::new(), frame: 0, frame_start: Instant::now() }
    }
}

impl Platform for TerminalPlatform<'_> {
    fn poll(&mut self) -> Result<InputSnapshot, GameError> {
        self.frame += 1;
        let mut snapshot = InputSnapshot::default();

        while let Ok(ev) = self.rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                snapshot.quit = true;
                continue;
            }
            let Some(key) = map_key(&code) else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    self.key_frame.insert(key, self.frame);
                    if key == Key::Escape {
                        snapshot.quit = true;
                    }
                    snapshot.pressed.push(key);
                }
                KeyEventKind::Repeat => {
                    self.key_frame.insert(key, self.frame);
                }
                KeyEventKind::Release => {
                    self.key_frame.remove(&key);
                }
            }
        }

        let frame = self.frame;
        snapshot.held = self
            .key_frame
            .iter()
            .filter(|(_, &last)| frame.saturating_sub(last) <= HOLD_WINDOW)
            .map(|(&k, _)| k)
            .collect::<HashSet<_>>();
        Ok(snapshot)
    }

    fn present(&mut self, frame: &Frame) -> Result<(), GameError> {
        display::render(&mut self.out, frame, self.assets)?;
        Ok(())
    }

    fn wait_next_tick(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

// ── Menus ─────────────────────────────────────────────────────────────────────

/// Returns `true` to start the match, `false` to quit.
fn title_screen<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<bool> {
    let mut instructions = false;
    let mut pulse: u32 = 0;
    loop {
        display::draw_title(out, instructions, pulse < FPS / 2)?;
        pulse = (pulse + 1) % FPS;

        if let Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. })) =
            rx.recv_timeout(FRAME)
        {
            match code {
                KeyCode::Esc => return Ok(false),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(false),
                KeyCode::Enter if instructions => instructions = false,
                KeyCode::Enter => return Ok(true),
                KeyCode::Char('i') | KeyCode::Char('I') if !instructions => instructions = true,
                _ => {}
            }
        }
    }
}

fn wait_for_enter(rx: &mpsc::Receiver<Event>) {
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code: KeyCode::Enter | KeyCode::Esc, kind: KeyEventKind::Press, .. })) => return,
            Ok(_) => {}
            Err(_) => return,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose, args.log_file.as_deref()).context("could not open the log file")?;

    // Every sprite must resolve before the terminal is taken over.
    let assets = Assets::load(&mut FileAssetLoader::new(&args.assets))
        .with_context(|| format!("loading sprites from {}", args.assets.display()))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(out, &rx, &assets, &mut rng);

    // Always restore the terminal
    let mut out = stdout();
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run(
    mut out: BufWriter<Stdout>,
    rx: &mpsc::Receiver<Event>,
    assets: &Assets,
    rng: &mut StdRng,
) -> anyhow::Result<()> {
    if !title_screen(&mut out, rx)? {
        return Ok(());
    }

    let mut platform = TerminalPlatform::new(out, rx, assets);
    let mut game = Match::new();
    match game.run(&mut platform, rng)? {
        MatchResult::Finished { outcome, scores } => {
            display::draw_game_over(&mut platform.out, outcome, scores)?;
            wait_for_enter(rx);
        }
        MatchResult::Aborted { scores } => {
            log::info!("quit with the score at {} x {}", scores[0], scores[1]);
        }
    }
    Ok(())
}
