use std::fs::File;
use std::time::{Duration, Instant};

use crossterm::event::{Event as CtEvent, KeyCode, KeyEventKind, MouseEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};
use slideover::{
    Easing, Edge, MaskEvent, OverlayConfig, Stage, StageConfig, TerminalHost, TransitionConfig,
};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("slideover.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let host = TerminalHost::new()?;
    let mut stage = Stage::new(host, StageConfig::new().native_scroll(true));

    let panels = [
        (Edge::Left, "1: left drawer", OverlayConfig::new().full_page(false).size(30, 12)),
        (Edge::Right, "2: right drawer", OverlayConfig::new().full_page(false).size(30, 12)),
        (Edge::Top, "3: top sheet", OverlayConfig::new().full_page(false).size(50, 8)),
        (Edge::Bottom, "4: full page", OverlayConfig::new()),
    ];

    let mut ids = Vec::new();
    for (edge, label, config) in panels {
        let transition = TransitionConfig::new(Duration::from_millis(400), Easing::EaseOut);
        let id = stage.add(config.show_from(edge).transition(transition));
        stage.host_mut().set_label(id, format!("{label} (h hides, c clicks mask)"));
        stage.render(id).expect("overlay was just registered");
        ids.push(id);
    }

    loop {
        stage.tick(Instant::now());
        stage.host_mut().draw()?;

        let timeout = if stage.is_animating() { FRAME } else { Duration::from_millis(250) };
        let events = stage.host().poll(Some(timeout))?;

        for event in events {
            match event {
                CtEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(c @ '1'..='4') => {
                        let index = c as usize - '1' as usize;
                        if let Err(err) = stage.toggle(ids[index]) {
                            log::warn!("toggle failed: {err}");
                        }
                    }
                    KeyCode::Char('h') => {
                        if let Some(id) = stage.current() {
                            if let Err(err) = stage.hide(id) {
                                log::warn!("hide failed: {err}");
                            }
                        }
                    }
                    KeyCode::Char('c') => {
                        stage.handle_mask_event(MaskEvent::Click);
                    }
                    KeyCode::Char('r') => {
                        let reduced = !stage.config().reduced_motion;
                        stage.set_reduced_motion(reduced);
                    }
                    _ => {}
                },
                CtEvent::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Up(_)) => {
                    if stage.mask_visible() {
                        stage.handle_mask_event(MaskEvent::Click);
                    }
                }
                CtEvent::Resize(_, _) => {
                    if stage.host_mut().refresh_size()? {
                        stage.handle_viewport_resize();
                    }
                }
                _ => {}
            }
        }
    }
}
