//! Walks a custom sprite loaded from `walk{1..4}.png` in the given
//! directory instead of the built-in ninja.
use std::time::Instant;

use shinobi::{
    event::Event,
    frames::{Variant, WalkCycle},
    screen::Screen,
    walker::{Walker, WalkerConfig},
};

fn main() -> std::io::Result<()> {
    let dir = std::env::args().nth(1).unwrap_or_else(|| "art".to_string());
    let cycle = WalkCycle::from_image_dir(&dir, Variant::Default).expect("walk frame reading failure");

    let mut screen = Screen::from_terminal()?;
    let mut walker = Walker::with_cycle(WalkerConfig::default(), cycle);

    let mut last = Instant::now();
    let mut started = false;
    screen.start_loop(60, |s, event| {
        let now = Instant::now();
        let dt = now - last;
        last = now;

        if !started {
            walker.start_if_needed(s);
            started = true;
        }
        match event {
            Some(Event::FocusGained) => walker.on_app_activated(s),
            Some(Event::Esc) | Some(Event::Char('q')) => s.stop_loop(),
            _ => (),
        }

        s.clear();
        walker.tick(dt, s);
        walker.draw(s);
        Ok(())
    })
}
