use std::time::Instant;

use shinobi::{
    event::Event,
    screen::Screen,
    walker::{Walker, WalkerConfig},
};

fn main() -> std::io::Result<()> {
    let mut screen = Screen::from_terminal()?;
    let mut walker = Walker::new(WalkerConfig::default());

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
