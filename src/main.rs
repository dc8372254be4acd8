//! Snaked entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively there is no window: the binary runs a headless session with a
//! simple autopilot and reports how it went.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use snaked::consts::*;
    use snaked::sim::{GameEvent, Session, TickInput, tick};
    use snaked::{HighScore, Skin};

    /// Give up after this many frames (about five minutes at 60 Hz)
    const MAX_TICKS: u64 = 18_000;
    /// Start heading home once this far out
    const SAFE_RADIUS: f32 = ARENA_RADIUS * 0.8;
    /// Only boost with plenty of length to spare
    const BOOST_MIN_SEGMENTS: usize = SNAKE_MIN_LEN + 10;

    /// Chase the nearest orb, turn back before the flame ring
    fn autopilot(session: &Session) -> TickInput {
        let head = session.snake.head;
        let target = if head.length() > SAFE_RADIUS {
            Vec2::ZERO
        } else {
            session
                .field
                .large_orbs
                .iter()
                .map(|o| o.pos)
                .chain(session.field.orbs.iter().map(|o| o.pos))
                .min_by(|a, b| {
                    a.distance_squared(head)
                        .partial_cmp(&b.distance_squared(head))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(Vec2::ZERO)
        };
        let to_target = target - head;
        let far_food = to_target.length() > 200.0;
        TickInput {
            target_angle: Some(to_target.y.atan2(to_target.x)),
            boost_key: far_food && session.snake.segments.len() > BOOST_MIN_SEGMENTS,
            ..Default::default()
        }
    }

    /// Tick until the snake burns or `max_ticks` pass, returning trail orbs dropped
    ///
    /// Running out of ticks just stops; the session is left active.
    fn play(session: &mut Session, max_ticks: u64) -> usize {
        let mut trail_orbs = 0usize;
        while session.is_active() && session.time_ticks < max_ticks {
            let input = autopilot(session);
            for event in tick(session, &input) {
                match event {
                    GameEvent::Grew { segments } if segments % 10 == 0 => {
                        log::info!(
                            "Reached {} segments at tick {}",
                            segments,
                            session.time_ticks
                        );
                    }
                    GameEvent::TrailOrbDropped { .. } => trail_orbs += 1,
                    GameEvent::Died { score, pos } => {
                        log::warn!(
                            "Burned at ({:.0}, {:.0}) with score {}",
                            pos.x,
                            pos.y,
                            score
                        );
                    }
                    _ => {}
                }
            }
        }
        trail_orbs
    }

    pub fn run(seed: u64, skin: Skin) {
        let mut high_score = HighScore::load();
        let mut session = Session::new(seed, skin);
        let trail_orbs = play(&mut session, MAX_TICKS);

        let survived = session.is_active();
        if survived {
            log::info!("Tick limit reached, stopping run");
        }

        if high_score.submit(session.score) {
            log::info!("New high score: {}", session.score);
        }
        high_score.save();

        let summary = serde_json::json!({
            "seed": seed,
            "ticks": session.time_ticks,
            "score": session.score,
            "segments": session.snake.segments.len(),
            "survived": survived,
            "trail_orbs": trail_orbs,
            "high_score": high_score.best,
        });
        println!("{}", summary);
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_tick_limit_stops_without_death() {
            let mut session = Session::new(7, Skin::default());
            play(&mut session, 30);
            assert_eq!(session.time_ticks, 30);
            assert!(session.is_active());
            assert!(session.field.large_orbs.is_empty());
        }

        #[test]
        fn test_autopilot_turns_home_near_the_ring() {
            let mut session = Session::new(7, Skin::default());
            session.snake.head = Vec2::new(SAFE_RADIUS + 10.0, 0.0);
            let input = autopilot(&session);
            let angle = input.target_angle.unwrap();
            assert!((angle.abs() - std::f32::consts::PI).abs() < 1e-3);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use snaked::Skin;

    env_logger::init();
    log::info!("Snaked (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    // snaked [seed] [color] [pattern]
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);
    let color = args.next().unwrap_or_default();
    let pattern = args.next().unwrap_or_default();

    headless::run(seed, Skin::from_form(&color, &pattern));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
