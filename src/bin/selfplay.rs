use anyhow::{bail, Context};
use chess_rules::game::{attempt_move, new_game, random_move};
use chess_rules::view::BoardView;

const DEFAULT_PLIES: u32 = 40;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chess_rules=info,selfplay=info".into()),
        )
        .init();

    let mut plies = DEFAULT_PLIES;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            n => plies = n.parse().with_context(|| format!("invalid ply count {n:?}"))?,
        }
    }

    tracing::info!(build = env!("BUILD_TIMESTAMP"), plies, "selfplay starting");

    let mut state = new_game();
    let mut played = 0;
    while played < plies {
        let Some(mv) = random_move(&state) else {
            tracing::info!(side = %state.side_to_move(), "no legal move left");
            break;
        };
        let side = state.side_to_move();
        if !attempt_move(&mut state, mv.from, mv.to) {
            bail!("random move {mv} was rejected");
        }
        played += 1;
        tracing::info!(ply = played, %side, %mv, "played");
    }

    if json {
        println!("{}", BoardView::from_state(&state).to_json()?);
    } else {
        println!("{}", state.board());
        eprintln!("{played} plies played, {} to move", state.side_to_move());
    }
    Ok(())
}
