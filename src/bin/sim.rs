use pig::{init_logging, AiDecider, Dice, Match, Player, Seat};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u32 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };
    anyhow::ensure!(games > 0, "games must be at least 1");

    let mut dice = Dice::new(SmallRng::seed_from_u64(seed));
    let mut wins = [0u32; 2];
    let mut turns = 0u64;
    let mut winning_points = 0u64;

    for _ in 0..games {
        let mut game = Match::new(Player::computer("AI-One"), Player::computer("AI-Two"));
        let winner = game.play(&mut dice, &mut AiDecider, &mut AiDecider, &mut ())?;
        wins[winner.index()] += 1;
        turns += u64::from(game.turns_taken());
        winning_points += u64::from(game.player(winner).total_score());
    }

    let winner = match wins[Seat::First.index()].cmp(&wins[Seat::Second.index()]) {
        std::cmp::Ordering::Greater => Some("player1"),
        std::cmp::Ordering::Less => Some("player2"),
        std::cmp::Ordering::Equal => None,
    };

    let result = json!({
        "games": games,
        "player1": {"wins": wins[0]},
        "player2": {"wins": wins[1]},
        "average_turns": turns as f64 / f64::from(games),
        "average_winning_score": winning_points as f64 / f64::from(games),
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
