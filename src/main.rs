use std::io;

use clap::{Parser, Subcommand};
use pig::{
    init_logging, prompt_names, random_ai_name, AiDecider, Console, Dice, Match, Narrator, Player,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Two-Dice Pig against the computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (the default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Your name; skips the name prompt")]
        name: Option<String>,
        #[arg(long, help = "Computer's name; skips the AI naming prompt")]
        ai_name: Option<String>,
    },
    /// Watch two computer players play each other.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn play(seed: Option<u64>, name: Option<String>, ai_name: Option<String>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut console = Console::stdio();
    let mut narrator = Narrator::new(io::stdout());

    loop {
        let (human, computer) =
            prompt_names(&mut console, &mut rng, name.clone(), ai_name.clone())?;
        narrator.greet(&human, &computer);

        let mut game = Match::new(Player::human(human), Player::computer(computer));
        let mut dice = Dice::new(SmallRng::from_rng(&mut rng));
        game.play(&mut dice, &mut console, &mut AiDecider, &mut narrator)?;

        if !console.ask_yes_no("\n\nWould you like to play Two-Dice Pig again? (Y/N): ")? {
            console.say("\n\n-----Program Exited-----\n")?;
            return Ok(());
        }
    }
}

fn watch(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let first = random_ai_name(&mut rng);
    let second = random_ai_name(&mut rng);

    let mut narrator = Narrator::new(io::stdout());
    narrator.greet(&first, &second);

    let mut game = Match::new(Player::computer(first), Player::computer(second));
    let mut dice = Dice::new(SmallRng::from_rng(&mut rng));
    game.play(&mut dice, &mut AiDecider, &mut AiDecider, &mut narrator)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        None => play(None, None, None),
        Some(Commands::Play {
            seed,
            name,
            ai_name,
        }) => play(seed, name, ai_name),
        Some(Commands::Watch { seed }) => watch(seed),
    }
}
