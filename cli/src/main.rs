use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use flytrap_cli::{Replay, Scenario, Step};
use flytrap_core::{motion, render, FlytrapState, GameRules, PanelArt, Point, Stage};

#[derive(Parser)]
#[command(name = "flytrap-cli", version, about = "Headless tools for the flytrap page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replays a scripted input scenario and prints the state timeline.
    Replay {
        scenario: PathBuf,
        #[arg(long, env = "FLYTRAP_CATCH_DELAY_MS")]
        delay_ms: Option<u32>,
        /// Sleep through `wait` steps instead of skipping the clock ahead.
        #[arg(long)]
        realtime: bool,
    },
    /// Prints the scene the page would render for a given state.
    Scene {
        #[arg(long, default_value = "waiting")]
        stage: Stage,
        #[arg(long)]
        closed: bool,
        #[arg(long)]
        dragging: bool,
        #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
        fly_x: f64,
        #[arg(long, default_value_t = 100.0, allow_hyphen_values = true)]
        fly_y: f64,
    },
    /// Prints the generated animation stylesheet.
    Styles,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            scenario,
            delay_ms,
            realtime,
        } => {
            let scenario = Scenario::load(&scenario)?;
            let mut replay = Replay::for_scenario(&scenario, delay_ms)?;
            let mut printed = print_new(&replay, 0);
            for step in &scenario.steps {
                if let (true, Step::Wait { ms }) = (realtime, step) {
                    tokio::time::sleep(Duration::from_millis(*ms)).await;
                }
                replay.apply(*step);
                printed = print_new(&replay, printed);
            }
            if replay.pending_catches() > 0 {
                eprintln!(
                    "note: {} catch timer(s) still pending at {}ms",
                    replay.pending_catches(),
                    replay.now_ms()
                );
            }
        }
        Commands::Scene {
            stage,
            closed,
            dragging,
            fly_x,
            fly_y,
        } => {
            let rules = GameRules::default();
            let state = FlytrapState {
                stage,
                fly: Point::new(fly_x, fly_y),
                dragging,
                drag_moved: false,
                leaf_closed: closed,
                catch_epoch: 0,
            };
            print_scene(&state, &rules);
        }
        Commands::Styles => {
            print!("{}", motion::stylesheet());
        }
    }

    Ok(())
}

fn print_new(replay: &Replay, printed: usize) -> usize {
    let timeline = replay.timeline();
    for entry in &timeline[printed..] {
        println!("{entry}");
    }
    timeline.len()
}

fn print_scene(state: &FlytrapState, rules: &GameRules) {
    let scene = render(state, rules);
    for panel in &scene.panels {
        let marker = if panel.emphasized { "*" } else { " " };
        let art = match panel.art {
            PanelArt::Waiting => "open trap, buzzing fly".to_string(),
            PanelArt::Catching { jaws } => format!("jaws {jaws:?}").to_lowercase(),
            PanelArt::Digesting => "closed trap, digesting".to_string(),
        };
        println!("{marker} {:<9} {} / {} [{art}]", panel.stage, panel.title, panel.caption);
    }
    let game = &scene.game;
    match game.token {
        Some(token) => println!(
            "fly: ({}, {}) size {} {}",
            token.left,
            token.top,
            token.size,
            if token.wiggle { "wiggling" } else { "held" }
        ),
        None => println!("fly: consumed"),
    }
    println!("leaf: {:?} size {}", game.leaf, game.leaf_size);
}
