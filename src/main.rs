#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_skills::{
    init_logging, scenario, ui, Board, Orientation, ScenarioConfig, ShapeKind, ShapeMask,
    ShipPlacement, FLEET, SKILL_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Shape {
    Cone,
    Cross,
    Diamond,
}

#[cfg(feature = "std")]
impl From<Shape> for ShapeKind {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Cone => ShapeKind::Cone,
            Shape::Cross => ShapeKind::Cross,
            Shape::Diamond => ShapeKind::Diamond,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Place the fleet, stamp the cone, cross and diamond skills and print the board.
    Board {
        #[arg(long, default_value_t = SKILL_SIZE, help = "Side length of every skill mask (odd)")]
        size: usize,
        #[arg(long, help = "Leave the fleet off the board")]
        no_ships: bool,
        #[arg(long, help = "Also print each generated mask")]
        masks: bool,
        #[arg(long, help = "Print a single JSON document instead of text")]
        json: bool,
    },
    /// Place the two ships only and print the board.
    Fleet {
        #[arg(long, help = "Place the ships at random instead of at their fixed spots")]
        random: bool,
        #[arg(long, help = "Fix RNG seed for reproducible placement (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Override the second ship's row")]
        second_row: Option<usize>,
        #[arg(long, help = "Override the second ship's column")]
        second_col: Option<usize>,
    },
    /// Print a single skill mask.
    Mask {
        #[arg(value_enum)]
        shape: Shape,
        #[arg(long, default_value_t = SKILL_SIZE)]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Board {
            size,
            no_ships,
            masks,
            json,
        } => {
            let mut config = ScenarioConfig {
                skill_size: size,
                ..ScenarioConfig::default()
            };
            if no_ships {
                config.fleet.clear();
            }
            let report = scenario::run(&config)?;
            if json {
                println!("{}", serde_json::to_string(&report.to_json())?);
                return Ok(());
            }
            ui::print_board(&report.board)?;
            if masks {
                for mask in &report.masks {
                    ui::print_mask(mask)?;
                }
            }
        }
        Commands::Fleet {
            random,
            seed,
            second_row,
            second_col,
        } => {
            let mut fleet: Vec<ShipPlacement> = FLEET.to_vec();
            if let Some(second) = fleet.get_mut(1) {
                second.row = second_row.unwrap_or(second.row);
                second.col = second_col.unwrap_or(second.col);
            }
            let board = if random {
                let mut rng = match seed {
                    Some(s) => SmallRng::seed_from_u64(s),
                    None => SmallRng::from_rng(&mut rand::rng()),
                };
                let mut board = Board::new();
                let ships = scenario::place_random_fleet(&mut board, &mut rng, &fleet)?;
                for ship in &ships {
                    let (r, c) = ship.origin();
                    let dir = match ship.orientation() {
                        Orientation::Horizontal => "horizontal",
                        Orientation::Vertical => "vertical",
                    };
                    println!("{} at ({}, {}) {}", ship.ship_type().name(), r, c, dir);
                }
                board
            } else {
                scenario::run_fleet(&fleet)?.board
            };
            ui::print_board(&board)?;
        }
        Commands::Mask { shape, size } => {
            let mask = ShapeMask::build(shape.into(), size)?;
            ui::print_mask(&mask)?;
        }
    }
    Ok(())
}
