use chess_rules::game::{ClickOutcome, GameState};
use chess_rules::types::{Position, Side};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

struct Cli {
    game: GameState,
    display_enabled: bool,
}

impl Cli {
    fn new() -> Self {
        Self {
            game: GameState::new(),
            display_enabled: true,
        }
    }

    fn show_help(&self) {
        println!("\n======================= INFORMATION ======================");
        println!("h or help      - Displays help on the commands");
        println!("d or dd        - Displays board / toggles display setting");
        println!("fen            - Displays a FEN string for the current position");
        println!("moves <square> - Displays the legal moves from a square");
        println!("score          - Displays the material count for both sides");
        println!("q or quit      - Quits the program");
        println!("==================== PLAYING THE GAME ====================");
        println!("<square>       - Clicks a square (e.g. e2); click a");
        println!("                 highlighted target to complete the move");
        println!("new            - Starts a new game");
        println!("===================== CONFIGURATION ======================");
        println!("fen <FEN>      - Loads a FEN string");
    }

    fn display_board(&self) {
        if self.display_enabled {
            print!("{}", self.game.render_text());
        }
    }

    fn handle_click(&mut self, square: Position) {
        match self.game.click(square) {
            Ok(ClickOutcome::Selected(selection)) => {
                let targets: Vec<String> = selection
                    .targets
                    .iter()
                    .map(|target| target.to_algebraic())
                    .collect();

                if targets.is_empty() {
                    println!("\nNo legal moves from {}", square.to_algebraic());
                } else {
                    println!(
                        "\nSelected {} | targets: {}",
                        square.to_algebraic(),
                        targets.join(" ")
                    );
                }
            }
            Ok(ClickOutcome::Moved { from, to }) => {
                println!(
                    "\n\x1b[32m{} -> {}\x1b[0m",
                    from.to_algebraic(),
                    to.to_algebraic()
                );
                self.display_board();
            }
            Ok(ClickOutcome::Deselected) => {
                println!("\nSelection cleared");
            }
            Err(e) => println!("\nError: {}", e),
        }
    }

    fn run_main_loop(&mut self) {
        self.display_board();

        loop {
            println!("\n-------------------------------");
            println!(
                "*  Move: {} | To play: {:?}  *",
                self.game.full_move_number, self.game.turn
            );
            println!("-------------------------------");

            print!("\nSquare OR command > ");
            io::stdout().flush().unwrap();

            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) => return, // EOF
                Ok(_) => {}
                Err(_) => return,
            }

            let line = input.trim();
            let command = line.to_lowercase();

            match command.as_str() {
                "d" => {
                    print!("{}", self.game.render_text());
                    continue;
                }
                "dd" => {
                    self.display_enabled = !self.display_enabled;

                    if self.display_enabled {
                        println!("\nBoard display enabled");
                        self.display_board();
                    } else {
                        println!("\nBoard display disabled");
                    }
                    continue;
                }
                "h" | "help" => {
                    self.show_help();
                    continue;
                }
                "fen" => {
                    println!("\n{}", self.game.to_fen());
                    continue;
                }
                "score" => {
                    println!(
                        "\nWhite: {} | Black: {}",
                        self.game.material_score(Side::White),
                        self.game.material_score(Side::Black)
                    );
                    continue;
                }
                "new" => {
                    self.game = GameState::new();
                    self.display_board();
                    continue;
                }
                "q" | "quit" => {
                    println!("\nProgram exiting");
                    break;
                }
                _ => {}
            }

            // FEN is case-sensitive; take it from the raw line.
            if command.starts_with("fen ") {
                match self.game.load_fen(&line[4..]) {
                    Ok(()) => {
                        self.display_board();
                        println!("FEN loaded successfully");
                    }
                    Err(e) => println!("Error loading FEN: {}", e),
                }
                continue;
            }

            if let Some(square_str) = command.strip_prefix("moves ") {
                match Position::from_algebraic(square_str.trim()) {
                    Some(square) => {
                        let targets: Vec<String> = self
                            .game
                            .legal_targets(square)
                            .iter()
                            .map(|target| target.to_algebraic())
                            .collect();

                        if targets.is_empty() {
                            println!("\nNo legal moves from {}", square_str.trim());
                        } else {
                            println!("\nLegal moves: {}", targets.join(" "));
                        }
                    }
                    None => println!("\nINVALID SQUARE!"),
                }
                continue;
            }

            match Position::from_algebraic(&command) {
                Some(square) => self.handle_click(square),
                None => println!("\nINVALID COMMAND!"),
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("\nChess Board");
    println!("===========");
    println!("Type 'help' for a list of commands\n");

    let mut cli = Cli::new();
    cli.run_main_loop();
}
