use chess_rules::cache::LegalMoveCache;
use chess_rules::error::ChessError;
use chess_rules::line::{parse_move, play_line};
use chess_rules::position::Position;
use chess_rules::types::{GameStatus, Side};
use rand::seq::SliceRandom;
use std::io::{self, Write};

struct CLI {
    history: Vec<Position>, // Never empty; the last entry is the current position
    cache: LegalMoveCache,
    display_enabled: bool,
    flip: bool,
}

impl CLI {
    fn new() -> Self {
        Self {
            history: vec![Position::new()],
            cache: LegalMoveCache::new(),
            display_enabled: true,
            flip: false,
        }
    }

    fn position(&self) -> &Position {
        &self.history[self.history.len() - 1]
    }

    fn show_help(&self) {
        println!("\n======================= INFORMATION ======================");
        println!("h or help - Displays help on the commands");
        println!("d or dd   - Displays board and toggles display setting");
        println!("moves     - Displays the list of legal moves");
        println!("fen       - Displays a FEN string for the current position");
        println!("status    - Displays check and the game status");
        println!("f         - Flips the board");
        println!("q or quit - Quits the program");
        println!("===================== PLAYING MOVES ======================");
        println!("<move>        - Plays a move, e.g. e4, Nf3, O-O or e2e4");
        println!("line <moves>  - Plays a line, e.g. line 1. e4 e5 2. Nf3");
        println!("random        - Plays a random legal move");
        println!("undo          - Takes back the last move");
        println!("new           - Starts a new game");
        println!("===================== CONFIGURATION ======================");
        println!("fen <FEN>     - Loads a FEN string");
    }

    fn display_board(&self) {
        if self.display_enabled {
            print!("\n{}", self.position().board().diagram(self.flip));
        }
    }

    fn display_legal_moves(&self) -> Result<(), ChessError> {
        let position = self.position();
        let moves = position.legal_moves(&self.cache)?;

        if moves.is_empty() {
            println!("(No legal moves)");
            return Ok(());
        }

        for (index, chess_move) in moves.iter().enumerate() {
            print!("{:<8}", chess_move.san(&self.cache)?);
            if (index + 1) % 8 == 0 {
                println!();
            }
        }

        if moves.len() % 8 != 0 {
            println!();
        }

        println!("{} moves", moves.len());
        Ok(())
    }

    fn print_status(&self) -> Result<(), ChessError> {
        let position = self.position();

        if position.check() {
            println!("\n{:?} is in check", position.turn());
        }

        match position.status(&self.cache)? {
            GameStatus::InProgress => {}
            GameStatus::Checkmate(winner) => {
                println!("\nGAME OVER");

                if winner == Side::White {
                    println!("{{White mates}}");
                } else {
                    println!("{{Black mates}}");
                }
            }
            GameStatus::Stalemate => println!("{{Stalemate}}"),
            GameStatus::DrawByFiftyMoveRule => println!("{{Draw by fifty move rule}}"),
        }

        Ok(())
    }

    fn play(&mut self, token: &str) -> Result<(), ChessError> {
        let (san, next) = {
            let chess_move = parse_move(self.position(), token, &self.cache)?;
            (chess_move.san(&self.cache)?, chess_move.make()?)
        };

        println!("\n{:?} plays {san}", next.turn().opponent());
        self.history.push(next);
        self.display_board();
        self.print_status()
    }

    fn play_random(&mut self) -> Result<(), ChessError> {
        let choice = {
            let moves = self.position().legal_moves(&self.cache)?;
            moves.choose(&mut rand::thread_rng()).map(|chess_move| chess_move.la())
        };

        match choice {
            Some(la) => self.play(&la),
            None => {
                println!("\n(No legal moves)");
                Ok(())
            }
        }
    }

    fn play_line(&mut self, line: &str) -> Result<(), ChessError> {
        let outcome = play_line(self.position(), line, &self.cache)?;

        println!("\n{}", outcome.san.join(" "));
        self.history.push(outcome.position);
        self.display_board();
        self.print_status()
    }

    fn run_command(&mut self, command: &str) -> Result<(), ChessError> {
        // COMMANDS WITHOUT PARAMETERS
        match command {
            "d" => print!("\n{}", self.position().board().diagram(self.flip)),
            "dd" => {
                self.display_enabled = !self.display_enabled;

                if self.display_enabled {
                    println!("\nBoard display enabled");
                    self.display_board();
                } else {
                    println!("\nBoard display disabled");
                }
            }
            "f" => {
                self.flip = !self.flip;
                self.display_board();
            }
            "h" | "help" => self.show_help(),
            "fen" => println!("\n{}", self.position().to_fen()),
            "moves" => {
                println!("\nLegal moves:");
                self.display_legal_moves()?;
            }
            "new" => {
                self.history = vec![Position::new()];
                self.display_board();
            }
            "random" => self.play_random()?,
            "status" => {
                self.print_status()?;
                println!("\nHalf-move clock: {}", self.position().halfmove_clock());
            }
            "undo" => {
                if self.history.len() == 1 {
                    println!("\nNo moves to undo");
                } else {
                    self.history.pop();
                    self.display_board();
                }
            }
            // COMMANDS WITH PARAMETERS
            _ => {
                if let Some(fen) = command.strip_prefix("fen ") {
                    let position = Position::from_fen(fen.trim())?;
                    self.history = vec![position];
                    self.display_board();
                    println!("FEN loaded successfully");
                } else if let Some(line) = command.strip_prefix("line ") {
                    self.play_line(line)?;
                } else {
                    self.play(command)?;
                }
            }
        }

        Ok(())
    }

    fn run_main_loop(&mut self) {
        self.display_board();

        loop {
            let position = self.position();
            println!("\n-------------------------------");
            println!(
                "*   Move: {} | To move: {:?}   *",
                position.fullmove_number(),
                position.turn()
            );
            println!("-------------------------------");

            print!("\nMove OR command > ");
            io::stdout().flush().ok();

            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) => return, // EOF
                Ok(_) => {}
                Err(_) => return,
            }

            let command = input.trim();

            if command.is_empty() {
                continue;
            }

            if command == "q" || command == "quit" {
                println!("\nProgram exiting");
                break;
            }

            if let Err(error) = self.run_command(command) {
                log::debug!("command '{command}' failed: {error:?}");

                match error {
                    ChessError::IllegalMove(_) => println!("\nILLEGAL MOVE! ({error})"),
                    ChessError::MalformedInput(_) => println!("\nINVALID INPUT! ({error})"),
                    ChessError::InvariantViolation(_) => println!("\nBROKEN POSITION! ({error})"),
                }
            }
        }
    }
}

fn main() {
    env_logger::init();

    let mut cli = CLI::new();
    cli.show_help();
    cli.run_main_loop();
}
