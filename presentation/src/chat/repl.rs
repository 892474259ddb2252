//! REPL (Read-Eval-Print Loop) for interactive questioning

use crate::ConsoleFormatter;
use crate::progress::reporter::WaitingSpinner;
use oraculo_application::{OracleGateway, SessionController, Submission};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive question REPL
pub struct OracleRepl {
    controller: SessionController,
    show_spinner: bool,
    save_history: bool,
}

impl OracleRepl {
    /// Create a new REPL around a fresh session.
    pub fn new(oracle: Arc<dyn OracleGateway>) -> Self {
        Self {
            controller: SessionController::new(oracle),
            show_spinner: true,
            save_history: true,
        }
    }

    /// Set whether to show the waiting spinner
    pub fn with_spinner(mut self, show: bool) -> Self {
        self.show_spinner = show;
        self
    }

    /// Set whether to persist readline history across sessions
    pub fn with_saved_history(mut self, save: bool) -> Self {
        self.save_history = save;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = if self.save_history {
            dirs::data_dir().map(|p| p.join("oraculo").join("history.txt"))
        } else {
            None
        };

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("¡Chau!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Oráculo - Modo Chat              │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Escribí una pregunta cerrada (¿...? o ...?).");
        println!();
        println!("Commands:");
        println!("  /help       - Show this help");
        println!("  /historial  - Show the session history");
        println!("  /reset      - Clear input, result, and history");
        println!("  /quit       - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("¡Chau!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /historial       - Show the session history");
                println!("  /reset           - Clear input, result, and history");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/historial" => {
                println!();
                let history = self.controller.state().history();
                if history.is_empty() {
                    println!("Todavía no hay preguntas respondidas.");
                } else {
                    print!("{}", ConsoleFormatter::format_history(history));
                }
                println!();
                false
            }
            "/reset" => {
                self.controller.reset();
                println!("Sesión reiniciada.");
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&mut self, line: &str) {
        println!();

        self.controller.on_input_change(line);

        let spinner = WaitingSpinner::start(self.show_spinner);
        let submission = self.controller.submit().await;
        spinner.finish();

        match submission {
            Submission::Resolved(outcome) => {
                print!("{}", ConsoleFormatter::format_outcome(&outcome));
            }
            Submission::Rejected(_) | Submission::Failed => {
                if let Some(error) = self.controller.state().error() {
                    print!("{}", ConsoleFormatter::format_error(error));
                }
            }
            Submission::Ignored => {}
        }
        println!();
    }
}
