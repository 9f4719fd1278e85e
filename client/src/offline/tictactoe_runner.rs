use std::io::{self, BufRead, Write};

use common::games::tictactoe::{TicTacToeSession, TicTacToeSessionSettings};
use common::log;

use crate::input::{Command, HELP, parse_command};
use super::TerminalRenderer;

type TerminalSession<W> = TicTacToeSession<TerminalRenderer<W>>;

/// Plays games against the bot until the input ends or the player quits.
pub fn run_tictactoe_game<I: BufRead, W: Write>(
    settings: TicTacToeSessionSettings,
    input: I,
    out: W,
) -> io::Result<()> {
    let mut session = TicTacToeSession::new(settings, TerminalRenderer::new(out));

    {
        let w = session.renderer_mut().writer();
        writeln!(w, "You play X, the bot plays O. Difficulty: {}.", settings.difficulty)?;
        writeln!(w, "{}", HELP)?;
    }
    print_board(&mut session)?;
    prompt(&mut session)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Err(e) => writeln!(session.renderer_mut().writer(), "{}", e)?,
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(session.renderer_mut().writer(), "{}", HELP)?,
            Ok(Command::Board) => print_board(&mut session)?,
            Ok(Command::NewGame) => {
                session.restart();
                print_board(&mut session)?;
            }
            Ok(Command::Move(pos)) => {
                if session.state().status().is_terminal() {
                    writeln!(
                        session.renderer_mut().writer(),
                        "The game is over, type 'new' to play again"
                    )?;
                } else if session.play(pos) {
                    if let Some(e) = session.renderer_mut().take_write_error() {
                        return Err(e);
                    }
                    print_board(&mut session)?;
                    if session.state().status().is_terminal() {
                        writeln!(
                            session.renderer_mut().writer(),
                            "Type 'new' to play again or 'quit' to leave"
                        )?;
                    }
                } else {
                    writeln!(session.renderer_mut().writer(), "Cell {} is already taken", pos)?;
                }
            }
        }
        prompt(&mut session)?;
    }

    log!("Leaving after turn {}", session.state().turn());
    Ok(())
}

fn print_board<W: Write>(session: &mut TerminalSession<W>) -> io::Result<()> {
    let board = *session.state().board();
    write!(session.renderer_mut().writer(), "\n{}\n", board)
}

fn prompt<W: Write>(session: &mut TerminalSession<W>) -> io::Result<()> {
    let w = session.renderer_mut().writer();
    write!(w, "> ")?;
    w.flush()
}
