//! Terminal control

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, IsTerminal};

/// Clear the screen and move the cursor home
///
/// Does nothing when stdout is not a terminal, so piped output stays clean.
///
/// # Errors
///
/// Returns an error if the control sequence cannot be written.
pub fn clear_screen() -> io::Result<()> {
    let mut stdout = io::stdout();
    if !stdout.is_terminal() {
        return Ok(());
    }
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    println!();
    Ok(())
}
