use tictactoe_common::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    Restart,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" => return Ok(Command::Quit),
        "r" | "restart" => return Ok(Command::Restart),
        _ => {}
    }

    let number: usize = line
        .parse()
        .map_err(|_| format!("'{}' is not a cell number, r or q", line))?;

    if !(1..=CELL_COUNT).contains(&number) {
        return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
    }

    Ok(Command::Place(number - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_are_one_based() {
        assert_eq!(parse_command("1"), Ok(Command::Place(0)));
        assert_eq!(parse_command(" 9\n"), Ok(Command::Place(8)));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_command("r"), Ok(Command::Restart));
        assert_eq!(parse_command("restart\n"), Ok(Command::Restart));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("").is_err());
        assert!(parse_command("center").is_err());
        assert!(parse_command("-1").is_err());
    }
}
