use mazepath_core::Algorithm;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const DEFAULT_MAZE_FILE: &str = "maze.txt";

pub fn prompt_maze_file<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PathBuf> {
    write!(
        output,
        "Maze file name or path [Press Enter for {}]: ",
        DEFAULT_MAZE_FILE
    )?;
    output.flush()?;

    let answer = read_answer(input)?;
    if answer.is_empty() {
        Ok(PathBuf::from(DEFAULT_MAZE_FILE))
    } else {
        Ok(PathBuf::from(answer))
    }
}

pub fn prompt_algorithm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Algorithm, Box<dyn std::error::Error>> {
    writeln!(output)?;
    for (index, algorithm) in Algorithm::ALL.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, algorithm.display_name())?;
    }
    write!(output, "Choose Algorithm: ")?;
    output.flush()?;

    let answer = read_answer(input)?;
    if answer.is_empty() {
        return Ok(Algorithm::default());
    }
    Ok(answer.parse::<Algorithm>()?)
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
