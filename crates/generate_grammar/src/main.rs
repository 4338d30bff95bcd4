// crates/generate_grammar/src/main.rs

use anyhow::Result;
use clap::{Arg, Command};

use filter_grammar_lines::extract_grammar_from_file;

fn main() -> Result<()> {
    let matches = Command::new("generate_grammar")
        .version("0.1.0")
        .about("Extracts embedded grammar documentation comments from a source file")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .required(true)
                .help("Path to the source file to scan"),
        )
        .get_matches();

    let file_path = matches.get_one::<String>("file").unwrap();

    let grammar = extract_grammar_from_file(file_path)?;
    print!("{}", grammar);

    Ok(())
}
