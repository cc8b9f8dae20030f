use std::io::Read;

use clap::Parser;
use plugview::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            results,
            limit,
            context_width,
            color,
        }) => {
            let output = plugview::commands::render(&results, limit, context_width, color.enabled())?;
            println!("{output}");
            Ok(())
        }
        Some(Commands::Preview {
            start,
            end,
            file,
            context_width,
        }) => {
            let text = match file {
                Some(path) => std::fs::read_to_string(&path)?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            // A trailing newline from the shell is not part of the text.
            let text = text.strip_suffix('\n').unwrap_or(&text);

            let output = plugview::commands::preview(text, start, end, context_width)?;
            println!("{output}");
            Ok(())
        }
        Some(Commands::Validate { index }) => {
            let output = plugview::commands::validate(&index)?;
            println!("{output}");
            Ok(())
        }
        None => {
            Cli::parse_from(["plugview", "--help"]);
            Ok(())
        }
    }
}
