use anyhow::{bail, Context, Result};
use std::{
    fs,
    io::{self, Read},
};

use whitakers_json::words_output::parser::{parse_words_output, ParseMode};

struct Args {
    input_path: String,
    output_path: Option<String>,
    permissive: bool,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optflag(
        "p",
        "permissive",
        "pass unclassifiable lines through instead of failing",
    );

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    let input_path = matches
        .free
        .get(0)
        .context("path to a captured words response is required ('-' for stdin)")?
        .clone();
    let output_path = matches.free.get(1).map(|s| s.clone());

    Ok(Args {
        input_path,
        output_path,
        permissive: matches.opt_present("permissive"),
    })
}

fn main() -> Result<()> {
    let args = get_args()?;

    let text = if args.input_path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        text
    } else {
        fs::read_to_string(&args.input_path)
            .with_context(|| format!("Failed to read: {}", &args.input_path))?
    };

    let mode = if args.permissive {
        ParseMode::Permissive
    } else {
        ParseMode::Strict
    };

    let parsed = parse_words_output(&text, mode).context("Failed to parse")?;

    let json = serde_json::to_string_pretty(&parsed)?;

    match &args.output_path {
        Some(output_path) => fs::write(output_path, json)
            .with_context(|| format!("Failed to write: {}", output_path))?,
        None => println!("{}", json),
    }

    Ok(())
}
