use clap::{App, Arg};
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

type MyResult<T> = Result<T, Box<dyn Error>>;

#[derive(Debug)]
pub struct Config {
    files: Vec<String>,
    lines: usize,
    bytes: Option<usize>,
}

fn app() -> App<'static, 'static> {
    App::new("head")
        .version("0.1.0")
        .author("Marcin Rogowski <rogowskimarcin11@gmail.com>")
        .about("Rust head")
        .arg(
            Arg::with_name("lines")
                .short("n")
                .long("lines")
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("COUNT")
                .help("Display the first count lines (default 10)"),
        )
        .arg(
            Arg::with_name("bytes")
                .short("c")
                .long("bytes")
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("BYTES")
                .help("Display the first bytes"),
        )
        .arg(
            Arg::with_name("files")
                .multiple(true)
                .value_name("FILE")
                .help("Input file(s)"),
        )
}

pub fn get_args() -> MyResult<Config> {
    let matches = app().get_matches();

    let lines = matches
        .value_of("lines")
        .map(parse_count)
        .transpose()
        .map_err(|e| format!("illegal line count -- {}", e))?
        .unwrap_or(0);

    let bytes = matches
        .value_of("bytes")
        .map(parse_count)
        .transpose()
        .map_err(|e| format!("illegal byte count -- {}", e))?
        .unwrap_or(0);

    if lines > 0 && bytes > 0 {
        return Err("head: can't combine line and byte counts".into());
    }

    let files = matches.values_of_lossy("files").unwrap_or_default();
    if files.is_empty() {
        let mut usage = Vec::new();
        app().write_help(&mut usage)?;
        return Err(String::from_utf8(usage)?.into());
    }

    Ok(Config {
        files,
        lines: if lines == 0 && bytes == 0 { 10 } else { lines },
        bytes: if bytes > 0 { Some(bytes) } else { None },
    })
}

pub fn run(config: Config) -> MyResult<()> {
    let file_count = config.files.len();

    for (i, filename) in config.files.iter().enumerate() {
        if !Path::new(filename).exists() {
            eprintln!("head: {}: No such file or directory", filename);
            continue;
        }

        if file_count > 1 {
            println!("{}==> {} <==", if i > 0 { "\n" } else { "" }, filename);
        }

        let file = File::open(filename).map_err(|e| format!("{}: {}", filename, e))?;
        let file = BufReader::new(file);

        match config.bytes {
            Some(b) => print_bytes(file, b)?,
            None => print_lines(file, config.lines)?,
        }
    }

    Ok(())
}

// Zero is allowed here; it marks the flag as unset.
fn parse_count(val: &str) -> MyResult<usize> {
    match val.parse() {
        Ok(n) => Ok(n),
        Err(_) => Err(From::from(val)),
    }
}

fn print_lines(file: impl BufRead, line_count: usize) -> MyResult<()> {
    for line in file.lines().take(line_count) {
        println!("{}", line?);
    }

    Ok(())
}

fn print_bytes(file: impl BufRead, byte_count: usize) -> MyResult<()> {
    let mut buffer = Vec::with_capacity(byte_count);
    file.take(byte_count as u64).read_to_end(&mut buffer)?;
    println!("{}", String::from_utf8_lossy(&buffer));

    Ok(())
}
