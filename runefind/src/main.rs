use std::fs::File;
use std::io::{prelude::*, stdin, BufReader};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use runetrie::dictionary::load_dictionary_file;
use runetrie::Automaton;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ArgColor {
    Never,
    Always,
    Auto,
}

#[derive(Parser, Debug)]
#[command(
    name = "runefind",
    about = "A program to find patterns in files.",
    disable_help_flag = true
)]
struct Args {
    /// Match patterns separated with new lines.
    #[arg(short)]
    patterns: Option<String>,

    /// A filename containing patterns, one per line.
    #[arg(short = 'f')]
    pattern_file: Option<PathBuf>,

    /// Suppresses printing filenames.
    #[arg(short = 'h', long)]
    no_filename: bool,

    /// Prints line numbers.
    #[arg(short = 'n', long)]
    line_number: bool,

    /// Prints the number of occurrences of each pattern instead of matching lines.
    #[arg(short = 'c', long)]
    count: bool,

    /// Highlights the matching texts.
    #[arg(long, value_enum, default_value_t = ArgColor::Never)]
    color: ArgColor,

    /// Prints help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// File paths.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

struct Finder<'a> {
    pma: &'a Automaton,
    color: ArgColor,
    line_number: bool,
    // Occurrences per pattern index, filled only in the count mode.
    counts: Option<Vec<usize>>,
}

impl Finder<'_> {
    fn find_in_reader<R>(
        &mut self,
        rdr: R,
        filename: Option<&str>,
        stream: &mut StandardStream,
    ) -> Result<(), std::io::Error>
    where
        R: BufRead,
    {
        for (i, line) in rdr.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    if let Some(filename) = filename {
                        eprintln!("{}: {:?}", filename, err);
                    } else {
                        eprintln!("{:?}", err);
                    }
                    break;
                }
            };
            if let Some(counts) = self.counts.as_mut() {
                if let Some(matches) = self.pma.search(&line) {
                    for (pattern, offsets) in matches {
                        counts[pattern] += offsets.len();
                    }
                }
                continue;
            }
            let line_no = if self.line_number { Some(i + 1) } else { None };
            self.find_and_output(&line, filename, line_no, stream)?;
        }
        Ok(())
    }

    /// Finds patterns in `line` and prints it to the given `stream`.
    /// When no pattern is found, this function does not print any string.
    fn find_and_output(
        &self,
        line: &str,
        filename: Option<&str>,
        line_no: Option<usize>,
        stream: &mut StandardStream,
    ) -> Result<(), std::io::Error> {
        match self.color {
            ArgColor::Never => {
                if self.pma.find_overlapping_iter(line).next().is_some() {
                    write_prefix(filename, line_no, stream)?;
                    writeln!(stream, "{}", line)?;
                }
            }
            ArgColor::Always | ArgColor::Auto => {
                let mut color_counts = vec![0isize; line.len() + 1];
                let mut matched = false;
                for m in self.pma.find_overlapping_iter(line) {
                    matched = true;
                    color_counts[m.start()] += 1;
                    color_counts[m.end()] -= 1;
                }
                if matched {
                    write_prefix(filename, line_no, stream)?;
                    let mut depth = 0;
                    let mut prev_pos = 0;
                    for (pos, c) in color_counts.into_iter().enumerate() {
                        let new_depth = depth + c;
                        if depth == 0 && new_depth != 0 {
                            stream.reset()?;
                            write!(stream, "{}", &line[prev_pos..pos])?;
                            prev_pos = pos;
                        } else if depth != 0 && new_depth == 0 {
                            stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                            write!(stream, "{}", &line[prev_pos..pos])?;
                            prev_pos = pos;
                        }
                        depth = new_depth;
                    }
                    stream.reset()?;
                    writeln!(stream, "{}", &line[prev_pos..])?;
                }
            }
        }
        Ok(())
    }
}

fn write_prefix(
    filename: Option<&str>,
    line_no: Option<usize>,
    stream: &mut StandardStream,
) -> Result<(), std::io::Error> {
    if let Some(filename) = filename {
        write!(stream, "{}:", filename)?;
    }
    if let Some(line_no) = line_no {
        write!(stream, "{}:", line_no)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Builds a PMA from given patterns.
    let mut patterns = vec![];
    if let Some(filename) = &args.pattern_file {
        patterns.extend(load_dictionary_file(filename)?);
    }
    if let Some(pats_string) = &args.patterns {
        patterns.extend(pats_string.split('\n').map(String::from));
    }
    let pma = Automaton::new(&patterns);

    // Initialize the stream of termcolor.
    let mut stdout = match args.color {
        ArgColor::Never => StandardStream::stdout(ColorChoice::Never),
        ArgColor::Always => StandardStream::stdout(ColorChoice::Always),
        ArgColor::Auto => StandardStream::stdout(ColorChoice::Auto),
    };

    let mut finder = Finder {
        pma: &pma,
        color: args.color,
        line_number: args.line_number,
        counts: args.count.then(|| vec![0; patterns.len()]),
    };

    // For the standard input.
    if args.files.is_empty() {
        finder.find_in_reader(stdin().lock(), None, &mut stdout)?;
    }

    // For the given files.
    for filename in &args.files {
        match File::open(filename) {
            Ok(file) => {
                let filename = filename
                    .to_str()
                    .filter(|_| !args.no_filename);
                finder.find_in_reader(BufReader::new(file), filename, &mut stdout)?;
            }
            Err(err) => {
                if let Some(filename) = filename.to_str() {
                    eprintln!("{}: {:?}", filename, err);
                } else {
                    eprintln!("{:?}", err);
                }
            }
        }
    }

    if let Some(counts) = &finder.counts {
        for (pattern, &count) in patterns.iter().zip(counts) {
            if count != 0 {
                writeln!(stdout, "{}\t{}", pattern, count)?;
            }
        }
    }

    Ok(())
}
