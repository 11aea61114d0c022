use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use regex::Regex;

use mmheaplib::bench;
use mmheaplib::config;
use mmheaplib::heap;
use mmheaplib::log_file;
use mmheaplib::{Counted, HeapErr, Stats};

fn main() {
    // ---------------------测试代码---------------------
    #[cfg(debug_assertions)]
    {
        eprintln!("debug mode");
    }
    // --------------------------------------------------
    if let Err(e) = run_main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), Box<dyn Error>> {
    let log_dir = Arg::with_name("log-dir")
        .long("log-dir")
        .takes_value(true)
        .help("directory for log files");
    // 获取命令行解析
    let matches = App::new("mmheap")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("sort")
                .about("sort integers through a min-max heap")
                .arg(Arg::with_name("input").required(true))
                .arg(Arg::with_name("o").short("o").takes_value(true))
                .arg(Arg::with_name("desc").long("desc"))
                .arg(log_dir.clone()),
        )
        .subcommand(
            SubCommand::with_name("bench")
                .about("run push/pop workloads against mmheap and biheap")
                .arg(Arg::with_name("n").short("n").takes_value(true))
                .arg(Arg::with_name("rounds").short("r").long("rounds").takes_value(true))
                .arg(Arg::with_name("seed").long("seed").takes_value(true))
                .arg(log_dir),
        )
        .get_matches();

    config::init();
    match matches.subcommand() {
        ("sort", Some(sub)) => {
            set_logging(sub);
            run_sort(sub)?
        }
        ("bench", Some(sub)) => {
            set_logging(sub);
            run_bench(sub)?
        }
        _ => unreachable!("subcommand required"),
    }
    config::dump();
    Ok(())
}

fn set_logging(matches: &ArgMatches) {
    if let Some(dir) = matches.value_of("log-dir") {
        config::set_log_dir(dir);
    }
}

fn parse_or<T: std::str::FromStr>(matches: &ArgMatches, name: &str, default: T) -> Result<T, Box<dyn Error>>
where
    T::Err: Error + 'static,
{
    match matches.value_of(name) {
        Some(v) => Ok(v.parse::<T>()?),
        None => Ok(default),
    }
}

/// 读入整数, 允许空白和逗号分隔
fn read_numbers(text: &str) -> Result<Vec<i64>, Box<dyn Error>> {
    let sep = Regex::new(r"[\s,]+")?;
    let mut out = Vec::new();
    for token in sep.split(text.trim()) {
        if token.is_empty() {
            continue;
        }
        let v = token
            .parse::<i64>()
            .map_err(|e| format!("bad number {:?}: {}", token, e))?;
        out.push(v);
    }
    Ok(out)
}

/// 建堆后从min端(或max端)依次弹出
fn heap_sort(values: Vec<i64>, desc: bool) -> Result<(Vec<i64>, Stats), HeapErr> {
    let mut seq = Counted::new(values);
    heap::init(&mut seq);
    let mut sorted = Vec::with_capacity(seq.get_ref().len());
    while !seq.get_ref().is_empty() {
        let v = if desc {
            heap::pop_max(&mut seq)?
        } else {
            heap::pop(&mut seq)?
        };
        sorted.push(v);
    }
    Ok((sorted, seq.stats()))
}

fn run_sort(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let filename = matches.value_of("input").unwrap_or("-");
    config::set_file_path(filename);
    let text = if filename == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        std::fs::read_to_string(filename)?
    };
    let values = read_numbers(&text)?;
    log_file!("sort.txt", "{}: {} values", filename, values.len());

    let (sorted, stats) = heap_sort(values, matches.is_present("desc"))?;

    let mut out: Box<dyn Write> = match matches.value_of("o") {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    for v in sorted.iter() {
        writeln!(out, "{}", v)?;
    }
    out.flush()?;

    config::record("sort.txt", "compare", stats.compares, &format!("{} compares", stats.compares));
    config::record("sort.txt", "swap", stats.swaps, &format!("{} swaps", stats.swaps));
    Ok(())
}

fn run_bench(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let n: usize = parse_or(matches, "n", 1000)?;
    let rounds: usize = parse_or(matches, "rounds", 10)?;
    let seed: u64 = parse_or(matches, "seed", 0)?;

    for w in bench::ALL.iter() {
        let ours = bench::run_engine(*w, n, rounds, seed);
        let theirs = bench::run_biheap(*w, n, rounds, seed);
        if ours.checksum != theirs.checksum {
            return Err(format!("{}: checksum mismatch {} != {}", w, ours.checksum, theirs.checksum).into());
        }
        println!("{}", ours);
        println!("{}", theirs);
        config::record("bench.txt", "compare", ours.compares, &ours.to_string());
        config::count("swap", ours.swaps);
        config::note("bench.txt", &theirs.to_string());
    }
    Ok(())
}
