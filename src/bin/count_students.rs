use std::env;
use std::process;

use env_logger::Env;
use student_records::{count_students, StdoutSink};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <csv-database-filename>", args[0]);
        return;
    }

    let mut sink = StdoutSink::new();
    if let Err(e) = count_students(&args[1], &mut sink) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
