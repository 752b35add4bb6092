use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::info;
use wave_partition::io::{load_record, save_table, table_to_json};

fn main() {
    env_logger::init();

    let matches = Command::new("wave_partition")
        .version("0.1.0")
        .about("방향 파랑 스펙트럼 풍랑/너울 분할")
        .arg(
            Arg::new("input")
                .required(true)
                .value_name("RECORD")
                .help("JSON 스펙트럼 레코드 경로")
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("결과 JSON 경로 (없으면 표준 출력)")
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("들여쓰기된 JSON 출력")
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("❌ 오류: {:#}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .map(PathBuf::from)
        .context("missing input record path")?;
    let pretty = matches.get_flag("pretty");

    let record = load_record(&input)?;
    let table = record
        .evaluate()
        .with_context(|| format!("failed to partition {}", input.display()))?;

    if let Some(signal) = table.capacity_error() {
        eprintln!("⚠️  {}", signal);
    }
    info!("{} partition rows from {}", table.len(), input.display());

    match matches.get_one::<String>("output") {
        Some(output) => save_table(output, &table, pretty)?,
        None => println!("{}", table_to_json(&table, pretty)?),
    }
    Ok(())
}
