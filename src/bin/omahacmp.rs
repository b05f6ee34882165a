use anyhow::Context;
use clap::Parser;
use omaha_equity::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    omaha_equity::log(args.level(), args.log_file.as_deref())?;
    let report = args
        .calculator()?
        .run()
        .context("equity calculation failed")?
        .scoring(args.scoring());
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&report)?),
        false => print!("{}", report),
    }
    Ok(())
}
