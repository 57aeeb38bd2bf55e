use std::{fs, process};

use clap::Parser;
use trobust_cli::{error::Error, App, CheckArgs, CliTemplateSet, Command, OptimizeArgs};

fn main() {
    tracing_subscriber::fmt::init();

    let app = App::parse();
    let result = match &app.command {
        Command::Check(args) => check(args),
        Command::Optimize(args) => optimize(args),
        Command::Schema => schema(),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn load_template_set(path: &std::path::Path) -> Result<CliTemplateSet, Error> {
    let file = fs::File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

fn check(args: &CheckArgs) -> Result<(), Error> {
    let template_set = load_template_set(&args.input)?;
    let (robust, witness) = trobust_cli::check(&template_set, args.allocation.into())?;

    if args.json {
        let output = serde_json::json!({ "robust": robust, "witness": witness });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if robust {
        println!("PASS");
    } else {
        println!("FAIL");
        if let Some(witness) = witness {
            println!(
                "violation: t1={:?} t2={:?} tn={:?} h={}",
                witness.t1.name, witness.t2.name, witness.tn.name, witness.h
            );
        }
    }

    if !robust {
        process::exit(1);
    }
    Ok(())
}

fn optimize(args: &OptimizeArgs) -> Result<(), Error> {
    let template_set = load_template_set(&args.input)?;
    let alloc = trobust_cli::optimize(&template_set)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&alloc)?);
    } else {
        for (name, level) in alloc.iter() {
            println!("{name}: {level:?}");
        }
    }
    Ok(())
}

fn schema() -> Result<(), Error> {
    let schema = schemars::schema_for!(CliTemplateSet);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
