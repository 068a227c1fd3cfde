use std::io::{self, ErrorKind};
use std::process::ExitCode;
use std::{env, fs::File};

use log::info;

use cf_recommender::{dataset, Evaluation, RecommendError, Recommender};

struct RunConfig {
    ratings_path: String,
    target: usize,
    reference_count: usize,
    result_count: usize,
    json: bool,
}

fn parse_args(args: &[String]) -> Option<RunConfig> {
    let mut positional: Vec<&str> = Vec::new();
    let mut json = false;
    for arg in args {
        if arg == "--json" {
            json = true;
        } else {
            positional.push(arg.as_str());
        }
    }
    if positional.len() != 4 {
        return None;
    }
    Some(RunConfig {
        ratings_path: positional[0].to_string(),
        target: positional[1].parse().ok()?,
        reference_count: positional[2].parse().ok()?,
        result_count: positional[3].parse().ok()?,
        json,
    })
}

fn print_text(target: usize, evaluation: &Evaluation<f64>) {
    println!("1. Contents and normalized scores of user {target}:");
    let pairs: Vec<String> = evaluation
        .target_scores
        .iter()
        .map(|(content, score)| format!("({content}, {score:.3})"))
        .collect();
    println!("\t[{}]", pairs.join(", "));
    println!();

    println!("2. Similar users and their similarity:");
    for entry in evaluation.neighbors.iter() {
        println!("\tuser id: {}, similarity: {:.6}", entry.user, entry.similarity);
    }
    println!();

    println!("3. Contents recommended to user {target}:");
    let pairs: Vec<String> = evaluation
        .recommendations
        .iter()
        .map(|entry| format!("({}, {:.3})", entry.content, entry.score))
        .collect();
    println!("\t[{}]", pairs.join(", "));
}

fn run(config: &RunConfig) -> Result<(), RecommendError> {
    let file = File::open(&config.ratings_path)?;
    let matrix = dataset::read_ratings::<f64, _>(file)?;
    info!(
        "loaded ratings for {} users from {}",
        matrix.user_count(),
        config.ratings_path
    );

    let recommender: Recommender = Recommender::new(matrix);
    let evaluation =
        recommender.evaluate(config.target, config.reference_count, config.result_count)?;

    if config.json {
        let body = serde_json::to_string_pretty(&evaluation)
            .map_err(|err| io::Error::new(ErrorKind::InvalidData, err))?;
        println!("{body}");
    } else {
        print_text(config.target, &evaluation);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config) = parse_args(&args) else {
        eprintln!(
            "usage: cf-recommender <ratings-file> <target-user> <reference-count> <result-count> [--json]"
        );
        return ExitCode::from(2);
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
