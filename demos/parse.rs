use cf_recommender::{dataset, RatingMatrix, Recommender};

// the first token is the user count, then (user, content, score) triples
const RATINGS: &str = "\
3
0 A1 5 0 A2 3 0 B1 4
1 A1 4 1 A2 2 1 A3 4
2 B1 2 2 B2 5
";

fn main() {
    let matrix: RatingMatrix = dataset::parse_ratings(RATINGS).expect("ratings are well formed");
    let recommender: Recommender = Recommender::new(matrix);

    let evaluation = recommender.evaluate(0, 2, 5).expect("target user exists");
    let body = serde_json::to_string_pretty(&evaluation).expect("evaluation serializes");
    println!("{body}");
}
