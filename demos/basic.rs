use cf_recommender::{ContentId, RatingMatrix, Recommender};

fn id(token: &str) -> ContentId {
    token.parse().expect("content id is well formed")
}

fn main() {
    // build a small rating matrix by hand
    let mut matrix: RatingMatrix = RatingMatrix::with_user_count(4);
    for (user, token, score) in [
        (0, "A1", 5.0),
        (0, "A2", 3.0),
        (1, "A1", 4.0),
        (1, "A2", 2.0),
        (1, "A3", 4.0),
        (2, "A2", 1.0),
        (2, "B1", 5.0),
        (3, "A1", 2.0),
        (3, "B2", 4.0),
    ] {
        matrix.insert(user, id(token), score).expect("user in range");
    }

    // centering happens once, inside the constructor
    let recommender: Recommender = Recommender::new(matrix);

    // two most similar users, up to three recommendations
    let evaluation = recommender.evaluate(0, 2, 3).expect("target user exists");

    println!("target's centered scores:");
    for (content, score) in &evaluation.target_scores {
        println!("  {content}: {score:.3}");
    }

    println!("neighbors:");
    for entry in evaluation.neighbors.iter() {
        println!("  user {} at {:.6}", entry.user, entry.similarity);
    }

    println!("recommendations:");
    for entry in evaluation.recommendations.iter() {
        println!("  {} at {:.3}", entry.content, entry.score);
    }
}
