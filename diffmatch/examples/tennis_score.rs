//! Validate tennis match scores: two or three sets, each a pair of game
//! counts between 0 and 6. Prints a report for every invalid score.

use diffmatch::{Expectation, MatchDiff, Options, seq};

fn main() {
    let set_scores = [
        seq![seq![6, 4], seq![6, 4], seq![6, 4]],
        seq![seq![8, 4], seq![6, 9], seq![6, 4]],
    ];

    let games = Expectation::interval(0, 6);
    let set = Expectation::seq([games.clone(), games]);
    let match_score = Expectation::all(set, 2_usize..=3);

    let options = Options::new().color_enabled(true);
    for score in &set_scores {
        match match_score.diff_with(score, &options) {
            Ok(None) => {}
            Ok(Some(report)) => println!("{report}\n"),
            Err(err) => eprintln!("could not check {score}: {err}"),
        }
    }
}
