// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

/// Score is the output of a board evaluation or a search. The two unbounded
/// variants stand in for negative and positive infinity; a search uses them
/// for its initial window and for checkmates found inside the tree.
///
/// Variants are declared in ascending order, so the derived `Ord` is the
/// order searches rely on: `Loss` is below every evaluated score and `Win` is
/// above every evaluated score.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Score {
    /// Negative infinity: the worst possible outcome for the maximizing side.
    Loss,

    /// A finite score assigned by the evaluator, relative to the engine's side.
    Evaluated(i32),

    /// Positive infinity: the best possible outcome for the maximizing side.
    Win,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Score::Loss => write!(f, "-inf"),
            Score::Evaluated(score) => write!(f, "{}", score),
            Score::Win => write!(f, "+inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Score;

    #[test]
    fn win_cmp() {
        assert!(Score::Win > Score::Evaluated(i32::max_value()));
        assert!(Score::Win > Score::Loss);
        assert!(Score::Win == Score::Win);
    }

    #[test]
    fn loss_cmp() {
        assert!(Score::Loss < Score::Evaluated(i32::min_value()));
        assert!(Score::Loss == Score::Loss);
    }

    #[test]
    fn eval_cmp() {
        assert!(Score::Evaluated(1) < Score::Evaluated(2));
        assert!(Score::Evaluated(-3) < Score::Evaluated(2));
        assert_eq!(Score::Evaluated(7), Score::Evaluated(3).max(Score::Evaluated(7)));
    }

    #[test]
    fn display() {
        assert_eq!("-inf", Score::Loss.to_string());
        assert_eq!("+inf", Score::Win.to_string());
        assert_eq!("-50", Score::Evaluated(-50).to_string());
    }
}
