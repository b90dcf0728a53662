//! Plan recommendation from quiz answers
//!
//! Scores the answer to the `goal` question against a keyword list per plan.
//! The plan with the most matches wins; no answer or no match falls back to
//! longevity. Ties go to the plan listed first.

use carepath_accounts::SubscriptionPlan;
use regex::Regex;

use super::entities::QuizAnswer;

/// Question key the recommendation reads
pub const GOAL_QUESTION: &str = "goal";

lazy_static::lazy_static! {
    static ref WEIGHT_LOSS_KEYWORDS: Regex =
        Regex::new(r"(?i)\b(weight|lose|losing|fat|metabolism|glp-?1|appetite|bmi)\b").unwrap();
    static ref HORMONE_KEYWORDS: Regex =
        Regex::new(r"(?i)\b(hormones?|hormonal|menopause|perimenopause|testosterone|estrogen|libido|thyroid|energy)\b").unwrap();
    static ref LONGEVITY_KEYWORDS: Regex =
        Regex::new(r"(?i)\b(longevity|aging|ageing|healthspan|lifespan|prevention|biomarkers?)\b").unwrap();
}

fn score(pattern: &Regex, text: &str) -> usize {
    pattern.find_iter(text).count()
}

/// Recommend a plan for a set of answers
pub fn recommend_plan(answers: &[QuizAnswer]) -> SubscriptionPlan {
    let Some(goal) = answers
        .iter()
        .find(|a| a.question.trim().eq_ignore_ascii_case(GOAL_QUESTION))
    else {
        return SubscriptionPlan::Longevity;
    };

    let scores = [
        (SubscriptionPlan::WeightLoss, score(&WEIGHT_LOSS_KEYWORDS, &goal.answer)),
        (SubscriptionPlan::HormoneHealth, score(&HORMONE_KEYWORDS, &goal.answer)),
        (SubscriptionPlan::Longevity, score(&LONGEVITY_KEYWORDS, &goal.answer)),
    ];

    let mut best = (SubscriptionPlan::Longevity, 0);
    for (plan, points) in scores {
        if points > best.1 {
            best = (plan, points);
        }
    }
    best.0
}
