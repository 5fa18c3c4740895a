//! Winner selection over the per-class scores of one entity.

use fuzzytype_config::ClassifierConfig;
use fuzzytype_core::{fuzzy_argmax, FuzzyError, Result, Score, ScoreMode, Tfn};

/// Best class of an entity and whether it passes the validity threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Winner {
    /// Index into the scored classes.
    pub index: usize,
    /// Crisp value of the winning score, as compared with the threshold.
    pub crisp_score: f64,
    pub valid: bool,
}

/// Picks the best of `scores` according to `config.score_mode`.
///
/// - crisp: every score is reduced to a real value and the first maximum
///   wins
/// - fuzzy: [`fuzzy_argmax`] sweeps the TFNs with
///   `config.membership_threshold`
///
/// The winner is valid when its crisp value, defuzzified with
/// [`ClassifierConfig::validity_mode`], exceeds `config.validity_threshold`.
/// Returns `Ok(None)` when there are no scores.
///
/// # Errors
///
/// [`FuzzyError::InvalidArgument`] if a crisp score reaches the fuzzy path,
/// and any error of the comparator or defuzzifier.
pub fn select_winner(scores: &[Score], config: &ClassifierConfig) -> Result<Option<Winner>> {
    let validity_mode = config.validity_mode();

    let index = match config.score_mode {
        ScoreMode::Crisp(_) => {
            let mut best: Option<(usize, f64)> = None;
            for (index, score) in scores.iter().enumerate() {
                let value = score.to_crisp(validity_mode)?;
                if best.map_or(true, |(_, best_value)| value > best_value) {
                    best = Some((index, value));
                }
            }
            best.map(|(index, _)| index)
        }
        ScoreMode::Fuzzy => {
            let tfns = scores
                .iter()
                .map(|score| {
                    score.as_fuzzy().copied().ok_or_else(|| {
                        FuzzyError::InvalidArgument(format!(
                            "fuzzy ranking requires fuzzy scores, got {}",
                            score
                        ))
                    })
                })
                .collect::<Result<Vec<Tfn>>>()?;
            fuzzy_argmax(&tfns, config.membership_threshold)?
        }
    };

    let Some(index) = index else {
        return Ok(None);
    };
    let crisp_score = scores[index].to_crisp(validity_mode)?;
    Ok(Some(Winner {
        index,
        crisp_score,
        valid: crisp_score > config.validity_threshold,
    }))
}
