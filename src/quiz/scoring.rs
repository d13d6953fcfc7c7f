use crate::quiz::AnswerTag;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("cannot score a quiz with no answers")]
    NoAnswers,
}

/// Occurrence counts kept in the order each tag was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: Vec<(AnswerTag, usize)>,
}

impl Tally {
    pub fn new(answers: &[AnswerTag]) -> Self {
        let mut tally = Self::default();
        for tag in answers {
            tally.add(*tag);
        }
        tally
    }

    pub fn add(&mut self, tag: AnswerTag) {
        match self.counts.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((tag, 1)),
        }
    }

    pub fn count(&self, tag: AnswerTag) -> usize {
        self.counts
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// The tag with the highest count. Among tied tags the one seen first wins.
    pub fn top(&self) -> Option<AnswerTag> {
        let mut best: Option<(AnswerTag, usize)> = None;
        for &(tag, count) in &self.counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((tag, count)),
            }
        }
        best.map(|(tag, _)| tag)
    }
}

pub fn score_answers(answers: &[AnswerTag]) -> Result<AnswerTag, ScoreError> {
    Tally::new(answers).top().ok_or(ScoreError::NoAnswers)
}
