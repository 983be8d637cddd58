//! The short end-of-module quiz shown in the course player.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
}

pub static QUESTIONS: [Question; 3] = [
    Question {
        prompt: "What does DOM stand for?",
        options: [
            "Document Object Model",
            "Data Object Model",
            "Document Orientation Method",
            "Digital Ordinance Model",
        ],
        correct: 0,
    },
    Question {
        prompt: "Which of these is not a JavaScript data type?",
        options: ["String", "Boolean", "Float", "Undefined"],
        correct: 2,
    },
    Question {
        prompt: "Which keyword declares a constant?",
        options: ["var", "let", "const", "fix"],
        correct: 2,
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    questions: &'static [Question],
    current: usize,
    selected: Option<usize>,
    score: usize,
    finished: bool,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new(&QUESTIONS)
    }
}

impl Quiz {
    pub fn new(questions: &'static [Question]) -> Self {
        Self {
            questions,
            current: 0,
            selected: None,
            score: 0,
            finished: questions.is_empty(),
        }
    }

    pub fn question(&self) -> Option<&Question> {
        if self.finished {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// Zero-based index of the current question.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Lock in an answer for the current question. Returns whether it was
    /// correct, or `None` if the question was already answered.
    pub fn answer(&mut self, option: usize) -> Option<bool> {
        let question = self.question()?;
        if self.selected.is_some() {
            return None;
        }
        let correct = option == question.correct;
        self.selected = Some(option);
        if correct {
            self.score += 1;
        }
        Some(correct)
    }

    /// Move on once the current question is answered.
    pub fn next(&mut self) {
        if self.selected.is_none() || self.finished {
            return;
        }
        self.selected = None;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.finished = true;
        }
    }

    /// Share of correct answers, rounded to a whole percent.
    pub fn percent(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        (self.score as f64 / self.questions.len() as f64 * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_are_locked() {
        let mut quiz = Quiz::default();
        assert_eq!(quiz.answer(0), Some(true));
        assert_eq!(quiz.answer(1), None);
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn test_next_requires_an_answer() {
        let mut quiz = Quiz::default();
        quiz.next();
        assert_eq!(quiz.position(), 0);
        quiz.answer(3);
        quiz.next();
        assert_eq!(quiz.position(), 1);
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn test_full_run() {
        let mut quiz = Quiz::default();
        for option in [0, 1, 2] {
            quiz.answer(option);
            quiz.next();
        }
        assert!(quiz.finished());
        assert!(quiz.question().is_none());
        assert_eq!(quiz.score(), 2);
        assert_eq!(quiz.percent(), 67);
        assert_eq!(quiz.answer(0), None);
    }
}
