use std::collections::BTreeMap;

use jobportal::types::{Id, JobTest, TestAnswer, TestQuestion};

/// Options a question offers, as `(letter, text)` pairs.
#[must_use]
pub fn options(question: &TestQuestion) -> [(&'static str, &str); 4] {
    [
        ("A", question.option_a.as_str()),
        ("B", question.option_b.as_str()),
        ("C", question.option_c.as_str()),
        ("D", question.option_d.as_str()),
    ]
}

/// Answers picked so far on a screening test.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    question_ids: Vec<Id>,
    picked: BTreeMap<Id, String>,
}

impl AnswerSheet {
    #[must_use]
    pub fn for_test(test: &JobTest) -> Self {
        Self {
            question_ids: test.questions.iter().map(|q| q.id).collect(),
            picked: BTreeMap::new(),
        }
    }

    /// Record a pick. Ids outside the test are ignored.
    pub fn pick(&mut self, question_id: Id, option: &str) {
        if self.question_ids.contains(&question_id) {
            self.picked.insert(question_id, option.to_owned());
        }
    }

    #[must_use]
    pub fn picked(&self, question_id: Id) -> Option<&str> {
        self.picked.get(&question_id).map(String::as_str)
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.picked.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered() == self.question_ids.len()
    }

    /// Answers in question order; unanswered questions are left out.
    #[must_use]
    pub fn answers(&self) -> Vec<TestAnswer> {
        self.question_ids
            .iter()
            .filter_map(|id| {
                self.picked.get(id).map(|option| TestAnswer {
                    question_id: *id,
                    selected_option: option.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "screening_test.rs"]
mod screening_test;
