use jobportal::types::JobFilters;

/// Job search form: what is typed vs. what was last submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobSearch {
    pub draft: JobFilters,
    pub applied: JobFilters,
    pub page: usize,
}

impl Default for JobSearch {
    fn default() -> Self {
        Self {
            draft: JobFilters::default(),
            applied: JobFilters::default(),
            page: 1,
        }
    }
}

impl JobSearch {
    /// Apply the typed filters and go back to the first page.
    pub fn submit(&mut self) {
        self.applied = JobFilters {
            search: self.draft.search.trim().to_owned(),
            location: self.draft.location.trim().to_owned(),
            job_type: self.draft.job_type.trim().to_owned(),
        };
        self.page = 1;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.applied.is_empty()
    }

    #[must_use]
    pub fn empty_message(&self) -> &'static str {
        if self.has_filters() {
            "No jobs match your filters."
        } else {
            "No jobs posted yet."
        }
    }
}

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;
