use jobportal::listing::{self, Timestamped};
use jobportal::types::Interview;
use time::OffsetDateTime;
use time::macros::format_description;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterviewTab {
    #[default]
    Upcoming,
    Past,
}

/// Interviews sorted by date and split around "now".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterviewBoard {
    upcoming: Vec<Interview>,
    past: Vec<Interview>,
}

impl InterviewBoard {
    #[must_use]
    pub fn build(mut interviews: Vec<Interview>, now: OffsetDateTime) -> Self {
        listing::sort_by_timestamp(&mut interviews);
        let split = listing::partition_by_time(interviews, now);
        Self {
            upcoming: split.upcoming,
            past: split.past,
        }
    }

    #[must_use]
    pub fn tab(&self, tab: InterviewTab) -> &[Interview] {
        match tab {
            InterviewTab::Upcoming => &self.upcoming,
            InterviewTab::Past => &self.past,
        }
    }

    #[must_use]
    pub fn count(&self, tab: InterviewTab) -> usize {
        self.tab(tab).len()
    }
}

/// `2024-03-01 10:30 UTC`, or a placeholder when unscheduled.
#[must_use]
pub fn format_when(interview: &Interview) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute] UTC");
    interview
        .parsed_timestamp()
        .and_then(|at| at.format(format).ok())
        .unwrap_or_else(|| "Not scheduled".to_owned())
}

#[cfg(test)]
#[path = "interviews_test.rs"]
mod interviews_test;
