// Summary - Done/total counter and the progress message shown next to it

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Start,
    Continue,
    Complete,
}

impl Progress {
    pub fn from_counts(count: usize, total: usize) -> Self {
        if count == 0 {
            Progress::Start
        } else if count < total {
            Progress::Continue
        } else {
            Progress::Complete
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Progress::Start => "Everything still ahead of you 🌱",
            Progress::Continue => "Lovely, keep it up 💧",
            Progress::Complete => "Everything watered for today ✅",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub done: usize,
    pub total: usize,
}

impl Summary {
    pub fn progress(&self) -> Progress {
        Progress::from_counts(self.done, self.total)
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_done_asks_to_start() {
        assert_eq!(Progress::from_counts(0, 3), Progress::Start);
    }

    #[test]
    fn partial_progress_asks_to_continue() {
        assert_eq!(Progress::from_counts(1, 3), Progress::Continue);
        assert_eq!(Progress::from_counts(2, 3), Progress::Continue);
    }

    #[test]
    fn all_done_is_complete() {
        assert_eq!(Progress::from_counts(3, 3), Progress::Complete);
        assert_eq!(Progress::from_counts(1, 1), Progress::Complete);
    }

    #[test]
    fn zero_items_is_start() {
        assert_eq!(Progress::from_counts(0, 0), Progress::Start);
        assert_eq!(Summary { done: 0, total: 0 }.ratio(), 0.0);
    }

    #[test]
    fn messages_differ_per_tier() {
        let start = Progress::Start.message();
        let cont = Progress::Continue.message();
        let done = Progress::Complete.message();
        assert_ne!(start, cont);
        assert_ne!(cont, done);
    }
}
