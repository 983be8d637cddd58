//! Per-lesson completion for one course.

use crate::models::Progress;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressBook {
    course_id: String,
    records: Vec<Progress>,
}

impl ProgressBook {
    pub fn new(course_id: impl Into<String>, records: Vec<Progress>) -> Self {
        Self {
            course_id: course_id.into(),
            records,
        }
    }

    pub fn is_completed(&self, video_id: &str) -> bool {
        self.records
            .iter()
            .any(|p| p.video_id == video_id && p.completed)
    }

    pub fn completed_count(&self) -> usize {
        self.records.iter().filter(|p| p.completed).count()
    }

    /// The record that flips `video_id`, to be posted to `/progress`.
    pub fn toggled_record(&self, video_id: &str) -> Progress {
        let completed = !self.is_completed(video_id);
        Progress {
            course_id: self.course_id.clone(),
            video_id: video_id.to_string(),
            completed,
            progress_percent: if completed { 100 } else { 0 },
        }
    }

    pub fn apply(&mut self, record: Progress) {
        match self.records.iter_mut().find(|p| p.video_id == record.video_id) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Flip a lesson locally and return its new status.
    pub fn toggle(&mut self, video_id: &str) -> bool {
        let record = self.toggled_record(video_id);
        let completed = record.completed;
        self.apply(record);
        completed
    }

    /// Completed share of `total_videos`, 0 to 100.
    pub fn percent(&self, total_videos: usize) -> u32 {
        if total_videos == 0 {
            return 0;
        }
        let done = self.completed_count().min(total_videos);
        (done as f64 / total_videos as f64 * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_and_reports() {
        let mut book = ProgressBook::new("c1", Vec::new());
        assert!(book.toggle("v1"));
        assert!(book.is_completed("v1"));
        assert!(!book.toggle("v1"));
        assert_eq!(book.completed_count(), 0);
    }

    #[test]
    fn test_record_shape() {
        let book = ProgressBook::new("c1", Vec::new());
        let record = book.toggled_record("v2");
        assert_eq!(record.course_id, "c1");
        assert!(record.completed);
        assert_eq!(record.progress_percent, 100);
    }

    #[test]
    fn test_percent() {
        let mut book = ProgressBook::new("c1", Vec::new());
        assert_eq!(book.percent(0), 0);
        book.toggle("v1");
        assert_eq!(book.percent(3), 33);
        book.toggle("v2");
        book.toggle("v3");
        assert_eq!(book.percent(3), 100);
    }
}
