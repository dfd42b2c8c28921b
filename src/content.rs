use crate::error::ScheduleResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

/// Content metadata for one numbered lecture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureContent {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub due: String,
}

/// Hand-authored lookup from lecture number to lecture content. Lecture
/// numbers with no entry render as blank rows rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentTable {
    lectures: BTreeMap<u32, LectureContent>,
}

impl ContentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the topic and reading reference for a lecture number.
    pub fn insert(&mut self, lecture: u32, topic: &str, reference: &str) {
        let entry = self.lectures.entry(lecture).or_default();
        entry.topic = topic.to_string();
        entry.reference = reference.to_string();
    }

    /// Mark an assignment as due at the start of a lecture.
    pub fn set_due(&mut self, lecture: u32, due: &str) {
        self.lectures.entry(lecture).or_default().due = due.to_string();
    }

    pub fn get(&self, lecture: u32) -> Option<&LectureContent> {
        self.lectures.get(&lecture)
    }

    pub fn len(&self) -> usize {
        self.lectures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty()
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let file = File::open(path)?;
        let table = serde_json::from_reader(file)?;
        Ok(table)
    }

    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> ScheduleResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
