#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// An enum to represent the recoverable conditions registry operations
/// can report. None of these are fatal; callers print a diagnostic and
/// carry on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A student with the same normalized name is already registered.
    #[error("Student '{0}' already exists.")]
    DuplicateStudent(String),
    /// No student is registered under the normalized name.
    #[error("Student '{0}' not found.")]
    StudentNotFound(String),
    /// The student exists but has no grades recorded yet.
    #[error("Student '{0}' has no grades recorded.")]
    NoGrades(String),
    /// No student in the whole roster has any grades recorded.
    #[error("No grades recorded for any student yet.")]
    NothingGraded,
}

/// The per-student bundle of age, grades, and enrolled courses.
///
/// Grades are a set, so identical repeated scores collapse to one
/// entry. That mirrors the exercise this module is ported from and is
/// kept as documented behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentRecord {
    /// Age in years, fixed at registration.
    age:     u32,
    /// Recorded scores, deduplicated.
    grades:  BTreeSet<u32>,
    /// Enrolled course names, deduplicated.
    courses: BTreeSet<String>,
}

impl StudentRecord {
    /// Creates a record with no grades and the given courses.
    fn new<I, S>(age: u32, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            age,
            grades: BTreeSet::new(),
            courses: courses.into_iter().map(Into::into).collect(),
        }
    }

    /// Age recorded at registration.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// The deduplicated set of recorded scores.
    pub fn grades(&self) -> &BTreeSet<u32> {
        &self.grades
    }

    /// The deduplicated set of enrolled course names.
    pub fn courses(&self) -> &BTreeSet<String> {
        &self.courses
    }

    /// Arithmetic mean of the grade set, or `None` when no grades have
    /// been recorded. The sum is widened to `u64` so a grade set cannot
    /// overflow the accumulator.
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let total: u64 = self.grades.iter().map(|&grade| u64::from(grade)).sum();
        Some(total as f64 / self.grades.len() as f64)
    }
}

/// Normalizes a raw name into the canonical registry key: first
/// character uppercased, the remainder lowercased.
///
/// This is a weak key scheme (multi-word and mixed-case names collide)
/// carried over from the original exercise on purpose.
pub fn normalize_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// The mapping from normalized student name to [`StudentRecord`].
///
/// Iteration follows insertion order of first successful registration,
/// which the listing operations rely on. The registry is a plain value;
/// pass it to whatever needs it instead of reaching for global state.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Records keyed by normalized name.
    students: HashMap<String, StudentRecord>,
    /// Normalized names in first-registration order.
    order:    Vec<String>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered students.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no students are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registers a new student with an empty grade set.
    ///
    /// The duplicate-entry condition is a reported no-op: the existing
    /// record is left untouched.
    pub fn add_student<I, S>(&mut self, name: &str, age: u32, courses: I) -> Result<(), RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = normalize_name(name);
        if self.students.contains_key(&key) {
            return Err(RosterError::DuplicateStudent(name.to_string()));
        }
        self.students.insert(key.clone(), StudentRecord::new(age, courses));
        self.order.push(key);
        tracing::info!("Student '{}' added successfully.", name);
        Ok(())
    }

    /// Records a grade for a student. Re-recording an identical score
    /// is a silent no-op because grades are a set.
    pub fn add_grade(&mut self, name: &str, grade: u32) -> Result<(), RosterError> {
        let key = normalize_name(name);
        match self.students.get_mut(&key) {
            Some(record) => {
                record.grades.insert(grade);
                tracing::info!("Grade {} added for student '{}'.", grade, name);
                Ok(())
            }
            None => Err(RosterError::StudentNotFound(name.to_string())),
        }
    }

    /// Membership test for a course in the student's course set.
    ///
    /// An unknown student yields [`RosterError::StudentNotFound`];
    /// callers print it as the not-found report and treat the check as
    /// not-enrolled, preserving the false-plus-report behavior of the
    /// original exercise.
    pub fn is_enrolled(&self, name: &str, course: &str) -> Result<bool, RosterError> {
        let key = normalize_name(name);
        match self.students.get(&key) {
            Some(record) => Ok(record.courses.contains(course)),
            None => Err(RosterError::StudentNotFound(name.to_string())),
        }
    }

    /// Arithmetic mean of the student's grade set.
    ///
    /// An empty grade set is the empty-data condition and yields
    /// [`RosterError::NoGrades`] rather than a division by zero.
    pub fn average_grade(&self, name: &str) -> Result<f64, RosterError> {
        let key = normalize_name(name);
        let record = self
            .students
            .get(&key)
            .ok_or_else(|| RosterError::StudentNotFound(name.to_string()))?;
        record
            .average()
            .ok_or_else(|| RosterError::NoGrades(name.to_string()))
    }

    /// Every normalized name whose course set contains `course`, in
    /// registration order.
    pub fn students_in_course(&self, course: &str) -> Vec<String> {
        self.iter()
            .filter(|(_, record)| record.courses.contains(course))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Every name with a non-empty grade set whose average is at least
    /// `threshold`, in registration order. Gradeless students never
    /// qualify, whatever the threshold.
    pub fn top_students(&self, threshold: f64) -> Vec<String> {
        self.iter()
            .filter(|(_, record)| record.average().is_some_and(|avg| avg >= threshold))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Removes a student and returns the dropped record. The name also
    /// leaves the registration-order listing.
    pub fn remove_student(&mut self, name: &str) -> Result<StudentRecord, RosterError> {
        let key = normalize_name(name);
        match self.students.remove(&key) {
            Some(record) => {
                self.order.retain(|entry| entry != &key);
                tracing::info!("Student '{}' removed.", name);
                Ok(record)
            }
            None => Err(RosterError::StudentNotFound(name.to_string())),
        }
    }

    /// Looks up the record for a raw (unnormalized) name.
    pub fn record(&self, name: &str) -> Option<&StudentRecord> {
        self.students.get(&normalize_name(name))
    }

    /// Iterates `(normalized name, record)` pairs in registration
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StudentRecord)> {
        self.order
            .iter()
            .filter_map(|key| self.students.get(key).map(|record| (key.as_str(), record)))
    }
}
