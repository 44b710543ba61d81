#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::cmp::Ordering;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};
use typed_builder::TypedBuilder;

use crate::registry::{Registry, RosterError};

/// A single row of the roster table.
#[derive(Tabled, Serialize, Deserialize, TypedBuilder, Clone, Debug)]
#[builder(field_defaults(setter(into)))]
pub struct StudentRow {
    /// * `name`: normalized student name
    #[tabled(rename = "Student")]
    name:    String,
    /// * `age`: age recorded at registration
    #[tabled(rename = "Age")]
    age:     u32,
    /// * `courses`: comma-joined enrolled courses
    #[tabled(rename = "Courses")]
    courses: String,
    /// * `grades`: comma-joined recorded scores
    #[tabled(rename = "Grades")]
    grades:  String,
    /// * `average`: formatted grade average, `n/a` when gradeless
    #[tabled(rename = "Average")]
    average: String,
}

impl StudentRow {
    /// The normalized student name this row describes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The formatted average column value.
    pub fn average(&self) -> &str {
        &self.average
    }
}

/// Aggregate figures over every student that has at least one grade.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassSummary {
    /// Number of students with a non-empty grade set.
    graded_students: usize,
    /// Mean of the per-student averages.
    class_average:   f64,
    /// Highest per-student average.
    highest_average: f64,
    /// Lowest per-student average.
    lowest_average:  f64,
    /// First student (registration order) holding the highest average.
    top_student:     String,
    /// First student (registration order) holding the lowest average.
    bottom_student:  String,
}

impl ClassSummary {
    /// Number of students that contributed to the summary.
    pub fn graded_students(&self) -> usize {
        self.graded_students
    }

    /// Mean of the per-student averages.
    pub fn class_average(&self) -> f64 {
        self.class_average
    }

    /// Highest per-student average.
    pub fn highest_average(&self) -> f64 {
        self.highest_average
    }

    /// Lowest per-student average.
    pub fn lowest_average(&self) -> f64 {
        self.lowest_average
    }

    /// Name of the first student holding the highest average.
    pub fn top_student(&self) -> &str {
        &self.top_student
    }

    /// Name of the first student holding the lowest average.
    pub fn bottom_student(&self) -> &str {
        &self.bottom_student
    }
}

/// Computes the class summary over every graded student.
///
/// A roster where nobody has grades yet is the empty-data condition and
/// yields [`RosterError::NothingGraded`].
pub fn summarize(registry: &Registry) -> Result<ClassSummary, RosterError> {
    let graded: Vec<(&str, f64)> = registry
        .iter()
        .filter_map(|(name, record)| record.average().map(|avg| (name, avg)))
        .collect();

    let Some(&(first_name, first_avg)) = graded.first() else {
        return Err(RosterError::NothingGraded);
    };

    let mut highest = (first_name, first_avg);
    let mut lowest = (first_name, first_avg);
    let mut total = 0.0;
    for &(name, avg) in &graded {
        total += avg;
        // strict comparisons keep the first holder on ties, matching
        // registration order
        if avg > highest.1 {
            highest = (name, avg);
        }
        if avg < lowest.1 {
            lowest = (name, avg);
        }
    }

    Ok(ClassSummary {
        graded_students: graded.len(),
        class_average: total / graded.len() as f64,
        highest_average: highest.1,
        lowest_average: lowest.1,
        top_student: highest.0.to_string(),
        bottom_student: lowest.0.to_string(),
    })
}

/// Ranks graded students by average, descending; ties keep registration
/// order.
pub fn ranking(registry: &Registry) -> Vec<(String, f64)> {
    registry
        .iter()
        .filter_map(|(name, record)| record.average().map(|avg| (name.to_string(), avg)))
        .sorted_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
        .collect()
}

/// Builds one [`StudentRow`] per registered student, in registration
/// order.
pub fn roster_rows(registry: &Registry) -> Vec<StudentRow> {
    registry
        .iter()
        .map(|(name, record)| {
            let average = match record.average() {
                Some(avg) => format!("{avg:.2}"),
                None => "n/a".to_string(),
            };
            StudentRow::builder()
                .name(name)
                .age(record.age())
                .courses(record.courses().iter().join(", "))
                .grades(record.grades().iter().join(", "))
                .average(average)
                .build()
        })
        .collect()
}

/// Renders the roster as a bordered table with a header panel and a
/// student-count footer.
pub fn roster_table(registry: &Registry) -> String {
    let rows = roster_rows(registry);
    let count = rows.len();
    Table::new(&rows)
        .with(Panel::header("Class Roster"))
        .with(Panel::footer(format!("{count} students")))
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(24).keep_words(true)))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}
