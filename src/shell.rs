#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{registry::Registry, report};

/// The numbered menu printed before the loop and on request.
const MENU: &[&str] = &[
    "Add a new student",
    "Record a grade",
    "Check enrollment",
    "Show a student's average",
    "List students by course",
    "List top students",
    "Show the class report",
    "Remove a student",
    "Exit",
];

/// Prints the numbered menu.
fn print_menu() {
    println!("\nMenu:");
    for (index, option) in MENU.iter().enumerate() {
        println!("{}. {}", index + 1, option);
    }
}

/// Prompts on stdout and reads one trimmed line from stdin. Returns
/// `None` once stdin reaches end of input.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush().context("Could not flush stdout")?;
    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Could not read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts until a valid `u32` arrives; a blank line aborts the current
/// menu action. Returns `None` on abort or end of input.
fn prompt_number(label: &str) -> Result<Option<u32>> {
    loop {
        let Some(raw) = prompt(label)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<u32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("{}", "Please enter a whole number.".yellow()),
        }
    }
}

/// Prompts until a valid `f64` arrives; a blank line aborts the
/// current menu action. Returns `None` on abort or end of input.
fn prompt_float(label: &str) -> Result<Option<f64>> {
    loop {
        let Some(raw) = prompt(label)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("{}", "Please enter a number.".yellow()),
        }
    }
}

/// Runs the interactive menu loop over a fresh in-memory roster.
///
/// Registry errors are printed and the loop continues; only an I/O
/// failure on the console ends the session early.
pub fn run() -> Result<()> {
    let mut registry = Registry::new();
    println!("Welcome to the student roster!");
    print_menu();

    loop {
        let Some(choice) = prompt("Enter your choice (1-9): ")? else {
            break;
        };
        match choice.as_str() {
            "1" => add_student(&mut registry)?,
            "2" => record_grade(&mut registry)?,
            "3" => check_enrollment(&registry)?,
            "4" => show_average(&registry)?,
            "5" => list_by_course(&registry)?,
            "6" => list_top(&registry)?,
            "7" => show_report(&registry),
            "8" => remove_student(&mut registry)?,
            "9" => break,
            _ => {
                println!("{}", "Invalid choice. Please try again.".yellow());
                print_menu();
            }
        }
    }

    println!("Exiting the student roster. Goodbye!");
    Ok(())
}

/// Menu action: register a new student.
fn add_student(registry: &mut Registry) -> Result<()> {
    let Some(name) = prompt("Student name: ")? else {
        return Ok(());
    };
    let Some(age) = prompt_number("Age: ")? else {
        return Ok(());
    };
    let Some(courses) = prompt("Courses (comma separated): ")? else {
        return Ok(());
    };
    let courses: Vec<String> = courses
        .split(',')
        .map(str::trim)
        .filter(|course| !course.is_empty())
        .map(String::from)
        .collect();
    if let Err(e) = registry.add_student(&name, age, courses) {
        println!("{}", e.to_string().red());
    } else {
        println!("Student '{name}' added successfully.");
    }
    Ok(())
}

/// Menu action: record one grade for a student.
fn record_grade(registry: &mut Registry) -> Result<()> {
    let Some(name) = prompt("Student name: ")? else {
        return Ok(());
    };
    let Some(grade) = prompt_number("Grade: ")? else {
        return Ok(());
    };
    match registry.add_grade(&name, grade) {
        Ok(()) => println!("Grade {grade} added for student '{name}'."),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

/// Menu action: enrollment membership check.
fn check_enrollment(registry: &Registry) -> Result<()> {
    let Some(name) = prompt("Student name: ")? else {
        return Ok(());
    };
    let Some(course) = prompt("Course: ")? else {
        return Ok(());
    };
    match registry.is_enrolled(&name, &course) {
        Ok(true) => println!("{}", format!("{name} is enrolled in {course}.").green()),
        Ok(false) => println!("{name} is not enrolled in {course}."),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

/// Menu action: a single student's grade average.
fn show_average(registry: &Registry) -> Result<()> {
    let Some(name) = prompt("Student name: ")? else {
        return Ok(());
    };
    match registry.average_grade(&name) {
        Ok(avg) => println!("Average grade for '{name}': {avg:.2}"),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

/// Menu action: insertion-ordered listing of a course's students.
fn list_by_course(registry: &Registry) -> Result<()> {
    let Some(course) = prompt("Course: ")? else {
        return Ok(());
    };
    let enrolled = registry.students_in_course(&course);
    if enrolled.is_empty() {
        println!("No students are taking {course}.");
    } else {
        println!("Students taking {course}: {}", enrolled.join(", "));
    }
    Ok(())
}

/// Menu action: students at or above a grade threshold. The threshold
/// is a float so cutoffs like 87.5 compare against exact averages.
fn list_top(registry: &Registry) -> Result<()> {
    let Some(threshold) = prompt_float("Threshold: ")? else {
        return Ok(());
    };
    let top = registry.top_students(threshold);
    if top.is_empty() {
        println!("No students at or above {threshold}.");
    } else {
        println!("Top students: {}", top.join(", "));
    }
    Ok(())
}

/// Menu action: roster table plus the class summary.
fn show_report(registry: &Registry) {
    if registry.is_empty() {
        println!("No students recorded yet.");
        return;
    }
    println!("{}", report::roster_table(registry));
    match report::summarize(registry) {
        Ok(summary) => println!(
            "Class average {:.2}; top {} ({:.2}), bottom {} ({:.2})",
            summary.class_average(),
            summary.top_student(),
            summary.highest_average(),
            summary.bottom_student(),
            summary.lowest_average(),
        ),
        Err(e) => println!("{}", e.to_string().yellow()),
    }
}

/// Menu action: drop a student from the roster.
fn remove_student(registry: &mut Registry) -> Result<()> {
    let Some(name) = prompt("Student name: ")? else {
        return Ok(());
    };
    match registry.remove_student(&name) {
        Ok(record) => println!(
            "Removed '{name}' ({} grades, {} courses).",
            record.grades().len(),
            record.courses().len()
        ),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}
