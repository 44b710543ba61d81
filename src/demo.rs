#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use colored::Colorize;

use crate::{
    registry::{Registry, RosterError},
    report,
};

/// Builds the walkthrough roster: Alice, Bob, and Diana with the grades
/// the original exercise records for them.
pub fn seeded_registry() -> Registry {
    let mut registry = Registry::new();
    let steps: [Result<(), RosterError>; 3] = [
        registry.add_student("Alice", 20, ["Math", "Physics"]),
        registry.add_student("Bob", 22, ["Math", "Biology"]),
        registry.add_student("Diana", 23, ["Chemistry", "Physics"]),
    ];
    for step in steps {
        report_outcome(step);
    }
    for (name, grade) in [("Alice", 90), ("Alice", 85), ("Bob", 75), ("Diana", 95)] {
        report_outcome(registry.add_grade(name, grade));
    }
    registry
}

/// Prints a diagnostic for a failed registry operation; successes are
/// already logged by the registry itself.
fn report_outcome(result: Result<(), RosterError>) {
    if let Err(e) = result {
        eprintln!("{}", e.to_string().red());
    }
}

/// Replays the original exercise's driver scenario end to end, printing
/// every diagnostic and query result.
pub fn run() {
    let mut registry = seeded_registry();

    // duplicate add and an unknown student, to show both reported
    // conditions leave the roster untouched
    report_outcome(registry.add_student("alice", 99, ["History"]));
    report_outcome(registry.add_grade("Charlie", 100));

    println!();
    for (name, course) in [("Alice", "Math"), ("Alice", "History"), ("Bob", "Biology")] {
        match registry.is_enrolled(name, course) {
            Ok(true) => println!("{name} is enrolled in {course}: {}", "yes".green()),
            Ok(false) => println!("{name} is enrolled in {course}: {}", "no".yellow()),
            Err(e) => eprintln!("{}", e.to_string().red()),
        }
    }

    println!();
    for name in ["Alice", "Bob", "Diana", "Charlie"] {
        match registry.average_grade(name) {
            Ok(avg) => println!("Average grade for {name}: {avg:.2}"),
            Err(e) => eprintln!("{}", e.to_string().red()),
        }
    }

    println!();
    for course in ["Math", "Physics", "History"] {
        let enrolled = registry.students_in_course(course);
        println!("Students taking {course}: [{}]", enrolled.join(", "));
    }

    println!();
    for threshold in [80.0, 90.0, 100.0] {
        let top = registry.top_students(threshold);
        println!("Top students (>= {threshold}): [{}]", top.join(", "));
    }

    println!();
    println!("{}", report::roster_table(&registry));

    match report::summarize(&registry) {
        Ok(summary) => {
            println!(
                "Class average {:.2} across {} graded students; top {} ({:.2}), bottom {} ({:.2})",
                summary.class_average(),
                summary.graded_students(),
                summary.top_student(),
                summary.highest_average(),
                summary.bottom_student(),
                summary.lowest_average(),
            );
        }
        Err(e) => eprintln!("{}", e.to_string().red()),
    }
}
