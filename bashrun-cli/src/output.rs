//! Outcome printing shared by local and server commands

use bashrun_core::domain::command::CommandOutcome;
use colored::*;

pub fn print_outcomes(outcomes: &[CommandOutcome]) {
    if outcomes.is_empty() {
        println!("{}", "No outcomes.".yellow());
        return;
    }

    for outcome in outcomes {
        print_outcome(outcome);
    }
}

pub fn print_outcome(outcome: &CommandOutcome) {
    let marker = if outcome.is_error {
        "✗".red().bold()
    } else {
        "✓".green().bold()
    };

    println!("┌─ {} {}", marker, outcome.command.bold());
    for line in outcome.log.lines() {
        println!("│ {}", line);
    }
    println!("└{}", "─".repeat(40).dimmed());
}
