//! Console table rendering.

use colored::Colorize;
use rulesync_core::{FileMap, Rule};

/// Print the generated-file table: one row per artifact, path plus kind.
pub fn print_file_table(files: &FileMap) {
    if files.is_empty() {
        println!("{}", "No files generated.".dimmed());
        return;
    }

    let path_width = files
        .keys()
        .map(|path| path.len())
        .max()
        .unwrap_or(0)
        .max("File".len());

    println!("{:<path_width$}  {}", "File".cyan().bold(), "Type".cyan().bold());
    for (path, artifact) in files {
        let kind = match artifact.kind() {
            "symlink" => "symlink".yellow(),
            kind => kind.normal(),
        };
        println!("{path:<path_width$}  {kind}");
    }
}

/// Print a name/description table for a set of rules, sorted by name.
pub fn print_rules_table(heading: &str, rules: &[Rule]) {
    println!("{}", heading.cyan());
    println!();

    let mut sorted: Vec<&Rule> = rules.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let name_width = sorted
        .iter()
        .map(|rule| rule.name.len())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    println!(
        "{:<name_width$}  {}",
        "Name".cyan().bold(),
        "Description".cyan().bold()
    );
    for rule in sorted {
        println!("{:<name_width$}  {}", rule.name, rule.description().dimmed());
    }
    println!();
}
