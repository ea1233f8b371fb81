use doc_compare::Comparison;

fn main() {
    env_logger::init();

    // Two renderings of the same document, one paragraph revised
    let before = "<h1>Notes</h1><p>The meeting is on Tuesday at noon.</p>\
                  <p>Bring the draft agenda.</p>";
    let after = "<h1>Notes</h1><p>The meeting is on Thursday at noon.</p>\
                 <p>Bring the final agenda and the budget.</p>";

    let comparison = Comparison::new(before, after);
    let summary = comparison.summary();

    println!("Diff statistics:");
    println!("  Operations: {}", summary.op_count());
    println!("  Changes: {}", summary.change_count());
    println!("  Added newlines: {}", summary.added_newlines());
    println!("  Removed newlines: {}", summary.removed_newlines());

    println!("\nOperations:");
    for op in summary.ops() {
        println!("  {} [{}..{}] {:?}", op.kind, op.start, op.end, op.text);
    }

    let outcome = comparison.outcome();
    println!("\nHighlighted before document:");
    println!("{}", outcome.before_markup);
    println!("\nHighlighted after document:");
    println!("{}", outcome.after_markup);

    println!("\nChange locations:");
    for location in &outcome.change_locations {
        println!("  {}", location);
    }
}
