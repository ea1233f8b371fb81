use doc_compare::Comparison;

fn main() {
    env_logger::init();

    let before = "<p>one two three four five six</p>";
    let after = "<p>one TWO three FOUR five SIX</p>";

    let mut comparison = Comparison::new(before, after);

    if !comparison.has_changes() {
        println!("No changes to navigate.");
        return;
    }

    let count = comparison.cursor().count();
    println!("Tracking {} change regions.", count);

    println!("\nStepping forward through every change and wrapping around:");
    for _ in 0..=count {
        let location = comparison.cursor_mut().advance().cloned();
        if let Some(location) = location {
            println!("  -> {} (index {})", location, comparison.cursor().index());
        }
    }

    println!("\nStepping backward wraps the other way:");
    comparison.cursor_mut().reset();
    let location = comparison.cursor_mut().retreat().cloned();
    if let Some(location) = location {
        println!("  <- {} (index {})", location, comparison.cursor().index());
    }
}
