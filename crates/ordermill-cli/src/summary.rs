use crate::pipeline::RunSummary;

pub fn print_run_summary(summary: &RunSummary) {
    println!("Rows processed: {}", summary.rows);
    match &summary.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: skipped (dry run)"),
    }
}
