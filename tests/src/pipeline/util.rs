use std::path::Path;

/// Prompt answers for one charge at (5, 5), a plot maximum of 10 and `output`.
pub fn single_charge_answers(output: &Path) -> String {
    format!("1\n5 5 1e-9\n10\n{}\n", output.display())
}
