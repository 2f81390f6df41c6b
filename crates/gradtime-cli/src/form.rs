//! The interactive form: five bounded numeric fields, grouped the way the
//! original page laid them out, collected over any `BufRead`/`Write` pair
//! so the loop is testable without a terminal.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use gradtime_classifiers::features::{
    self, FeatureRecord, FieldSpec,
};

/// Collect one complete submission. Returns `None` when the user quits
/// (`q` or end of input); completing all five fields is the submit action.
///
/// Bounds are enforced here, at the input layer: out-of-range or
/// non-numeric values re-prompt and never reach the predictor. A blank
/// line keeps the field's default.
pub fn prompt_record(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<FeatureRecord>> {
    writeln!(out, "Student data (blank line keeps the default, 'q' quits):")?;
    writeln!(out, "Academic record")?;
    let act_score = match prompt_field(&features::ACT_SCORE, input, out)? {
        Some(v) => v,
        None => return Ok(None),
    };
    let sat_score = match prompt_field(&features::SAT_SCORE, input, out)? {
        Some(v) => v,
        None => return Ok(None),
    };
    let high_school_gpa = match prompt_field(&features::HIGH_SCHOOL_GPA, input, out)? {
        Some(v) => v,
        None => return Ok(None),
    };

    writeln!(out, "Family background")?;
    let parental_income = match prompt_field(&features::PARENTAL_INCOME, input, out)? {
        Some(v) => v,
        None => return Ok(None),
    };
    let parent_education_level = match prompt_field(&features::PARENT_EDUCATION, input, out)? {
        Some(v) => v,
        None => return Ok(None),
    };

    Ok(Some(FeatureRecord {
        act_score,
        sat_score,
        high_school_gpa,
        parental_income,
        parent_education_level,
    }))
}

/// Prompt until the field holds an in-range number. `None` means quit.
fn prompt_field(
    spec: &FieldSpec,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<f32>> {
    loop {
        match spec.max {
            Some(max) => write!(
                out,
                "  {} [{}-{}] (default {}): ",
                spec.label, spec.min, max, spec.default
            )?,
            None => write!(
                out,
                "  {} [>= {}] (default {}): ",
                spec.label, spec.min, spec.default
            )?,
        }
        out.flush()?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .context("failed to read form input")?;
        if bytes == 0 {
            return Ok(None);
        }

        let entry = line.trim();
        if entry.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if entry.is_empty() {
            return Ok(Some(spec.default));
        }

        match entry.parse::<f32>() {
            Ok(value) if spec.contains(value) => return Ok(Some(value)),
            Ok(value) => {
                writeln!(out, "  {} is out of range for {}.", value, spec.label)?;
            }
            Err(_) => {
                writeln!(out, "  '{}' is not a number.", entry)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_form(lines: &str) -> Option<FeatureRecord> {
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        let mut out = Vec::new();
        prompt_record(&mut input, &mut out).unwrap()
    }

    #[test]
    fn full_submission_builds_the_record() {
        let record = run_form("25\n1200\n3.0\n50000\n3\n").unwrap();
        assert_eq!(record.act_score, 25.0);
        assert_eq!(record.sat_score, 1200.0);
        assert_eq!(record.high_school_gpa, 3.0);
        assert_eq!(record.parental_income, 50000.0);
        assert_eq!(record.parent_education_level, 3.0);
    }

    #[test]
    fn blank_lines_keep_the_defaults() {
        let record = run_form("\n\n\n\n\n").unwrap();
        assert_eq!(record.act_score, 25.0);
        assert_eq!(record.sat_score, 1200.0);
        assert_eq!(record.high_school_gpa, 3.0);
        assert_eq!(record.parental_income, 50000.0);
        assert_eq!(record.parent_education_level, 3.0);
    }

    #[test]
    fn boundary_values_are_accepted() {
        let low = run_form("0\n0\n0.0\n0\n0\n").unwrap();
        assert_eq!(low.act_score, 0.0);
        assert_eq!(low.high_school_gpa, 0.0);

        let high = run_form("36\n1600\n4.0\n50000\n3\n").unwrap();
        assert_eq!(high.act_score, 36.0);
        assert_eq!(high.sat_score, 1600.0);
        assert_eq!(high.high_school_gpa, 4.0);
    }

    #[test]
    fn out_of_range_values_reprompt_until_valid() {
        // 37 and -1 are rejected at the input layer; 30 is accepted.
        let record = run_form("37\n-1\n30\n1200\n3.0\n50000\n3\n").unwrap();
        assert_eq!(record.act_score, 30.0);
        assert_eq!(record.sat_score, 1200.0);
    }

    #[test]
    fn non_numeric_entries_reprompt() {
        let record = run_form("abc\n25\n1200\n4.5\n3.0\n50000\n3\n").unwrap();
        assert_eq!(record.act_score, 25.0);
        // 4.5 exceeds the GPA bound and was re-prompted.
        assert_eq!(record.high_school_gpa, 3.0);
    }

    #[test]
    fn quit_and_eof_end_the_form() {
        assert!(run_form("q\n").is_none());
        assert!(run_form("25\n1200\nQ\n").is_none());
        assert!(run_form("25\n1200\n").is_none());
    }
}
