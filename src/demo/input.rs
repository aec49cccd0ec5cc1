/*!
 * Students Demo Input
 *
 * Four integers read in order: student count, thread count, course
 * threshold, debt threshold. Values may share a line or span several.
 */

use crate::core::errors::InputError;
use crate::filter::Thresholds;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

const FIELDS: [(&str, &str); 4] = [
    ("students", "Enter amount of students: "),
    ("threads", "Enter amount of threads: "),
    ("course", "Enter course: "),
    ("debts", "Enter amount of debts: "),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterInput {
    pub students: usize,
    /// Kept signed so a bad count is reported by the filter's
    /// precondition check rather than as a parse error
    pub threads: i64,
    pub course: i64,
    pub debt: i64,
}

impl FilterInput {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.course, self.debt)
    }
}

/// Prompt on `prompts` and read the four values from `reader`
pub fn read_filter_input<R, W>(mut reader: R, mut prompts: W) -> Result<FilterInput, InputError>
where
    R: BufRead,
    W: Write,
{
    let mut tokens = VecDeque::new();
    let mut values = [0i64; 4];

    for (slot, (field, prompt)) in values.iter_mut().zip(FIELDS) {
        write!(prompts, "{prompt}")?;
        prompts.flush()?;
        *slot = next_value(&mut reader, &mut tokens, field)?;
    }

    let [students, threads, course, debt] = values;
    let students = usize::try_from(students).map_err(|_| InputError::NegativeCount {
        field: "students",
        value: students,
    })?;

    Ok(FilterInput {
        students,
        threads,
        course,
        debt,
    })
}

fn next_value<R: BufRead>(
    reader: &mut R,
    tokens: &mut VecDeque<String>,
    field: &'static str,
) -> Result<i64, InputError> {
    loop {
        if let Some(token) = tokens.pop_front() {
            return token
                .parse()
                .map_err(|_| InputError::InvalidNumber { field, value: token });
        }

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(InputError::MissingValue { field });
        }
        tokens.extend(line.split_whitespace().map(str::to_owned));
    }
}
