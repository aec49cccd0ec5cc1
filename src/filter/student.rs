/*!
 * Student Records
 */

/// One roster entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    pub name: String,
    /// Course of study, starting at 1
    pub course: u32,
    /// Number of outstanding debts
    pub debt: u32,
}

impl Student {
    pub fn new(name: impl Into<String>, course: u32, debt: u32) -> Self {
        Self {
            name: name.into(),
            course,
            debt,
        }
    }
}

/// Expulsion thresholds
///
/// Signed so any integer typed at the prompt is a valid threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Thresholds {
    pub course: i64,
    pub debt: i64,
}

impl Thresholds {
    pub const fn new(course: i64, debt: i64) -> Self {
        Self { course, debt }
    }

    /// Strictly above both thresholds
    #[inline]
    pub fn admits(&self, student: &Student) -> bool {
        i64::from(student.debt) > self.debt && i64::from(student.course) > self.course
    }
}
