/// Health-inspection letter grade and its fixed numeric score.
///
/// | Grade | Score |
/// |-------|-------|
/// | A     | 1.00  |
/// | B     | 0.90  |
/// | C     | 0.80  |
/// | D     | 0.70  |
/// | F     | 0.60  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Parses a grade cell. Only the exact letters of the scale are accepted;
    /// blanks, pending marks and lowercase letters yield `None`.
    pub fn parse(cell: &str) -> Option<Self> {
        match cell {
            "A" => Some(LetterGrade::A),
            "B" => Some(LetterGrade::B),
            "C" => Some(LetterGrade::C),
            "D" => Some(LetterGrade::D),
            "F" => Some(LetterGrade::F),
            _ => None,
        }
    }

    pub const fn score(self) -> f64 {
        match self {
            LetterGrade::A => 1.00,
            LetterGrade::B => 0.90,
            LetterGrade::C => 0.80,
            LetterGrade::D => 0.70,
            LetterGrade::F => 0.60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_scores() {
        assert_eq!(LetterGrade::A.score(), 1.00);
        assert_eq!(LetterGrade::B.score(), 0.90);
        assert_eq!(LetterGrade::C.score(), 0.80);
        assert_eq!(LetterGrade::D.score(), 0.70);
        assert_eq!(LetterGrade::F.score(), 0.60);
    }

    #[test]
    fn test_parse_valid_letters() {
        assert_eq!(LetterGrade::parse("A"), Some(LetterGrade::A));
        assert_eq!(LetterGrade::parse("F"), Some(LetterGrade::F));
    }

    #[test]
    fn test_parse_rejects_outside_scale() {
        assert_eq!(LetterGrade::parse("E"), None);
        assert_eq!(LetterGrade::parse("Z"), None);
        assert_eq!(LetterGrade::parse("P"), None);
        assert_eq!(LetterGrade::parse("a"), None);
        assert_eq!(LetterGrade::parse(""), None);
        assert_eq!(LetterGrade::parse("GRADE"), None);
        assert_eq!(LetterGrade::parse(" A"), None);
    }
}
