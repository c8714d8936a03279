// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CourseId, CourseReference, DomainError, PrerequisiteTerm, SemesterType};

#[test]
fn test_course_id_trims_whitespace() {
    let id: CourseId = CourseId::new("  CMP SCI 1250 ");
    assert_eq!(id.as_str(), "CMP SCI 1250");
}

#[test]
fn test_course_id_parse_rejects_blank() {
    let result: Result<CourseId, DomainError> = CourseId::parse("   ");
    assert!(matches!(result, Err(DomainError::InvalidCourseId(_))));
}

#[test]
fn test_semester_type_round_trips_through_str() {
    for semester_type in [SemesterType::Fall, SemesterType::Spring, SemesterType::Summer] {
        let parsed: SemesterType = semester_type.as_str().parse().unwrap();
        assert_eq!(parsed, semester_type);
    }
}

#[test]
fn test_semester_type_rejects_unknown_label() {
    let result: Result<SemesterType, DomainError> = "Winter".parse();
    assert_eq!(
        result,
        Err(DomainError::InvalidSemesterType(String::from("Winter")))
    );
}

#[test]
fn test_spring_is_followed_by_summer_only_when_included() {
    assert_eq!(SemesterType::Spring.next(true), SemesterType::Summer);
    assert_eq!(SemesterType::Spring.next(false), SemesterType::Fall);
    assert_eq!(SemesterType::Summer.next(true), SemesterType::Fall);
    assert_eq!(SemesterType::Fall.next(false), SemesterType::Spring);
}

#[test]
fn test_prerequisite_term_deserializes_string_as_single_course() {
    let term: PrerequisiteTerm = serde_json::from_str("\"CMP SCI 1250\"").unwrap();
    assert_eq!(term, PrerequisiteTerm::course("CMP SCI 1250"));
}

#[test]
fn test_prerequisite_term_deserializes_array_as_alternatives() {
    let term: PrerequisiteTerm =
        serde_json::from_str("[\"MATH 1030\", \"MATH 1100\"]").unwrap();
    assert_eq!(term, PrerequisiteTerm::any_of(&["MATH 1030", "MATH 1100"]));
    assert_eq!(term.to_string(), "MATH 1030 or MATH 1100");
}

#[test]
fn test_course_reference_validation_rejects_zero_credits() {
    let course: CourseReference = CourseReference::new("CMP SCI 1000", "Seminar", 0);
    assert!(matches!(
        course.validate(),
        Err(DomainError::InvalidCreditValue { credits: 0, .. })
    ));
}

#[test]
fn test_course_reference_validation_rejects_self_prerequisite() {
    let course: CourseReference = CourseReference::new("CMP SCI 2250", "Data Structures", 3)
        .with_prerequisites(vec![PrerequisiteTerm::course("CMP SCI 2250")]);
    assert_eq!(
        course.validate(),
        Err(DomainError::SelfPrerequisite(CourseId::new("CMP SCI 2250")))
    );
}

#[test]
fn test_course_reference_offering_and_concurrency() {
    let course: CourseReference = CourseReference::new("MATH 1800", "Calculus I", 5)
        .with_prerequisites(vec![PrerequisiteTerm::course("MATH 1100")])
        .with_concurrent("MATH 1100")
        .offered_in(&[SemesterType::Fall]);

    assert!(course.is_offered_in(SemesterType::Fall));
    assert!(!course.is_offered_in(SemesterType::Summer));
    assert!(course.allows_concurrent(&CourseId::new("MATH 1100")));
    assert!(!course.allows_concurrent(&CourseId::new("MATH 1030")));
}
