// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{MoveCourseRequest, ReviewPlanResponse};
use course_plan::{MarkerDirective, RuleKind};
use course_plan_domain::CourseId;
use serde_json::Value;

#[test]
fn test_move_request_reads_presentation_keys() {
    let json: &str = r#"{
        "courseId": "CMP SCI 2250",
        "creditValue": 3,
        "displayName": "Programming and Data Structures",
        "sourceSemesterIndex": 1,
        "targetSemesterIndex": 2
    }"#;

    let request: MoveCourseRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.course_id, "CMP SCI 2250");
    assert_eq!(request.credit_value, 3);
    assert_eq!(request.source_semester_index, 1);
    assert_eq!(request.target_semester_index, 2);
}

#[test]
fn test_marker_directives_serialize_flat() {
    let response: ReviewPlanResponse = ReviewPlanResponse {
        directives: vec![
            MarkerDirective::warn(
                CourseId::new("X"),
                RuleKind::Prerequisite,
                String::from("missing A"),
            ),
            MarkerDirective::clear(CourseId::new("X"), RuleKind::Offering),
        ],
        warning_count: 1,
        total_credits: 3,
    };

    let value: Value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["warningCount"], 1);
    assert_eq!(value["totalCredits"], 3);
    assert_eq!(value["directives"][0]["course"], "X");
    assert_eq!(value["directives"][0]["rule"], "prerequisite");
    assert_eq!(value["directives"][0]["marker"], "warn");
    assert_eq!(value["directives"][0]["reason"], "missing A");
    assert_eq!(value["directives"][1]["marker"], "clear");
}
