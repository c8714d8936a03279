// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use course_plan::CoreError;
use course_plan_domain::DomainError;
use course_plan_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidCourseId(detail) => ApiError::InvalidInput {
            field: String::from("course_id"),
            message: detail,
        },
        DomainError::InvalidCreditValue { .. } => ApiError::InvalidInput {
            field: String::from("credit"),
            message,
        },
        DomainError::InvalidSemesterType(_) | DomainError::InvalidRotation { .. } => {
            ApiError::InvalidInput {
                field: String::from("semester_type"),
                message,
            }
        }
        DomainError::CourseNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Course"),
            message,
        },
        DomainError::SemesterNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Semester"),
            message,
        },
        DomainError::CourseNotInSemester { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Placement"),
            message,
        },
        DomainError::DuplicateCourse(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_catalog_course"),
            message,
        },
        DomainError::SelfPrerequisite(_) => ApiError::DomainRuleViolation {
            rule: String::from("acyclic_prerequisite"),
            message,
        },
        DomainError::NonContiguousSemesterIndex { .. } => ApiError::DomainRuleViolation {
            rule: String::from("contiguous_semesters"),
            message,
        },
        DomainError::CreditTotalMismatch { .. } => ApiError::DomainRuleViolation {
            rule: String::from("credit_total_consistency"),
            message,
        },
        DomainError::DuplicatePlacement { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_placement"),
            message,
        },
        DomainError::CourseAlreadyCompleted { .. } => ApiError::DomainRuleViolation {
            rule: String::from("completed_not_placed"),
            message,
        },
        DomainError::CreditValueMismatch { .. } => ApiError::DomainRuleViolation {
            rule: String::from("credit_value_consistency"),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::CourseNotPlaced(course) => ApiError::ResourceNotFound {
            resource_type: String::from("Placement"),
            message: format!("Course '{course}' is not placed in the plan"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Structural problems in stored data keep their domain meaning; I/O and
/// encoding failures are internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::Domain(domain_err) => translate_domain_error(domain_err),
        PersistenceError::Core(core_err) => translate_core_error(core_err),
        PersistenceError::NotFound(path) => ApiError::ResourceNotFound {
            resource_type: String::from("Schedule"),
            message: format!("No schedule stored at {}", path.display()),
        },
        PersistenceError::InvalidRecord { course, message } => ApiError::InvalidInput {
            field: String::from("catalog"),
            message: format!("Record for '{course}': {message}"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
