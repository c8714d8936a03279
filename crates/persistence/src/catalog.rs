// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog snapshot codec.
//!
//! A catalog document is an ordered JSON array of `[courseId, record]`
//! pairs. Records use the keys of the registrar export the planner was
//! built around: `course_name`, `course_description`, `credit`,
//! `prerequisite`, `concurrent`, `semesters_offered` and `elective`.

use crate::error::PersistenceError;
use course_plan_domain::{
    Catalog, CourseId, CourseReference, PrerequisiteTerm, SemesterType,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

/// Credit values appear both as numbers and as numeric strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum CreditValue {
    Number(u8),
    Text(String),
}

/// A single term name or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum OfferedSemesters {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CatalogRecord {
    #[serde(default)]
    course_name: String,
    #[serde(default)]
    course_description: String,
    credit: CreditValue,
    #[serde(default)]
    prerequisite: Vec<PrerequisiteTerm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    concurrent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    semesters_offered: Option<OfferedSemesters>,
    #[serde(default)]
    elective: bool,
}

impl CatalogRecord {
    fn into_reference(self, id: &str) -> Result<CourseReference, PersistenceError> {
        let credits: u8 = match self.credit {
            CreditValue::Number(credits) => credits,
            CreditValue::Text(text) => {
                text.trim()
                    .parse()
                    .map_err(|_| PersistenceError::InvalidRecord {
                        course: id.to_string(),
                        message: format!("credit '{text}' is not a whole number"),
                    })?
            }
        };

        let mut reference: CourseReference = CourseReference::new(id, &self.course_name, credits)
            .with_description(&self.course_description)
            .with_prerequisites(self.prerequisite);

        if let Some(concurrent) = self.concurrent.filter(|c| !c.trim().is_empty()) {
            reference = reference.with_concurrent(&concurrent);
        }

        if let Some(offered) = self.semesters_offered {
            let names: Vec<String> = match offered {
                OfferedSemesters::One(name) => vec![name],
                OfferedSemesters::Many(names) => names,
            };
            reference.semesters_offered = names
                .iter()
                .map(|name| name.trim().parse())
                .collect::<Result<BTreeSet<SemesterType>, _>>()?;
        }

        if self.elective {
            reference = reference.elective();
        }

        Ok(reference)
    }

    fn from_reference(reference: &CourseReference) -> Self {
        Self {
            course_name: reference.name.clone(),
            course_description: reference.description.clone(),
            credit: CreditValue::Number(reference.credits),
            prerequisite: reference.prerequisites.clone(),
            concurrent: reference.concurrent.as_ref().map(|c| c.as_str().to_string()),
            semesters_offered: Some(OfferedSemesters::Many(
                reference
                    .semesters_offered
                    .iter()
                    .map(|semester| semester.as_str().to_string())
                    .collect(),
            )),
            elective: reference.is_elective,
        }
    }
}

/// Parses a catalog document.
///
/// A record without `semesters_offered` is offered in every term.
///
/// # Errors
///
/// Returns an error if:
/// - The document is not an array of `[id, record]` pairs
/// - A credit value is not a whole number
/// - A term name is not Fall, Spring or Summer
/// - The resulting catalog fails validation (duplicate ids, zero credits)
pub fn parse_catalog(json: &str) -> Result<Catalog, PersistenceError> {
    let records: Vec<(String, CatalogRecord)> = serde_json::from_str(json)?;

    let entries: Vec<CourseReference> = records
        .into_iter()
        .map(|(id, record)| record.into_reference(&id))
        .collect::<Result<_, _>>()?;
    let catalog: Catalog = Catalog::new(entries)?;

    info!(courses = catalog.len(), "Loaded catalog");
    Ok(catalog)
}

/// Renders a catalog as a document `parse_catalog` accepts.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_catalog(catalog: &Catalog) -> Result<String, PersistenceError> {
    let records: Vec<(&CourseId, CatalogRecord)> = catalog
        .iter()
        .map(|reference| (&reference.id, CatalogRecord::from_reference(reference)))
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
