use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::types::{Semester, Subject};

static EMBEDDED: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(include_str!("../data/form_data.json")).unwrap_or_else(|err| {
        log::error!("embedded catalog: {err}");
        Catalog::default()
    })
});

/// Static semester/subject table. Order is the order of the source document.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub semesters: Vec<Semester>,
    pub subjects: Vec<Subject>,
}

impl Catalog {
    pub fn embedded() -> &'static Catalog {
        &EMBEDDED
    }

    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for subject in &self.subjects {
            for semester in &subject.semesters {
                if self.semester(semester).is_none() {
                    return Err(CatalogError::UnknownSemester {
                        subject: subject.id.clone(),
                        semester: semester.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn semester(&self, id: &str) -> Option<&Semester> {
        self.semesters.iter().find(|row| row.id == id)
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|row| row.id == id)
    }

    /// Subjects offered in `semester`; all subjects when none is chosen.
    pub fn subjects_for(&self, semester: Option<&str>) -> Vec<&Subject> {
        match semester.filter(|id| !id.is_empty()) {
            Some(id) => self.subjects.iter().filter(|row| row.offered_in(id)).collect(),
            None => self.subjects.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn sample() -> Catalog {
        Catalog::from_json(r#"{
            "semesters": [{"id": "s1", "name": "One"}, {"id": "s2", "name": "Two"}, {"id": "s3", "name": "Three"}],
            "subjects": [
                {"id": "a", "name": "A", "semesters": ["s1"]},
                {"id": "b", "name": "B", "semesters": ["s1", "s2"]},
                {"id": "c", "name": "C", "semesters": ["s2"]},
                {"id": "d", "name": "D", "semesters": ["s1"]}
            ]
        }"#).unwrap()
    }

    fn ids(subjects: Vec<&Subject>) -> Vec<&str> {
        subjects.into_iter().map(|row| row.id.as_str()).collect()
    }

    #[rstest]
    #[case(Some("s1"), vec!["a", "b", "d"])]
    #[case(Some("s2"), vec!["b", "c"])]
    #[case(Some("s3"), vec![])]
    #[case(Some("nope"), vec![])]
    #[case(Some(""), vec!["a", "b", "c", "d"])]
    #[case(None, vec!["a", "b", "c", "d"])]
    fn filters_in_catalog_order(#[case] semester: Option<&str>, #[case] expected: Vec<&str>) {
        let catalog = sample();
        assert_eq!(ids(catalog.subjects_for(semester)), expected);
    }

    #[test]
    fn every_semester_filters_exactly_its_subjects() {
        let catalog = Catalog::embedded();
        assert!(!catalog.semesters.is_empty());
        for semester in &catalog.semesters {
            let found = catalog.subjects_for(Some(semester.id.as_str()));
            let expected: Vec<&Subject> = catalog.subjects.iter()
                .filter(|row| row.semesters.contains(&semester.id))
                .collect();
            assert_eq!(found, expected, "semester {}", semester.id);
        }
    }

    #[test]
    fn rejects_dangling_semester() {
        let err = Catalog::from_json(r#"{
            "semesters": [{"id": "s1", "name": "One"}],
            "subjects": [{"id": "a", "name": "A", "semesters": ["s9"]}]
        }"#).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSemester { .. }));
    }

    #[test]
    fn lookups_by_id() {
        let catalog = sample();
        assert_eq!(catalog.semester("s2").map(|row| row.name.as_str()), Some("Two"));
        assert_eq!(catalog.subject("c").map(|row| row.name.as_str()), Some("C"));
        assert!(catalog.subject("z").is_none());
    }
}
