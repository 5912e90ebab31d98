//! Section validators
//!
//! One validator per top-level section of the resume document. Each
//! receives the root object and appends violations in field order.

use serde_json::Value;

use crate::error::FieldError;
use crate::fields::Object;
use crate::formats::Format;
use crate::path::FieldPath;
use crate::Validator;

/// Runs `check` against the root object, ignoring non-object roots
///
/// The engine reports a non-object root once, before any section runs.
fn with_root<F>(doc: &Value, check: F) -> Vec<FieldError>
where
    F: FnOnce(&Object<'_>, &mut Vec<FieldError>),
{
    let mut errors = Vec::new();
    if doc.is_object() {
        if let Some(root) = Object::expect(doc, FieldPath::root(), &mut errors) {
            check(&root, &mut errors);
        }
    }
    errors
}

/// `name` and `title`
pub struct IdentityValidator;

impl Validator for IdentityValidator {
    fn code(&self) -> &'static str {
        "RES1"
    }

    fn name(&self) -> &'static str {
        "identity"
    }

    fn validate(&self, doc: &Value) -> Vec<FieldError> {
        with_root(doc, |root, errors| {
            root.string("name", errors);
            root.string("title", errors);
        })
    }
}

/// `contact`: email plus website, LinkedIn and GitHub URLs
pub struct ContactValidator;

impl Validator for ContactValidator {
    fn code(&self) -> &'static str {
        "RES2"
    }

    fn name(&self) -> &'static str {
        "contact"
    }

    fn validate(&self, doc: &Value) -> Vec<FieldError> {
        with_root(doc, |root, errors| {
            if let Some(contact) = root.object("contact", errors) {
                contact.formatted("email", Format::Email, errors);
                contact.formatted("website", Format::Url, errors);
                contact.formatted("linkedin", Format::Url, errors);
                contact.formatted("github", Format::Url, errors);
            }
        })
    }
}

/// `about`: summary and photo
///
/// The photo is a path or asset identifier, so only its type is checked.
pub struct AboutValidator;

impl Validator for AboutValidator {
    fn code(&self) -> &'static str {
        "RES3"
    }

    fn name(&self) -> &'static str {
        "about"
    }

    fn validate(&self, doc: &Value) -> Vec<FieldError> {
        with_root(doc, |root, errors| {
            if let Some(about) = root.object("about", errors) {
                about.string("summary", errors);
                about.string("photo", errors);
            }
        })
    }
}

/// Optional `pdf`: file name of the published PDF
///
/// The name is joined to the public directory, so it must be a single path
/// component.
pub struct PublicationValidator;

impl Validator for PublicationValidator {
    fn code(&self) -> &'static str {
        "RES4"
    }

    fn name(&self) -> &'static str {
        "publication"
    }

    fn validate(&self, doc: &Value) -> Vec<FieldError> {
        with_root(doc, |root, errors| {
            if let Some(name) = root.optional_string("pdf", errors) {
                let format = if name.is_empty() {
                    Format::NonEmpty
                } else {
                    Format::FileName
                };
                if !format.accepts(name) {
                    errors.push(FieldError::new(&root.path_of("pdf"), format.message()));
                }
            }
        })
    }
}

/// `projects[]`
pub struct ProjectsValidator;

impl Validator for ProjectsValidator {
    fn code(&self) -> &'static str {
        "RES5"
    }

    fn name(&self) -> &'static str {
        "projects"
    }

    fn validate(&self, doc: &Value) -> Vec<FieldError> {
        with_root(doc, |root, errors| {
            root.array("projects", errors, |item, path, errors| {
                let Some(project) = Object::expect(item, path, errors) else {
                    return;
                };
                project.string("name", errors);
                project.string("description", errors);
                project.string_array("technologies", errors);
                project.formatted("url", Format::Url, errors);
            });
        })
    }
}

/// `experience[]`
pub struct ExperienceValidator;

impl Validator for ExperienceValidator {
    fn code(&self) -> &'static str {
        "RES6"
    }

    fn name(&self) -> &'static str {
        "experience"
    }

    fn validate(&self, doc: &Value) -> Vec<FieldError> {
        with_root(doc, |root, errors| {
            root.array("experience", errors, |item, path, errors| {
                let Some(entry) = Object::expect(item, path, errors) else {
                    return;
                };
                entry.string("company", errors);
                entry.string("position", errors);
                entry.string("responsibilities", errors);
                entry.formatted("website", Format::Url, errors);
                entry.formatted("startDate", Format::Date, errors);
                entry.formatted("endDate", Format::EndDate, errors);
            });
        })
    }
}

/// `education[]`
pub struct EducationValidator;

impl Validator for EducationValidator {
    fn code(&self) -> &'static str {
        "RES7"
    }

    fn name(&self) -> &'static str {
        "education"
    }

    fn validate(&self, doc: &Value) -> Vec<FieldError> {
        with_root(doc, |root, errors| {
            root.array("education", errors, |item, path, errors| {
                let Some(entry) = Object::expect(item, path, errors) else {
                    return;
                };
                entry.string("institution", errors);
                entry.string("degree", errors);
                entry.string("description", errors);
                entry.formatted("startDate", Format::Date, errors);
                entry.formatted("endDate", Format::Date, errors);
            });
        })
    }
}

/// `afterHours`, `skills[]` and `footerNote`
pub struct NarrativeValidator;

impl Validator for NarrativeValidator {
    fn code(&self) -> &'static str {
        "RES8"
    }

    fn name(&self) -> &'static str {
        "narrative"
    }

    fn validate(&self, doc: &Value) -> Vec<FieldError> {
        with_root(doc, |root, errors| {
            root.string("afterHours", errors);
            root.string_array("skills", errors);
            root.string("footerNote", errors);
        })
    }
}

/// Rejects the nested `header` layout of older documents
///
/// Older documents kept `name`, `title` and `contact` under a `header`
/// object. That layout is not accepted; the fields live at the top level.
pub struct ObsoleteShapeValidator;

impl Validator for ObsoleteShapeValidator {
    fn code(&self) -> &'static str {
        "RES9"
    }

    fn name(&self) -> &'static str {
        "obsolete-shape"
    }

    fn validate(&self, doc: &Value) -> Vec<FieldError> {
        with_root(doc, |root, errors| {
            if root.has("header") {
                errors.push(FieldError::new(
                    &root.path_of("header"),
                    "Obsolete nested \"header\" object; move its fields to the top level",
                ));
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_identity_reports_both_fields_in_order() {
        let errors = IdentityValidator.validate(&json!({}));
        assert_eq!(paths(&errors), vec!["name", "title"]);
        assert!(errors.iter().all(|e| e.message == "Required"));
    }

    #[test]
    fn test_contact_wrong_type_short_circuits_subtree() {
        let errors = ContactValidator.validate(&json!({ "contact": "jane@example.com" }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "contact");
        assert_eq!(errors[0].message, "Expected object, received string");
    }

    #[test]
    fn test_contact_collects_every_field() {
        let errors = ContactValidator.validate(&json!({
            "contact": {
                "email": "jane",
                "website": "jane.dev",
                "linkedin": "https://linkedin.com/in/jane"
            }
        }));
        assert_eq!(
            paths(&errors),
            vec!["contact.email", "contact.website", "contact.github"]
        );
    }

    #[test]
    fn test_about_photo_not_checked_as_url() {
        let errors = AboutValidator.validate(&json!({
            "about": { "summary": "Hi", "photo": "images/me.jpg" }
        }));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_publication_optional() {
        assert!(PublicationValidator.validate(&json!({})).is_empty());
        let errors = PublicationValidator.validate(&json!({ "pdf": "" }));
        assert_eq!(paths(&errors), vec!["pdf"]);
        assert_eq!(errors[0].message, "Must not be empty");
    }

    #[test]
    fn test_publication_rejects_paths() {
        for name in ["/etc/cron.d/x.pdf", "../resume.pdf", "cv/resume.pdf", ".."] {
            let errors = PublicationValidator.validate(&json!({ "pdf": name }));
            assert_eq!(paths(&errors), vec!["pdf"], "{}", name);
            assert_eq!(errors[0].message, "Must be a file name");
        }
        assert!(PublicationValidator
            .validate(&json!({ "pdf": "jane-doe.pdf" }))
            .is_empty());
    }

    #[test]
    fn test_projects_element_not_object() {
        let errors = ProjectsValidator.validate(&json!({ "projects": [42] }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "projects[0]");
        assert_eq!(errors[0].message, "Expected object, received number");
    }

    #[test]
    fn test_experience_end_date_present() {
        let errors = ExperienceValidator.validate(&json!({
            "experience": [{
                "company": "Acme",
                "position": "Engineer",
                "responsibilities": "Things",
                "website": "https://acme.example",
                "startDate": "2020-01-01",
                "endDate": "Present"
            }]
        }));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_experience_bad_dates() {
        let errors = ExperienceValidator.validate(&json!({
            "experience": [
                {
                    "company": "Acme",
                    "position": "Engineer",
                    "responsibilities": "Things",
                    "website": "https://acme.example",
                    "startDate": "2020-01-01",
                    "endDate": "2021-06-30"
                },
                {
                    "company": "Initech",
                    "position": "Engineer",
                    "responsibilities": "TPS reports",
                    "website": "https://initech.example",
                    "startDate": "Jan 2021",
                    "endDate": "ongoing"
                }
            ]
        }));
        assert_eq!(
            paths(&errors),
            vec!["experience[1].startDate", "experience[1].endDate"]
        );
        assert_eq!(
            errors[1].message,
            "Invalid date, expected YYYY-MM-DD or \"Present\""
        );
    }

    #[test]
    fn test_education_rejects_present() {
        let errors = EducationValidator.validate(&json!({
            "education": [{
                "institution": "MIT",
                "degree": "BSc",
                "description": "CS",
                "startDate": "2010-09-01",
                "endDate": "Present"
            }]
        }));
        assert_eq!(paths(&errors), vec!["education[0].endDate"]);
    }

    #[test]
    fn test_narrative_order() {
        let errors = NarrativeValidator.validate(&json!({ "skills": [1] }));
        assert_eq!(paths(&errors), vec!["afterHours", "skills[0]", "footerNote"]);
    }

    #[test]
    fn test_obsolete_header() {
        let errors = ObsoleteShapeValidator.validate(&json!({ "header": { "name": "Jane" } }));
        assert_eq!(paths(&errors), vec!["header"]);
        assert!(ObsoleteShapeValidator.validate(&json!({})).is_empty());
    }

    #[test]
    fn test_non_object_root_left_to_engine() {
        assert!(IdentityValidator.validate(&json!([])).is_empty());
    }
}
