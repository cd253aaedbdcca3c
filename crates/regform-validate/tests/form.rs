use regform_core::{Error, FormState, Step};
use regform_validate::{StepValidator, result_json_schema};
use serde_json::json;

fn complete_form() -> FormState {
    FormState::from_value(json!({
        "fullName": "Omar Hassan",
        "personalPhoto": {"name": "omar.png"},
        "email": "omar@example.org",
        "mobile": "01512345678",
        "cityOfBirth": "Giza",
        "faculty": "Computers and Information",
        "university": "Helwan University",
        "trackName": "Professional Development and BI",
        "branch": "Alexandria",
        "program": "Professional Training Program - (9 Months)",
        "itiGraduationYear": 2015,
        "intake": 35,
        "preferredTeachingBranches": ["Alexandria"],
        "preferredCoursesToTeach": "",
        "interestedInTeaching": "Courses",
        "isEmployed": true,
        "fullJobTitle": "Data Engineer",
        "companyName": "Nile Data",
        "yearsOfExperience": 8,
        "hasFreelanceExperience": false
    }))
    .expect("fixture is an object")
}

#[test]
fn complete_form_passes_every_step() {
    let validator = StepValidator::new(2024).expect("validator builds");
    let report = validator.validate_all(&complete_form());
    assert!(report.is_ok(), "unexpected failures: {report:?}");
    assert_eq!(report.steps.len(), 4);
    assert_eq!(report.first_failing_step(), None);
}

#[test]
fn steps_are_validated_in_isolation() {
    let validator = StepValidator::new(2024).expect("validator builds");
    let mut form = complete_form();
    form.insert("mobile", "12345");
    form.insert("yearsOfExperience", 70);

    let report = validator.validate_all(&form);
    assert_eq!(report.first_failing_step(), Some(Step::Identity));
    assert!(report.step(Step::Enrollment).is_some_and(|result| result.is_ok()));
    assert!(report.step(Step::Teaching).is_some_and(|result| result.is_ok()));
    assert_eq!(
        report
            .step(Step::Employment)
            .map(|result| result.failing_fields().collect::<Vec<_>>()),
        Some(vec!["yearsOfExperience"])
    );

    let only_teaching = FormState::new()
        .with("preferredTeachingBranches", json!(["Assiut"]))
        .with("interestedInTeaching", "Both");
    assert!(validator.validate(Step::Teaching, &only_teaching).is_ok());
}

#[test]
fn step_numbers_outside_the_form_are_errors() {
    let validator = StepValidator::new(2024).expect("validator builds");
    let form = complete_form();

    let result = validator
        .validate_step_number(3, &form)
        .expect("step 3 exists");
    assert_eq!(result.step, Step::Teaching);
    assert!(matches!(
        validator.validate_step_number(5, &form),
        Err(Error::UnknownStep(5))
    ));
}

#[test]
fn results_serialize_for_the_form_renderer() {
    let validator = StepValidator::new(2024).expect("validator builds");
    let form = FormState::new().with("program", "Intensive Code Camp - (4 Months)");
    let result = validator.validate(Step::Enrollment, &form);
    let json = serde_json::to_value(&result).expect("serialize result");

    assert_eq!(json["step"], "enrollment");
    assert_eq!(json["fields"][7]["field"], "round");
    assert_eq!(json["fields"][7]["errors"][0]["kind"], "conditional_required");
    assert_eq!(
        json["fields"][7]["errors"][0]["message"],
        "Round is required for 4 Months program."
    );
}

#[test]
fn result_schema_describes_fields_and_kinds() {
    let schema = serde_json::to_value(result_json_schema()).expect("serialize schema");
    assert_eq!(schema["title"], "ValidationResult");
    assert!(schema["properties"]["fields"].is_object());
    assert!(schema["properties"]["step"].is_object());

    let kinds = schema["definitions"]["ErrorKind"].to_string();
    for kind in ["pattern_mismatch", "required", "conditional_required"] {
        assert!(kinds.contains(kind), "missing {kind}");
    }
}
