use regform_core::{FormState, INTENSIVE_CODE_CAMP, PROFESSIONAL_TRAINING_PROGRAM, Step};
use regform_validate::{ErrorKind, StepValidator};
use serde_json::{Value, json};

fn validator() -> StepValidator {
    StepValidator::new(2024).expect("validator builds")
}

fn form(program: &str, extra: Value) -> FormState {
    let mut raw = json!({
        "faculty": "Engineering",
        "university": "Cairo University",
        "trackName": "Open Source Applications",
        "branch": "Smart Village",
        "program": program,
        "itiGraduationYear": 2019,
        "intake": 39,
        "round": "2"
    });
    if let (Some(map), Some(extra)) = (raw.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            if value.is_null() {
                map.remove(key);
            } else {
                map.insert(key.clone(), value.clone());
            }
        }
    }
    FormState::from_value(raw).expect("fixture is an object")
}

fn messages(validator: &StepValidator, form: &FormState, field: &str) -> Vec<String> {
    validator
        .validate(Step::Enrollment, form)
        .errors(field)
        .iter()
        .map(|error| error.message.clone())
        .collect()
}

#[test]
fn complete_enrollment_passes() {
    let validator = validator();
    for program in [PROFESSIONAL_TRAINING_PROGRAM, INTENSIVE_CODE_CAMP] {
        let result = validator.validate(Step::Enrollment, &form(program, json!({})));
        assert!(result.is_ok(), "{program}: {:?}", result.surfaced());
    }
}

#[test]
fn round_is_required_only_for_the_code_camp() {
    let validator = validator();

    let empty_round = form(INTENSIVE_CODE_CAMP, json!({"round": ""}));
    assert_eq!(
        messages(&validator, &empty_round, "round"),
        vec!["Round is required for 4 Months program.".to_string()]
    );

    let absent_round = form(INTENSIVE_CODE_CAMP, json!({"round": null}));
    let result = validator.validate(Step::Enrollment, &absent_round);
    assert_eq!(
        result.first_error("round").map(|error| error.kind),
        Some(ErrorKind::ConditionalRequired)
    );

    let with_round = form(INTENSIVE_CODE_CAMP, json!({"round": "3"}));
    assert!(messages(&validator, &with_round, "round").is_empty());

    let nine_months = form(PROFESSIONAL_TRAINING_PROGRAM, json!({"round": null}));
    assert!(messages(&validator, &nine_months, "round").is_empty());

    let no_program = form("", json!({"program": null, "round": null}));
    assert!(messages(&validator, &no_program, "round").is_empty());
}

#[test]
fn missing_intake_fails_for_the_training_program() {
    let validator = validator();
    let state = form(PROFESSIONAL_TRAINING_PROGRAM, json!({"intake": null, "round": null}));
    let result = validator.validate(Step::Enrollment, &state);

    assert_eq!(
        result
            .errors("intake")
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>(),
        vec!["Intake is required.", "Invalid intake for the selected program."]
    );
    assert!(result.is_field_valid("round"));
}

#[test]
fn program_check_runs_alongside_membership() {
    let validator = validator();

    let zero = form(PROFESSIONAL_TRAINING_PROGRAM, json!({"intake": 0}));
    assert_eq!(
        messages(&validator, &zero, "intake"),
        vec![
            "Invalid intake value.".to_string(),
            "Invalid intake for the selected program.".to_string()
        ]
    );

    let zero_camp = form(INTENSIVE_CODE_CAMP, json!({"intake": 0}));
    assert_eq!(
        messages(&validator, &zero_camp, "intake"),
        vec!["Invalid intake value.".to_string()]
    );

    let future = form(INTENSIVE_CODE_CAMP, json!({"intake": 45}));
    assert_eq!(
        messages(&validator, &future, "intake"),
        vec!["Invalid intake value.".to_string()]
    );
}

#[test]
fn every_generated_intake_is_accepted() {
    let validator = validator();
    for option in validator.intake_options() {
        let state = form(PROFESSIONAL_TRAINING_PROGRAM, json!({"intake": option.value}));
        assert!(
            messages(&validator, &state, "intake").is_empty(),
            "intake {} rejected",
            option.value
        );
    }
}

#[test]
fn graduation_year_is_bounded_by_the_validator_year() {
    let validator = validator();

    let too_early = form(INTENSIVE_CODE_CAMP, json!({"itiGraduationYear": 1993}));
    assert_eq!(
        messages(&validator, &too_early, "itiGraduationYear"),
        vec!["Graduation year must be after 1993.".to_string()]
    );

    let first = form(INTENSIVE_CODE_CAMP, json!({"itiGraduationYear": "1994"}));
    assert!(messages(&validator, &first, "itiGraduationYear").is_empty());

    let this_year = form(INTENSIVE_CODE_CAMP, json!({"itiGraduationYear": 2024}));
    assert!(messages(&validator, &this_year, "itiGraduationYear").is_empty());

    let next_year = form(INTENSIVE_CODE_CAMP, json!({"itiGraduationYear": 2025}));
    assert_eq!(
        messages(&validator, &next_year, "itiGraduationYear"),
        vec!["Graduation year must be less than or equal to 2024.".to_string()]
    );

    let later = StepValidator::new(2030).expect("validator builds");
    assert!(messages(&later, &next_year, "itiGraduationYear").is_empty());

    let unreadable = form(INTENSIVE_CODE_CAMP, json!({"itiGraduationYear": "20x9"}));
    assert_eq!(
        messages(&validator, &unreadable, "itiGraduationYear"),
        vec!["ITI Graduation Year is required.".to_string()]
    );
}

#[test]
fn program_must_be_one_of_the_two_tracks() {
    let validator = validator();

    let unknown = form("Summer Internship", json!({}));
    let result = validator.validate(Step::Enrollment, &unknown);
    assert_eq!(
        result.first_error("program").map(|error| (error.kind, error.message.as_str())),
        Some((
            ErrorKind::NotInEnumeratedSet,
            "Please select one of the two provided programs"
        ))
    );
    assert!(result.is_field_valid("round"));

    let missing = form("", json!({"program": null}));
    assert_eq!(
        messages(&validator, &missing, "program"),
        vec!["Program is required.".to_string()]
    );
}

#[test]
fn faculty_and_university_need_english_words() {
    let validator = validator();
    let state = form(
        INTENSIVE_CODE_CAMP,
        json!({"faculty": "كلية الهندسة", "university": "", "trackName": "", "branch": null}),
    );
    let result = validator.validate(Step::Enrollment, &state);

    assert_eq!(
        result.first_error("faculty").map(|error| error.message.as_str()),
        Some("Faculty must be in English and cannot contain special characters.")
    );
    assert_eq!(
        result.first_error("university").map(|error| error.message.as_str()),
        Some("University is required.")
    );
    assert_eq!(
        result.first_error("trackName").map(|error| error.message.as_str()),
        Some("Track name is required.")
    );
    assert_eq!(
        result.first_error("branch").map(|error| error.message.as_str()),
        Some("Branch is required.")
    );
}
