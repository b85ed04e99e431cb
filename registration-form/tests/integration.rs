//! Integration tests for registration-form

use registration_form::{
    Course, Dialog, Field, FormController, FormExit, FormSnapshot, Gender, Reaction,
    Registration, TestBackend, ValidationFailure, YearLevel, validate,
};

fn complete() -> FormSnapshot {
    FormSnapshot {
        name: "Pedro".to_string(),
        course: Some(Course::BscsSe),
        year_level: Some(YearLevel::First),
        gender: Some(Gender::Male),
        address: "x".to_string(),
        email: "a@b.com".to_string(),
        contact: "12345678901".to_string(),
    }
}

#[test]
fn test_blank_name_is_missing_fields() {
    let snapshot = FormSnapshot {
        name: String::new(),
        ..complete()
    };
    assert_eq!(validate(&snapshot), Err(ValidationFailure::MissingFields));
}

#[test]
fn test_malformed_email() {
    let snapshot = FormSnapshot {
        email: "not-an-email".to_string(),
        ..complete()
    };
    assert_eq!(validate(&snapshot), Err(ValidationFailure::InvalidEmail));
}

#[test]
fn test_short_contact() {
    let snapshot = FormSnapshot {
        contact: "123".to_string(),
        ..complete()
    };
    assert_eq!(validate(&snapshot), Err(ValidationFailure::InvalidContact));
}

#[test]
fn test_success_trims_text_fields() {
    let snapshot = FormSnapshot {
        name: " Juan ".to_string(),
        course: Some(Course::BsitAgd),
        year_level: Some(YearLevel::Second),
        gender: Some(Gender::Female),
        address: "Cebu".to_string(),
        email: "juan@test.com".to_string(),
        contact: "09171234567".to_string(),
    };

    assert_eq!(
        validate(&snapshot),
        Ok(Registration {
            name: "Juan".to_string(),
            course: Course::BsitAgd,
            year_level: YearLevel::Second,
            gender: Gender::Female,
            address: "Cebu".to_string(),
            email: "juan@test.com".to_string(),
            contact: "09171234567".to_string(),
        })
    );
}

#[test]
fn test_plus_and_hyphenated_domain_email() {
    let snapshot = FormSnapshot {
        email: "a.b+c@sub.domain-name.com".to_string(),
        ..complete()
    };
    assert!(validate(&snapshot).is_ok());
}

#[test]
fn test_validation_is_idempotent() {
    let snapshots = [
        complete(),
        FormSnapshot::default(),
        FormSnapshot {
            email: "nope".to_string(),
            ..complete()
        },
        FormSnapshot {
            contact: "1234567890".to_string(),
            ..complete()
        },
    ];
    for snapshot in &snapshots {
        assert_eq!(validate(snapshot), validate(snapshot));
    }
}

#[test]
fn test_every_course_and_year_level_is_accepted() {
    for course in [
        Course::BscsSe,
        Course::BsitAgd,
        Course::Bsce,
        Course::Bsme,
        Course::Bscpe,
    ] {
        for year_level in [
            YearLevel::First,
            YearLevel::Second,
            YearLevel::Third,
            YearLevel::Fourth,
        ] {
            let snapshot = FormSnapshot {
                course: Some(course),
                year_level: Some(year_level),
                ..complete()
            };
            assert!(validate(&snapshot).is_ok(), "{course} / {year_level}");
        }
    }
}

#[test]
fn test_session_register_keeps_fields() {
    let backend = TestBackend::new()
        .with_snapshot(&complete())
        .with_register()
        .with_exit();

    let exit = FormController::new().run(&backend).unwrap();

    assert_eq!(exit, FormExit::Exit);
    assert_eq!(
        backend.dialogs(),
        vec![Dialog::information("Success", "Registration Successful!")]
    );
    // Fields are not cleared after a successful registration.
    assert_eq!(backend.screen(), complete());
    assert_eq!(backend.reactions().last(), Some(&Reaction::Exit));
}

#[test]
fn test_session_clear_then_register() {
    let backend = TestBackend::new()
        .with_snapshot(&complete())
        .with_clear()
        .with_register();

    let exit = FormController::new().run(&backend).unwrap();

    // Script ran out without pressing Exit.
    assert_eq!(exit, FormExit::Closed);
    assert!(backend.screen().is_cleared());
    assert_eq!(
        backend.reactions(),
        vec![
            Reaction::Reset(FormSnapshot::default()),
            Reaction::ShowDialog(Dialog::error("All fields are required!")),
        ]
    );
}

#[test]
fn test_session_fix_errors_one_by_one() {
    let backend = TestBackend::new()
        .with_snapshot(&complete())
        .with_value(Field::Email, "pedro at mail")
        .with_value(Field::Contact, "0917")
        .with_register()
        .with_value(Field::Email, "pedro@mail.com")
        .with_register()
        .with_value(Field::Contact, " 09171234567 ")
        .with_register()
        .with_exit();

    let mut controller = FormController::new();
    controller.run(&backend).unwrap();

    let messages: Vec<String> = backend.dialogs().into_iter().map(|d| d.message).collect();
    assert_eq!(
        messages,
        [
            "Invalid email format!",
            "Contact number must be 11 digits!",
            "Registration Successful!",
        ]
    );
    assert_eq!(controller.submissions(), 3);
}

#[test]
fn test_exit_stops_the_script() {
    let backend = TestBackend::new()
        .with_exit()
        .with_register();

    let exit = FormController::new().run(&backend).unwrap();

    assert_eq!(exit, FormExit::Exit);
    assert_eq!(backend.reactions(), vec![Reaction::Exit]);
}

#[test]
fn test_unknown_choice_is_a_backend_error() {
    let backend = TestBackend::new().with_value(Field::Course, "BSN");
    let err = FormController::new().run(&backend).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Backend error: Invalid value 'BSN' for field 'Course'"
    );
}
