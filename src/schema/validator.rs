//! Onboarding schema validation
//!
//! Each field is checked independently, in declaration order. Within a field,
//! a type mismatch stops further checks; otherwise every failing constraint is
//! reported so the caller sees the full picture.

use super::{FieldError, ValidationErrors};
use super::types::{Field, FormData, Service};
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 80;
pub const COMPANY_MIN_LEN: usize = 2;
pub const COMPANY_MAX_LEN: usize = 100;
pub const BUDGET_MIN: u32 = 100;
pub const BUDGET_MAX: u32 = 1_000_000;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name pattern is valid"));

// Lookarounds are unsupported by the regex crate; the leading-dot and
// double-dot rules are checked separately in `is_valid_email`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Validate an untyped submission record.
///
/// `today` is the day the start date is compared against.
pub fn validate(raw: &Value, today: NaiveDate) -> Result<FormData, ValidationErrors> {
    let empty = Map::new();
    let record = raw.as_object().unwrap_or(&empty);
    let mut errors = Vec::new();

    let full_name = check_full_name(record.get(Field::FullName.key()), &mut errors);
    let email = check_email(record.get(Field::Email.key()), &mut errors);
    let company_name = check_company_name(record.get(Field::CompanyName.key()), &mut errors);
    let services = check_services(record.get(Field::Services.key()), &mut errors);
    let budget_usd = check_budget(record.get(Field::BudgetUsd.key()), &mut errors);
    let project_start_date =
        check_start_date(record.get(Field::ProjectStartDate.key()), today, &mut errors);
    let accept_terms = check_accept_terms(record.get(Field::AcceptTerms.key()), &mut errors);

    match (
        full_name,
        email,
        company_name,
        services,
        budget_usd,
        project_start_date,
        accept_terms,
    ) {
        (
            Some(full_name),
            Some(email),
            Some(company_name),
            Some(services),
            Some(budget_usd),
            Some(project_start_date),
            Some(accept_terms),
        ) if errors.is_empty() => Ok(FormData {
            full_name,
            email,
            company_name,
            services,
            budget_usd,
            project_start_date,
            accept_terms,
        }),
        _ => Err(ValidationErrors::new(errors)),
    }
}

/// Email format check shared with live field validation
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn require<'a>(
    field: Field,
    value: Option<&'a Value>,
    errors: &mut Vec<FieldError>,
) -> Option<&'a Value> {
    if value.is_none() {
        errors.push(FieldError::new(field, "Required"));
    }
    value
}

fn expect_str<'a>(
    field: Field,
    value: Option<&'a Value>,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match require(field, value, errors)? {
        Value::String(s) => Some(s),
        other => {
            errors.push(FieldError::new(
                field,
                format!("Expected string, received {}", kind_of(other)),
            ));
            None
        }
    }
}

/// Run `(passes, message)` rules in order, collecting each failure
fn apply_rules(field: Field, rules: &[(bool, &str)], errors: &mut Vec<FieldError>) -> bool {
    let before = errors.len();
    for (passes, message) in rules {
        if !passes {
            errors.push(FieldError::new(field, *message));
        }
    }
    errors.len() == before
}

fn check_full_name(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    let name = expect_str(Field::FullName, value, errors)?;
    let len = name.chars().count();
    let ok = apply_rules(
        Field::FullName,
        &[
            (len >= NAME_MIN_LEN, "Name must be at least 2 characters"),
            (len <= NAME_MAX_LEN, "Name must be less than 80 characters"),
            (
                NAME_PATTERN.is_match(name),
                "Only letters, spaces, hyphens, and apostrophes allowed",
            ),
        ],
        errors,
    );
    ok.then(|| name.to_string())
}

fn check_email(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    let email = expect_str(Field::Email, value, errors)?;
    let ok = apply_rules(
        Field::Email,
        &[(is_valid_email(email), "Please enter a valid email")],
        errors,
    );
    ok.then(|| email.to_string())
}

fn check_company_name(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    let company = expect_str(Field::CompanyName, value, errors)?;
    let len = company.chars().count();
    let ok = apply_rules(
        Field::CompanyName,
        &[
            (
                len >= COMPANY_MIN_LEN,
                "Company name must be at least 2 characters",
            ),
            (
                len <= COMPANY_MAX_LEN,
                "Company name must be less than 100 characters",
            ),
        ],
        errors,
    );
    ok.then(|| company.to_string())
}

fn invalid_service_message(received: &str) -> String {
    let expected = Service::ALL
        .iter()
        .map(|s| format!("'{}'", s.label()))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("Invalid enum value. Expected {expected}, received {received}")
}

fn check_services(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<Vec<Service>> {
    let items = match require(Field::Services, value, errors)? {
        Value::Array(items) => items,
        other => {
            errors.push(FieldError::new(
                Field::Services,
                format!("Expected array, received {}", kind_of(other)),
            ));
            return None;
        }
    };

    let before = errors.len();
    if items.is_empty() {
        errors.push(FieldError::new(
            Field::Services,
            "Please select at least one service",
        ));
    }

    let mut services = Vec::with_capacity(items.len());
    for item in items {
        let parsed = match item {
            Value::String(label) => Service::from_label(label)
                .ok_or_else(|| invalid_service_message(&format!("'{label}'"))),
            other => Err(invalid_service_message(kind_of(other))),
        };
        match parsed {
            Ok(service) if !services.contains(&service) => services.push(service),
            Ok(_) => {}
            Err(message) => errors.push(FieldError::new(Field::Services, message)),
        }
    }

    (errors.len() == before).then_some(services)
}

/// Outer `None` means invalid, inner `None` means no budget given
fn check_budget(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<Option<u32>> {
    let number = match value {
        None | Some(Value::Null) => return Some(None),
        // An empty input box is "no budget", not an error
        Some(Value::String(s)) if s.is_empty() => return Some(None),
        Some(Value::Number(n)) => n,
        Some(_) => {
            errors.push(FieldError::new(Field::BudgetUsd, "Budget must be a number"));
            return None;
        }
    };

    let amount = number.as_f64().unwrap_or(f64::NAN);
    let is_whole = number.is_i64() || number.is_u64() || amount.fract() == 0.0;
    let ok = apply_rules(
        Field::BudgetUsd,
        &[
            (is_whole, "Must be a whole number"),
            (amount >= f64::from(BUDGET_MIN), "Minimum budget is $100"),
            (amount <= f64::from(BUDGET_MAX), "Maximum budget is $1,000,000"),
        ],
        errors,
    );
    // Bounds are checked above, so the cast cannot truncate
    ok.then_some(Some(amount as u32))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|d| d.date_naive())
        })
}

fn check_start_date(
    value: Option<&Value>,
    today: NaiveDate,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    let raw = expect_str(Field::ProjectStartDate, value, errors)?;
    let Some(date) = parse_date(raw.trim()) else {
        errors.push(FieldError::new(
            Field::ProjectStartDate,
            "Please enter a valid date",
        ));
        return None;
    };
    let ok = apply_rules(
        Field::ProjectStartDate,
        &[(date >= today, "Start date must be today or in the future")],
        errors,
    );
    ok.then_some(date)
}

fn check_accept_terms(value: Option<&Value>, errors: &mut Vec<FieldError>) -> Option<bool> {
    match require(Field::AcceptTerms, value, errors)? {
        Value::Bool(accepted) => {
            let ok = apply_rules(
                Field::AcceptTerms,
                &[(*accepted, "You must accept the terms")],
                errors,
            );
            ok.then_some(true)
        }
        other => {
            errors.push(FieldError::new(
                Field::AcceptTerms,
                format!("Expected boolean, received {}", kind_of(other)),
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn iso(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    fn valid_data() -> Value {
        json!({
            "fullName": "Jane Smith",
            "email": "jane@example.com",
            "companyName": "Acme Corp",
            "services": ["UI/UX"],
            "budgetUsd": 1000,
            "projectStartDate": iso(today() + Duration::days(1)),
            "acceptTerms": true,
        })
    }

    fn with(key: &str, value: Value) -> Value {
        let mut data = valid_data();
        data[key] = value;
        data
    }

    fn without(key: &str) -> Value {
        let mut data = valid_data();
        data.as_object_mut().unwrap().remove(key);
        data
    }

    fn first_error(raw: &Value) -> String {
        let errors = validate(raw, today()).unwrap_err();
        let message = errors.iter().next().unwrap().message.clone();
        message
    }

    #[test]
    fn test_valid_data_is_normalized() {
        let data = validate(&valid_data(), today()).unwrap();
        assert_eq!(data.full_name, "Jane Smith");
        assert_eq!(data.email, "jane@example.com");
        assert_eq!(data.company_name, "Acme Corp");
        assert_eq!(data.services, vec![Service::UiUx]);
        assert_eq!(data.budget_usd, Some(1000));
        assert_eq!(data.project_start_date, today() + Duration::days(1));
        assert!(data.accept_terms);
    }

    #[test]
    fn test_non_object_reports_every_field_required() {
        let errors = validate(&json!("nope"), today()).unwrap_err();
        let required: Vec<_> = errors
            .iter()
            .filter(|e| e.message == "Required")
            .map(|e| e.field)
            .collect();
        // budgetUsd is optional
        assert_eq!(
            required,
            vec![
                Field::FullName,
                Field::Email,
                Field::CompanyName,
                Field::Services,
                Field::ProjectStartDate,
                Field::AcceptTerms
            ]
        );
    }

    #[test]
    fn test_errors_follow_field_order() {
        let mut data = valid_data();
        data["acceptTerms"] = json!(false);
        data["fullName"] = json!("J");
        data["services"] = json!([]);
        let errors = validate(&data, today()).unwrap_err();
        assert_eq!(
            errors.fields(),
            vec![Field::FullName, Field::Services, Field::AcceptTerms]
        );
    }

    mod full_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_name_reports_min_length_first() {
            let data = with("fullName", json!(""));
            assert!(first_error(&data).contains("at least 2 characters"));
            // The character check also fails on an empty string
            let errors = validate(&data, today()).unwrap_err();
            assert_eq!(errors.iter().filter(|e| e.field == Field::FullName).count(), 2);
        }

        #[test]
        fn test_invalid_characters() {
            let data = with("fullName", json!("John@Doe"));
            assert!(first_error(&data).contains("letters, spaces"));
        }

        #[test]
        fn test_digit_is_rejected() {
            assert!(validate(&with("fullName", json!("Agent 47")), today()).is_err());
        }

        #[test]
        fn test_hyphen_and_apostrophe_allowed() {
            let data = with("fullName", json!("Mary-Jane O'Neil"));
            assert!(validate(&data, today()).is_ok());
        }

        #[test]
        fn test_length_bounds_are_inclusive() {
            assert!(validate(&with("fullName", json!("Al")), today()).is_ok());
            assert!(validate(&with("fullName", json!("A".repeat(80))), today()).is_ok());
            assert!(validate(&with("fullName", json!("A")), today()).is_err());
            let errors = validate(&with("fullName", json!("A".repeat(81))), today()).unwrap_err();
            assert_eq!(
                errors.first_for(Field::FullName),
                Some("Name must be less than 80 characters")
            );
        }

        #[test]
        fn test_wrong_type() {
            let data = with("fullName", json!(42));
            assert_eq!(first_error(&data), "Expected string, received number");
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_format() {
            let data = with("email", json!("not-an-email"));
            assert!(first_error(&data).contains("valid email"));
        }

        #[test]
        fn test_format_rules() {
            for ok in ["a@b.co", "first.last+tag@sub.example.org", "o'neil@example.com"] {
                assert!(is_valid_email(ok), "{ok} should be valid");
            }
            for bad in [
                "",
                "@example.com",
                "jane@",
                "jane@example",
                ".jane@example.com",
                "ja..ne@example.com",
                "jane.@example.com",
                "jane@-example.com",
                "jane smith@example.com",
                "jane@example.c",
            ] {
                assert!(!is_valid_email(bad), "{bad} should be invalid");
            }
        }
    }

    mod company_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_length_bounds() {
            assert!(validate(&with("companyName", json!("AB")), today()).is_ok());
            assert!(validate(&with("companyName", json!("A".repeat(100))), today()).is_ok());
            assert!(validate(&with("companyName", json!("A")), today()).is_err());
            let errors =
                validate(&with("companyName", json!("A".repeat(101))), today()).unwrap_err();
            assert_eq!(
                errors.first_for(Field::CompanyName),
                Some("Company name must be less than 100 characters")
            );
        }
    }

    mod services {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_requires_at_least_one() {
            let data = with("services", json!([]));
            assert!(first_error(&data).contains("at least one service"));
        }

        #[test]
        fn test_rejects_unknown_service() {
            let data = with("services", json!(["Invalid"]));
            let message = first_error(&data);
            assert!(message.starts_with("Invalid enum value"));
            assert!(message.ends_with("received 'Invalid'"));
        }

        #[test]
        fn test_accepts_all_services_once() {
            let data = with(
                "services",
                json!(["Mobile App", "UI/UX", "Branding", "Web Dev", "UI/UX"]),
            );
            let parsed = validate(&data, today()).unwrap();
            assert_eq!(
                parsed.services,
                vec![
                    Service::MobileApp,
                    Service::UiUx,
                    Service::Branding,
                    Service::WebDev
                ]
            );
        }

        #[test]
        fn test_non_array() {
            let data = with("services", json!("UI/UX"));
            assert_eq!(first_error(&data), "Expected array, received string");
        }
    }

    mod budget {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_absent_budget_is_valid() {
            let parsed = validate(&without("budgetUsd"), today()).unwrap();
            assert_eq!(parsed.budget_usd, None);
        }

        #[test]
        fn test_empty_string_budget_is_absent_not_error() {
            let parsed = validate(&with("budgetUsd", json!("")), today()).unwrap();
            assert_eq!(parsed.budget_usd, None);
        }

        #[test]
        fn test_null_budget_is_absent() {
            let parsed = validate(&with("budgetUsd", Value::Null), today()).unwrap();
            assert_eq!(parsed.budget_usd, None);
        }

        #[test]
        fn test_bounds() {
            let check = |amount: Value| validate(&with("budgetUsd", amount), today());
            assert_eq!(
                check(json!(99)).unwrap_err().first_for(Field::BudgetUsd),
                Some("Minimum budget is $100")
            );
            assert_eq!(check(json!(100)).unwrap().budget_usd, Some(100));
            assert_eq!(check(json!(1_000_000)).unwrap().budget_usd, Some(1_000_000));
            assert_eq!(
                check(json!(1_000_001)).unwrap_err().first_for(Field::BudgetUsd),
                Some("Maximum budget is $1,000,000")
            );
            assert!(check(json!(-5)).is_err());
        }

        #[test]
        fn test_non_integer() {
            let errors = validate(&with("budgetUsd", json!(150.5)), today()).unwrap_err();
            assert_eq!(
                errors.first_for(Field::BudgetUsd),
                Some("Must be a whole number")
            );
            // A whole float is still a whole number
            let parsed = validate(&with("budgetUsd", json!(150.0)), today()).unwrap();
            assert_eq!(parsed.budget_usd, Some(150));
        }

        #[test]
        fn test_non_numeric_string() {
            let data = with("budgetUsd", json!("lots"));
            assert_eq!(first_error(&data), "Budget must be a number");
        }
    }

    mod start_date {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_relative_to_today() {
            let check = |date: NaiveDate| validate(&with("projectStartDate", json!(iso(date))), today());
            assert!(check(today() - Duration::days(1)).is_err());
            assert!(check(today()).is_ok());
            assert!(check(today() + Duration::days(1)).is_ok());
        }

        #[test]
        fn test_past_date_message() {
            let data = with("projectStartDate", json!("2020-01-01"));
            assert_eq!(
                first_error(&data),
                "Start date must be today or in the future"
            );
        }

        #[test]
        fn test_timestamp_compares_by_day() {
            let data = with("projectStartDate", json!("2026-10-14T00:00:01Z"));
            let parsed = validate(&data, today()).unwrap();
            assert_eq!(parsed.project_start_date, today());
        }

        #[test]
        fn test_unparseable_date() {
            for raw in ["", "tomorrow", "2026-13-01"] {
                let data = with("projectStartDate", json!(raw));
                assert_eq!(first_error(&data), "Please enter a valid date");
            }
        }
    }

    mod accept_terms {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_requires_acceptance() {
            let data = with("acceptTerms", json!(false));
            assert_eq!(first_error(&data), "You must accept the terms");
            assert!(validate(&with("acceptTerms", json!(true)), today()).is_ok());
        }

        #[test]
        fn test_wrong_type() {
            let data = with("acceptTerms", json!("yes"));
            assert_eq!(first_error(&data), "Expected boolean, received string");
        }
    }
}
