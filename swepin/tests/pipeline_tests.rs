use chrono::NaiveDate;
use swepin::{Error, Gender, PersonalIdentityNumber, PinFormat, Separator};

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn parse(input: &str) -> Result<PersonalIdentityNumber, Error> {
    PersonalIdentityNumber::parse_at(input, reference())
}

#[test]
fn test_ordinary_number_in_every_layout() {
    for input in ["198012241231", "19801224-1231", "801224-1231", "8012241231"] {
        let pin = parse(input).unwrap_or_else(|e| panic!("{} should parse: {}", input, e));
        assert_eq!(pin.birth_date(), NaiveDate::from_ymd_opt(1980, 12, 24).unwrap());
        assert_eq!(pin.gender_digit(), 3);
        assert_eq!(pin.gender(), Gender::Male);
        assert_eq!(pin.check_digit(), 1);
        assert_eq!(pin.separator(), Separator::Dash);
    }
}

#[test]
fn test_all_layouts_render() {
    let pin = parse("801224-1231").unwrap();
    assert_eq!(pin.format(PinFormat::LongWithoutSeparator), "198012241231");
    assert_eq!(pin.format(PinFormat::LongWithSeparator), "19801224-1231");
    assert_eq!(pin.format(PinFormat::ShortWithSeparator), "801224-1231");
    assert_eq!(pin.format(PinFormat::ShortWithoutSeparator), "8012241231");
    assert_eq!(pin.to_string(), "801224-1231");
}

#[test]
fn test_wrong_check_digit() {
    assert!(matches!(parse("198012241235"), Err(Error::Checksum { .. })));
}

#[test]
fn test_coordination_number_reports_calendar_date() {
    let pin = parse("19801284-1238").unwrap();
    assert!(pin.is_coordination_number());
    assert_eq!(pin.birth_date(), NaiveDate::from_ymd_opt(1980, 12, 24).unwrap());
    assert_eq!(pin.format(PinFormat::ShortWithSeparator), "801284-1238");
}

#[test]
fn test_centenarian_short_form() {
    let pin = parse("121212+1212").unwrap();
    assert_eq!(pin.full_year(), 1912);
    assert!(pin.age() >= 100);
    assert_eq!(pin.format(PinFormat::LongWithSeparator), "19121212+1212");
}

#[test]
fn test_invalid_month_and_dead_zone_day() {
    assert!(matches!(parse("198013241234"), Err(Error::InvalidDate { .. })));
    assert!(matches!(parse("19801232-1234"), Err(Error::InvalidDate { .. })));
    assert!(matches!(parse("19801260-1234"), Err(Error::InvalidDate { .. })));
    assert!(matches!(parse("19801292-1234"), Err(Error::InvalidDate { .. })));
    assert!(matches!(parse("19801200-1234"), Err(Error::InvalidDate { .. })));
}

#[test]
fn test_leap_day_coordination_numbers() {
    let leap = format!("19800289-123{}", swepin::calculate_check_digit("800289123").unwrap());
    assert_eq!(
        parse(&leap).unwrap().birth_date(),
        NaiveDate::from_ymd_opt(1980, 2, 29).unwrap()
    );
    let common = format!("19810289-123{}", swepin::calculate_check_digit("810289123").unwrap());
    assert!(matches!(parse(&common), Err(Error::InvalidDate { .. })));
}

#[test]
fn test_format_errors() {
    for input in [
        "",
        "1980-12-24-1231",
        "19801-224-1231",
        "801224_1231",
        "801224-12310",
        "80122-1231",
        " 801224-1231",
    ] {
        assert!(
            matches!(parse(input), Err(Error::Format { .. })),
            "{:?} should be a format error",
            input
        );
    }
}

#[test]
fn test_century_inference_near_the_boundary() {
    // 240602 is tomorrow in 2024, so `-` means 1924 and `+` is impossible.
    let dash = format!("240602-000{}", swepin::calculate_check_digit("240602000").unwrap());
    let plus = dash.replace('-', "+");
    assert_eq!(parse(&dash).unwrap().full_year(), 1924);
    assert!(matches!(parse(&plus), Err(Error::CenturyAmbiguity { .. })));

    // 240601 is today: `-` is a newborn, `+` turned 100 today.
    let dash = format!("240601-000{}", swepin::calculate_check_digit("240601000").unwrap());
    let plus = dash.replace('-', "+");
    assert_eq!(parse(&dash).unwrap().full_year(), 2024);
    assert_eq!(parse(&plus).unwrap().full_year(), 1924);
}

#[test]
fn test_short_form_without_separator_defaults_to_dash() {
    let pin = parse("1212121212").unwrap();
    assert_eq!(pin.full_year(), 2012);
    assert_eq!(pin.separator(), Separator::Dash);
}

#[test]
fn test_strict_parsing() {
    let options = swepin::ParseOptions::new()
        .with_reference_date(Some(reference()))
        .with_strict(true);
    let pin = PersonalIdentityNumber::parse_with("19121212-1212", &options).unwrap();
    // The written dash is accepted, the derived separator still reflects the age.
    assert_eq!(pin.separator(), Separator::Plus);
    assert!(PersonalIdentityNumber::parse_with("19121212+1212", &options).is_err());
}

#[test]
fn test_parse_is_deterministic_for_fixed_reference() {
    let first = parse("550303-0008").unwrap().full_year();
    for _ in 0..5 {
        assert_eq!(parse("550303-0008").unwrap().full_year(), first);
    }
    assert_eq!(first, 1955);
}
