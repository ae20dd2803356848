use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_string, to_value};
use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_ser_tokens, assert_tokens, Token};
use vdrive_core::models::{
    driver_tier::DriverTier,
    pricing_rule::{Location, PricingRuleForm},
    time_slot::{Day, TimeSlotEntry, UserTimeSlots},
};

#[test]
fn test_driver_tier_tokens() {
    assert_tokens(
        &DriverTier::NormalDriver,
        &[Token::UnitVariant {
            name: "DriverTier",
            variant: "normal-driver",
        }],
    );
    assert_tokens(
        &DriverTier::PremiumDriver,
        &[Token::UnitVariant {
            name: "DriverTier",
            variant: "premium-driver",
        }],
    );
    assert_tokens(
        &DriverTier::EliteDriver,
        &[Token::UnitVariant {
            name: "DriverTier",
            variant: "elite-driver",
        }],
    );
}

#[test]
fn test_day_serializes_lowercase() {
    assert_ser_tokens(
        &Day::Wednesday,
        &[Token::UnitVariant {
            name: "Day",
            variant: "wednesday",
        }],
    );
}

#[rstest]
#[case("monday", Day::Monday)]
#[case("Monday", Day::Monday)]
#[case("SATURDAY", Day::Saturday)]
#[case(" sunday ", Day::Sunday)]
fn test_day_deserializes_any_case(#[case] raw: &'static str, #[case] expected: Day) {
    assert_de_tokens(&expected, &[Token::Str(raw)]);
}

#[test]
fn test_day_rejects_unknown() {
    assert_de_tokens_error::<Day>(&[Token::Str("funday")], "unknown day 'funday'");
}

#[rstest]
#[case("normal-driver", DriverTier::NormalDriver)]
#[case("Premium-Driver", DriverTier::PremiumDriver)]
#[case("elite-driver", DriverTier::EliteDriver)]
fn test_driver_tier_from_str(#[case] raw: &str, #[case] expected: DriverTier) {
    assert_eq!(raw.parse::<DriverTier>(), Ok(expected));
}

#[test]
fn test_driver_tier_from_str_unknown() {
    assert!("vip-driver".parse::<DriverTier>().is_err());
}

#[test]
fn test_display_matches_wire_names() {
    assert_eq!(DriverTier::EliteDriver.to_string(), "elite-driver");
    assert_eq!(Day::Thursday.to_string(), "thursday");
}

#[test]
fn test_user_time_slots_keyed_by_tier() {
    let slots = UserTimeSlots::new().add_slot(DriverTier::PremiumDriver);

    let value = to_value(&slots).expect("Failed to serialize time slots");
    assert_eq!(
        value,
        json!({
            "normal-driver": [],
            "premium-driver": [
                {
                    "id": 1,
                    "day": "monday",
                    "time_range": { "start": "09:00:00", "end": "17:00:00" },
                    "price": 150.0
                }
            ],
            "elite-driver": []
        })
    );
}

#[test]
fn test_time_slot_entry_without_range() {
    let entry: TimeSlotEntry = from_str(r#"{"id": 4, "day": "Friday", "price": 80}"#)
        .expect("Failed to deserialize time slot entry");

    assert_eq!(entry.id, 4);
    assert_eq!(entry.day, Day::Friday);
    assert_eq!(entry.time_range, None);
    assert_eq!(entry.price, 80.0);
}

#[test]
fn test_form_serialization() {
    let form = PricingRuleForm {
        id: Some(9),
        location: Some(Location {
            district_id: 2,
            city_id: 1,
        }),
        global_price: 120.0,
        is_hotspot: true,
        hotspot_id: Some(5),
        multiplier: Some(2.0),
        time_slots: UserTimeSlots::new()
            .add_slot(DriverTier::NormalDriver)
            .add_slot(DriverTier::EliteDriver),
    };

    let json = to_string(&form).expect("Failed to serialize form");
    let deserialized: PricingRuleForm = from_str(&json).expect("Failed to deserialize form");

    assert_eq!(deserialized, form);
}

#[test]
fn test_form_defaults_for_new_rule() {
    let form: PricingRuleForm = from_str("{}").expect("Failed to deserialize form");

    assert_eq!(form, PricingRuleForm::default());
    assert!(form.time_slots.is_empty());
    assert_eq!(form.location, None);
}
