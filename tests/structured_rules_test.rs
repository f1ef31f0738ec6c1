//! Integration tests for the structured-pattern stage
//!
//! Exercises the built-in rule catalogue end to end against realistic
//! requisite strings: catalogue ordering, digit boundaries, and idempotence.

use docveil::redaction::structured::StructuredRedactor;
use test_case::test_case;

fn redactor() -> StructuredRedactor {
    StructuredRedactor::new().expect("built-in catalogue must compile")
}

#[test_case("7707083893", "[TAX_ID]" ; "tax id 10 digits")]
#[test_case("773456789012", "[TAX_ID]" ; "tax id 12 digits")]
#[test_case("1027700132195", "[REG_NUMBER]" ; "registration number 13 digits")]
#[test_case("304500116000157", "[REG_NUMBER_SOLE_PROPRIETOR]" ; "sole proprietor 15 digits")]
#[test_case("044525225", "[BANK_ROUTING]" ; "bank routing 04 prefix")]
#[test_case("772801001", "[TAX_REG_CODE]" ; "tax reg code 9 digits")]
#[test_case("30101810400000000225", "[CORR_ACCOUNT]" ; "correspondent account 301 prefix")]
#[test_case("40702810900000005555", "[ACCOUNT]" ; "settlement account 20 digits")]
#[test_case("89161234567", "[PHONE]" ; "phone with trunk prefix")]
#[test_case("+7 (495) 123-45-67", "[PHONE]" ; "phone formatted")]
#[test_case("ivanov@example.ru", "[EMAIL]" ; "email")]
#[test_case("45 12 345678", "[PASSPORT]" ; "passport series and number")]
#[test_case("123-456-789 01", "[INSURANCE_NUMBER]" ; "insurance number")]
fn catalogue_maps_value_to_placeholder(input: &str, expected: &str) {
    assert_eq!(redactor().redact(input).unwrap(), expected);
}

/// The prefix-specific rules run before the generic-length rules with the
/// same digit count, so both stay reachable.
#[test]
fn test_prefix_rules_win_over_generic_length() {
    let redactor = redactor();

    // 9 digits with the routing prefix vs. 9 digits without it
    assert_eq!(
        redactor.redact("БИК 044525225, КПП 772801001").unwrap(),
        "БИК [BANK_ROUTING], КПП [TAX_REG_CODE]"
    );

    // 20 digits with the correspondent prefix vs. 20 digits without it
    assert_eq!(
        redactor
            .redact("к/с 30101810400000000225, р/с 40702810900000005555")
            .unwrap(),
        "к/с [CORR_ACCOUNT], р/с [ACCOUNT]"
    );
}

/// Fixed-length numeric rules never fire inside a longer digit run.
#[test]
fn test_digit_boundaries_respected() {
    let redactor = redactor();

    // 13 digits is a registration number, not a 12- or 10-digit tax ID plus
    // leftover digits
    assert_eq!(redactor.redact("1027700132195").unwrap(), "[REG_NUMBER]");

    // 10 digits glued to letters still matches; glued to digits it does not
    assert_eq!(redactor.redact("ИНН7707083893.").unwrap(), "ИНН[TAX_ID].");
}

#[test]
fn test_rules_apply_across_whole_unit() {
    let input = "Исполнитель: ИНН 7707083893, ОГРН 1027700132195, \
                 р/с 40702810900000005555 в банке, БИК 044525225, \
                 тел. +7 (495) 123-45-67, email: buhgalter@firma.ru";
    let expected = "Исполнитель: ИНН [TAX_ID], ОГРН [REG_NUMBER], \
                 р/с [ACCOUNT] в банке, БИК [BANK_ROUTING], \
                 тел. [PHONE], email: [EMAIL]";

    assert_eq!(redactor().redact(input).unwrap(), expected);
}

/// A second pass over already-redacted text changes nothing: placeholders
/// contain no digits and no `@`.
#[test_case("ИНН 7707083893, тел. 89161234567")]
#[test_case("паспорт 45 12 345678, СНИЛС 123-456-789 01")]
#[test_case("к/с 30101810400000000225, ivanov@example.ru")]
fn structured_stage_is_idempotent(input: &str) {
    let redactor = redactor();
    let once = redactor.redact(input).unwrap();
    let twice = redactor.redact(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_detections_carry_original_values() {
    let (out, detections) = redactor()
        .redact_with_detections("ИНН 7707083893, email ivanov@example.ru")
        .unwrap();

    assert_eq!(out, "ИНН [TAX_ID], email [EMAIL]");
    assert_eq!(detections.len(), 2);
    assert_eq!(detections[0].original_value, "7707083893");
    assert_eq!(detections[1].original_value, "ivanov@example.ru");
}

#[test]
fn test_text_without_pii_is_untouched() {
    let input = "Стороны пришли к соглашению о нижеследующем.";
    assert_eq!(redactor().redact(input).unwrap(), input);
}
