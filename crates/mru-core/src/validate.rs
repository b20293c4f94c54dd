//! Field validators.
//!
//! Every validator takes the draft slot it guards plus the raw input. On
//! success the normalized value is written into the slot and returned; on
//! failure the slot is left untouched and a field-specific
//! [`ValidationError`] is returned. Validators never perform I/O and are
//! idempotent for a given input.

use std::sync::LazyLock;

use regex::Regex;

use crate::entities::ProductImages;
use crate::enums::Field;
use crate::errors::ValidationError;

/// Institutional domain every account must belong to.
pub const EMAIL_DOMAIN: &str = "mtroyal.ca";

pub const MIN_PASSWORD_LEN: usize = 4;
pub const MAX_PASSWORD_LEN: usize = 128;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

static IMAGE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\w|\.|/[a-z_\-\s0-9.]+)+\.(png|jpe?g|gif|webp)$")
        .expect("image path pattern is valid")
});

static TEXT_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\w|\.|/[a-z_\-\s0-9.]+)+\.txt$").expect("text path pattern is valid")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([\w-]+(?:\.[\w-]+)*)@(mtroyal\.ca)$").expect("email pattern is valid")
});

static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username pattern is valid"));

static LETTERS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+$").expect("letters pattern is valid"));

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N} ]+$").expect("title pattern is valid"));

fn store<T: Clone>(slot: &mut Option<T>, value: T) -> T {
    *slot = Some(value.clone());
    value
}

// ---------------------------------------------------------------------------
// Text fields
// ---------------------------------------------------------------------------

/// Product title: non-empty after trim, letters, digits, and spaces only.
pub fn title(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            Field::Title,
            "Product title is not specified",
        ));
    }
    if !TITLE.is_match(trimmed) {
        return Err(ValidationError::new(
            Field::Title,
            "Product title cannot contain special characters",
        ));
    }
    Ok(store(slot, trimmed.to_string()))
}

/// Free-text description owned by `subject` (e.g. "Product", "Review").
pub fn description(
    slot: &mut Option<String>,
    raw: &str,
    subject: &str,
) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            Field::Description,
            format!("{subject} description is not specified"),
        ));
    }
    Ok(store(slot, trimmed.to_string()))
}

/// Chat message body. Stored as given; only blank input is rejected.
pub fn message_text(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::new(Field::Message, "Message cannot be empty"));
    }
    Ok(store(slot, raw.to_string()))
}

/// A backend subject id or other required identifier.
pub fn required_id(
    slot: &mut Option<String>,
    raw: &str,
    field: Field,
    message: &str,
) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, message));
    }
    Ok(store(slot, trimmed.to_string()))
}

// ---------------------------------------------------------------------------
// Numeric fields
// ---------------------------------------------------------------------------

/// Parse a finite number from trimmed form input.
fn parse_number(raw: &str, field: Field, label: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            field,
            format!("{label} is not specified"),
        ));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::new(field, format!("{label} cannot have letters")))
}

/// Product price from form input.
pub fn price(slot: &mut Option<f64>, raw: &str) -> Result<f64, ValidationError> {
    let value = parse_number(raw, Field::Price, "Product price")?;
    price_value(slot, value)
}

/// Product price already in numeric form.
pub fn price_value(slot: &mut Option<f64>, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(
            Field::Price,
            "Product price must be a number",
        ));
    }
    if value < 0.0 {
        return Err(ValidationError::new(
            Field::Price,
            "Product price cannot be negative",
        ));
    }
    Ok(store(slot, value))
}

/// Product stock count from form input.
pub fn stock(slot: &mut Option<i64>, raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            Field::Stock,
            "Product stock is not specified",
        ));
    }
    let value = trimmed.parse::<i64>().map_err(|_| {
        if trimmed.parse::<f64>().is_ok() {
            ValidationError::new(Field::Stock, "Product stock must be a whole number")
        } else {
            ValidationError::new(Field::Stock, "Product stock cannot have letters")
        }
    })?;
    stock_value(slot, value)
}

/// Product stock count already in numeric form.
pub fn stock_value(slot: &mut Option<i64>, value: i64) -> Result<i64, ValidationError> {
    if value < 0 {
        return Err(ValidationError::new(
            Field::Stock,
            "Product stock cannot be negative",
        ));
    }
    Ok(store(slot, value))
}

/// Review rating from form input. Bounds are inclusive.
pub fn rating(slot: &mut Option<f64>, raw: &str) -> Result<f64, ValidationError> {
    let value = parse_number(raw, Field::Rating, "Review rating")?;
    rating_value(slot, value)
}

/// Review rating already in numeric form.
pub fn rating_value(slot: &mut Option<f64>, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(
            Field::Rating,
            "Review rating must be a number",
        ));
    }
    if value < MIN_RATING {
        return Err(ValidationError::new(
            Field::Rating,
            "Review rating cannot be negative",
        ));
    }
    if value > MAX_RATING {
        return Err(ValidationError::new(
            Field::Rating,
            "Review rating exceeds max rating",
        ));
    }
    Ok(store(slot, value))
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// No `..` segment, so the key cannot climb out of its prefix.
fn stays_under_prefix(path: &str) -> bool {
    !path.split(['/', '\\']).any(|segment| segment == "..")
}

/// Whether `path` names an image object key (png, jpg, jpeg, gif, webp).
#[must_use]
pub fn is_image_path(path: &str) -> bool {
    stays_under_prefix(path) && IMAGE_PATH.is_match(path)
}

/// Whether `path` names a text object key (`.txt`).
#[must_use]
pub fn is_text_path(path: &str) -> bool {
    stays_under_prefix(path) && TEXT_PATH.is_match(path)
}

/// One or more product image paths. Rejects the whole set if any path fails.
pub fn images<S: AsRef<str>>(
    slot: &mut Option<ProductImages>,
    paths: &[S],
) -> Result<ProductImages, ValidationError> {
    if paths.is_empty() {
        return Err(ValidationError::new(
            Field::Image,
            "Product image path is not specified",
        ));
    }
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref().trim();
        if path.is_empty() {
            return Err(ValidationError::new(
                Field::Image,
                "Product image path is not specified",
            ));
        }
        if !is_image_path(path) {
            return Err(ValidationError::new(
                Field::Image,
                format!("Product image path is invalid: {path}"),
            ));
        }
        images.push(path.to_string());
    }
    Ok(store(slot, ProductImages { images }))
}

/// Report attachment path; only text files are accepted.
pub fn link(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            Field::Link,
            "User report link information is not specified",
        ));
    }
    if !is_text_path(trimmed) {
        return Err(ValidationError::new(
            Field::Link,
            "User report link information must be a .txt file",
        ));
    }
    Ok(store(slot, trimmed.to_string()))
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Whether `email` belongs to the institutional domain.
#[must_use]
pub fn is_institutional_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

pub fn email(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(Field::Email, "Email is empty"));
    }
    if !EMAIL.is_match(trimmed) {
        return Err(ValidationError::new(
            Field::Email,
            format!("Only @{EMAIL_DOMAIN} email addresses are allowed"),
        ));
    }
    Ok(store(slot, trimmed.to_string()))
}

/// Password length is counted in characters, not bytes.
pub fn password(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::new(
            Field::Password,
            "Password cannot be empty",
        ));
    }
    let length = raw.chars().count();
    if length < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(
            Field::Password,
            format!("Password must have {MIN_PASSWORD_LEN} characters or more"),
        ));
    }
    if length > MAX_PASSWORD_LEN {
        return Err(ValidationError::new(
            Field::Password,
            format!("Password must be no more than {MAX_PASSWORD_LEN} characters"),
        ));
    }
    Ok(store(slot, raw.to_string()))
}

/// Sign-in only checks presence; the backend judges the secret.
pub fn password_present(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::new(
            Field::Password,
            "Password cannot be empty",
        ));
    }
    Ok(store(slot, raw.to_string()))
}

pub fn username(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            Field::Username,
            "Username cannot be empty",
        ));
    }
    if !USERNAME.is_match(trimmed) {
        return Err(ValidationError::new(Field::Username, "Invalid username"));
    }
    Ok(store(slot, trimmed.to_string()))
}

pub fn first_name(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError> {
    name(slot, raw, Field::FirstName, "First name")
}

pub fn last_name(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError> {
    name(slot, raw, Field::LastName, "Last name")
}

fn name(
    slot: &mut Option<String>,
    raw: &str,
    field: Field,
    label: &str,
) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            field,
            format!("{label} cannot be empty"),
        ));
    }
    if !LETTERS_ONLY.is_match(trimmed) {
        return Err(ValidationError::new(
            field,
            format!("Invalid {}", label.to_lowercase()),
        ));
    }
    Ok(store(slot, trimmed.to_string()))
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Escape `LIKE` wildcards so user text only ever matches literally.
///
/// `\`, `%`, and `_` are each prefixed with a backslash.
#[must_use]
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Desk Lamp", "Desk Lamp")]
    #[case("  Calculus 2 textbook ", "Calculus 2 textbook")]
    fn title_accepts_letters_digits_spaces(#[case] raw: &str, #[case] expected: &str) {
        let mut slot = None;
        assert_eq!(title(&mut slot, raw).expect("valid"), expected);
        assert_eq!(slot.as_deref(), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("Lamp!")]
    #[case("<script>")]
    fn title_rejects_without_writing(#[case] raw: &str) {
        let mut slot = None;
        let error = title(&mut slot, raw).expect_err("invalid");
        assert_eq!(error.field, Field::Title);
        assert!(slot.is_none());
    }

    #[test]
    fn description_uses_subject_in_message() {
        let mut slot = None;
        let error = description(&mut slot, "  ", "Review").expect_err("empty");
        assert_eq!(error.message, "Review description is not specified");
        assert!(slot.is_none());
    }

    #[rstest]
    #[case("0", 0.0)]
    #[case("12.50", 12.5)]
    #[case(" 690 ", 690.0)]
    fn price_accepts_non_negative(#[case] raw: &str, #[case] expected: f64) {
        let mut slot = None;
        assert!((price(&mut slot, raw).expect("valid") - expected).abs() < f64::EPSILON);
        assert_eq!(slot, Some(expected));
    }

    #[rstest]
    #[case("", "Product price is not specified")]
    #[case("-5", "Product price cannot be negative")]
    #[case("ten", "Product price cannot have letters")]
    #[case("inf", "Product price cannot have letters")]
    fn price_rejects(#[case] raw: &str, #[case] message: &str) {
        let mut slot = None;
        let error = price(&mut slot, raw).expect_err("invalid");
        assert_eq!(error.message, message);
        assert_eq!(slot, None);
    }

    #[test]
    fn rejected_price_keeps_previous_value() {
        let mut slot = None;
        price(&mut slot, "20").expect("valid");
        price(&mut slot, "-1").expect_err("negative");
        assert_eq!(slot, Some(20.0));
    }

    #[test]
    fn numeric_validators_are_idempotent() {
        let mut price_slot = None;
        let mut stock_slot = None;
        let mut rating_slot = None;
        for _ in 0..2 {
            assert!(price(&mut price_slot, "9.99").is_ok());
            assert!(stock(&mut stock_slot, "3").is_ok());
            assert!(rating(&mut rating_slot, "4.5").is_ok());
        }
        assert_eq!(price_slot, Some(9.99));
        assert_eq!(stock_slot, Some(3));
        assert_eq!(rating_slot, Some(4.5));
    }

    #[rstest]
    #[case("", "Product stock is not specified")]
    #[case("-1", "Product stock cannot be negative")]
    #[case("2.5", "Product stock must be a whole number")]
    #[case("many", "Product stock cannot have letters")]
    fn stock_rejects(#[case] raw: &str, #[case] message: &str) {
        let mut slot = None;
        assert_eq!(stock(&mut slot, raw).expect_err("invalid").message, message);
        assert_eq!(slot, None);
    }

    #[rstest]
    #[case("0")]
    #[case("5")]
    #[case("2.5")]
    fn rating_accepts_inclusive_bounds(#[case] raw: &str) {
        let mut slot = None;
        assert!(rating(&mut slot, raw).is_ok());
        assert!(slot.is_some());
    }

    #[rstest]
    #[case("", "Review rating is not specified")]
    #[case("-0.01", "Review rating cannot be negative")]
    #[case("5.01", "Review rating exceeds max rating")]
    fn rating_rejects(#[case] raw: &str, #[case] message: &str) {
        let mut slot = None;
        assert_eq!(rating(&mut slot, raw).expect_err("invalid").message, message);
        assert_eq!(slot, None);
    }

    #[rstest]
    #[case("img1.jpg")]
    #[case("photo.PNG")]
    #[case("listing.jpeg")]
    #[case("seller/desk lamp.webp")]
    #[case("anim.gif")]
    fn image_paths_accepted(#[case] path: &str) {
        assert!(is_image_path(path), "{path} should be accepted");
    }

    #[rstest]
    #[case("imgx.txt")]
    #[case("archive.zip")]
    #[case("noextension")]
    #[case(".png.exe")]
    #[case("../other/x.png")]
    #[case("seller/../../x.jpg")]
    fn image_paths_rejected(#[case] path: &str) {
        assert!(!is_image_path(path), "{path} should be rejected");
    }

    #[test]
    fn images_reject_whole_set_on_one_bad_path() {
        let mut slot = None;
        let error = images(&mut slot, &["a.jpg", "b.txt"]).expect_err("mixed set");
        assert_eq!(error.field, Field::Image);
        assert!(slot.is_none());

        let stored = images(&mut slot, &["a.jpg", "b.png"]).expect("valid set");
        assert_eq!(stored.images, vec!["a.jpg", "b.png"]);
        assert_eq!(slot, Some(stored));
    }

    #[test]
    fn link_only_accepts_text_files() {
        let mut slot = None;
        assert!(link(&mut slot, "evidence.pdf").is_err());
        assert!(slot.is_none());
        assert_eq!(link(&mut slot, "evidence.txt").expect("txt"), "evidence.txt");
    }

    #[test]
    fn link_cannot_climb_out_of_its_prefix() {
        let mut slot = None;
        assert!(link(&mut slot, "../reports/evidence.txt").is_err());
        assert!(slot.is_none());
        assert!(is_text_path("reports/evidence.txt"));
    }

    #[rstest]
    #[case("student@mtroyal.ca")]
    #[case("  First.Last@MTROYAL.CA ")]
    #[case("a-b_c@mtroyal.ca")]
    fn email_accepts_institution(#[case] raw: &str) {
        let mut slot = None;
        let stored = email(&mut slot, raw).expect("valid");
        assert_eq!(stored, raw.trim());
    }

    #[rstest]
    #[case("", "Email is empty")]
    #[case("student@gmail.com", "Only @mtroyal.ca email addresses are allowed")]
    #[case("student@mtroyal.ca.evil.com", "Only @mtroyal.ca email addresses are allowed")]
    #[case("@mtroyal.ca", "Only @mtroyal.ca email addresses are allowed")]
    fn email_rejects(#[case] raw: &str, #[case] message: &str) {
        let mut slot = None;
        assert_eq!(email(&mut slot, raw).expect_err("invalid").message, message);
        assert!(slot.is_none());
    }

    #[test]
    fn password_bounds() {
        let mut slot = None;
        assert!(password(&mut slot, "").is_err());
        assert!(password(&mut slot, "abc").is_err());
        assert!(slot.is_none());
        assert!(password(&mut slot, "abcd").is_ok());
        assert!(password(&mut slot, &"x".repeat(128)).is_ok());
        assert!(password(&mut slot, &"x".repeat(129)).is_err());
        assert_eq!(slot.map(|p| p.len()), Some(128));
    }

    #[test]
    fn username_and_names() {
        let mut slot = None;
        assert!(username(&mut slot, "mru_student42").is_ok());
        assert!(username(&mut slot, "bad name").is_err());
        assert_eq!(slot.as_deref(), Some("mru_student42"));

        let mut first = None;
        assert!(first_name(&mut first, "Ramos").is_ok());
        assert_eq!(
            first_name(&mut first, "R4mos").expect_err("digits").message,
            "Invalid first name"
        );
        let mut last = None;
        assert_eq!(
            last_name(&mut last, " ").expect_err("blank").message,
            "Last name cannot be empty"
        );
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("100%", r"100\%")]
    #[case("snake_case", r"snake\_case")]
    #[case(r"back\slash", r"back\\slash")]
    #[case(r"%_\", r"\%\_\\")]
    fn escape_like_neutralizes_wildcards(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape_like(raw), expected);
    }
}
