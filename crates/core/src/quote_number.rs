//! Human-readable quote number generation.
//!
//! Numbers look like `BIM-20260806-9FA3C1-4821`: prefix, compact UTC date,
//! the uppercased tail of a freshly minted unique id, and a 4-digit random
//! suffix. Generation never fails; if the fragment source yields nothing the
//! simpler `BIM-<unix millis>-<suffix>` form is used instead. Uniqueness is
//! probabilistic here and enforced definitively by the store's unique index.

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

pub const QUOTE_PREFIX: &str = "BIM";

const FRAGMENT_LEN: usize = 6;

pub fn generate() -> String {
    compose(Utc::now(), fresh_fragment(), random_suffix())
}

fn compose(now: DateTime<Utc>, fragment: Option<String>, suffix: u16) -> String {
    match fragment {
        Some(fragment) => {
            format!("{QUOTE_PREFIX}-{}-{fragment}-{suffix}", now.format("%Y%m%d"))
        }
        None => format!("{QUOTE_PREFIX}-{}-{suffix}", now.timestamp_millis()),
    }
}

fn fresh_fragment() -> Option<String> {
    let id = Uuid::new_v4().simple().to_string();
    let tail = id.get(id.len().checked_sub(FRAGMENT_LEN)?..)?;
    Some(tail.to_ascii_uppercase())
}

fn random_suffix() -> u16 {
    rand::thread_rng().gen_range(1000..=9999)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{compose, fresh_fragment, generate, random_suffix, QUOTE_PREFIX};

    #[test]
    fn composes_prefix_date_fragment_and_suffix() {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();

        let number = compose(now, Some("9FA3C1".to_string()), 4821);

        assert_eq!(number, "BIM-20260806-9FA3C1-4821");
    }

    #[test]
    fn falls_back_to_millis_form_without_a_fragment() {
        let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();

        let number = compose(now, None, 1234);

        assert_eq!(number, format!("BIM-{}-1234", now.timestamp_millis()));
    }

    #[test]
    fn generated_numbers_match_the_documented_shape() {
        let number = generate();
        let parts: Vec<&str> = number.split('-').collect();

        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], QUOTE_PREFIX);
        assert_eq!(parts[1].len(), 8);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2].chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert_eq!(parts[3].len(), 4);
        assert!(parts[3].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn fragment_is_six_uppercase_alphanumerics() {
        let fragment = fresh_fragment().expect("fragment");

        assert_eq!(fragment.len(), 6);
        assert!(fragment.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn suffix_stays_in_fixed_width_range() {
        for _ in 0..200 {
            let suffix = random_suffix();
            assert!((1000..=9999).contains(&suffix));
        }
    }

    #[test]
    fn successive_numbers_differ() {
        let first = generate();
        let second = generate();

        assert_ne!(first, second);
    }
}
