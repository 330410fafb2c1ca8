/* src/content/rust/src/slug.rs */

use std::sync::LazyLock;

use regex::Regex;

// Word characters are ASCII-only so non-Latin titles strip to their Latin parts.
// U+FEFF counts as whitespace alongside Unicode White_Space.
static NON_SLUG: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s\x{FEFF}-]").expect("valid slug regex"));
static WHITESPACE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("valid whitespace regex"));

fn is_space(c: char) -> bool {
  c.is_whitespace() || c == '\u{FEFF}'
}
static HYPHENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid hyphen regex"));

/// Derive a URL-safe identifier from a human-readable title.
///
/// Lowercase, trim, drop everything but word characters, whitespace and
/// hyphens, turn whitespace runs into a hyphen, collapse hyphen runs, then
/// strip a leading and trailing hyphen. Total and idempotent.
pub fn slugify(title: &str) -> String {
  let lowered = title.to_lowercase();
  let stripped = NON_SLUG.replace_all(lowered.trim_matches(is_space), "");
  let hyphenated = WHITESPACE.replace_all(&stripped, "-");
  let collapsed = HYPHENS.replace_all(&hyphenated, "-");
  let out = collapsed.strip_prefix('-').unwrap_or(&collapsed);
  out.strip_suffix('-').unwrap_or(out).to_string()
}

/// Authored slugs must already be in the form `slugify` produces.
pub fn is_valid_slug(value: &str) -> bool {
  !value.is_empty()
    && !value.starts_with('-')
    && !value.ends_with('-')
    && !value.contains("--")
    && value.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn service_titles() {
    assert_eq!(slugify("Residential Flooring"), "residential-flooring");
    assert_eq!(slugify("Retail Applications"), "retail-applications");
    assert_eq!(slugify("Corporate Applications"), "corporate-applications");
    assert_eq!(slugify("Infrastructure Projects"), "infrastructure-projects");
  }

  #[test]
  fn strips_punctuation() {
    assert_eq!(slugify("Restaurants & Cafes"), "restaurants-cafes");
    assert_eq!(slugify("Epoxy vs. Traditional: A Comparison!"), "epoxy-vs-traditional-a-comparison");
    assert_eq!(slugify("Bridges & Overpasses"), "bridges-overpasses");
  }

  #[test]
  fn trims_and_collapses() {
    assert_eq!(slugify("   Home   Repairs  "), "home-repairs");
    assert_eq!(slugify("--Home -- Repairs--"), "home-repairs");
    assert_eq!(slugify("a\t\nb"), "a-b");
  }

  #[test]
  fn byte_order_mark_is_whitespace() {
    assert_eq!(slugify("a\u{FEFF}b"), "a-b");
    assert_eq!(slugify("\u{FEFF}Kitchen Floors\u{FEFF}"), "kitchen-floors");
  }

  #[test]
  fn keeps_underscores_and_digits() {
    assert_eq!(slugify("Phase_2 Floor 10"), "phase_2-floor-10");
  }

  #[test]
  fn arabic_titles_strip_to_empty() {
    assert_eq!(slugify("أرضيات سكنية"), "");
    assert_eq!(slugify("مشاريع 2024"), "2024");
  }

  #[test]
  fn empty_input() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("   "), "");
    assert_eq!(slugify("!!!"), "");
  }

  #[test]
  fn deterministic_and_idempotent() {
    let inputs = [
      "Residential Flooring",
      "  Mixed   CASE -- title!! ",
      "Epoxy vs Traditional Flooring: A Comprehensive Comparison",
      "already-a-slug",
      "تطبيقات Retail",
      "-",
      "",
    ];
    for input in inputs {
      let once = slugify(input);
      assert_eq!(once, slugify(input));
      assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
    }
  }

  #[test]
  fn output_charset() {
    let inputs = ["Héllo Wörld", "A/B\\C", "Tab\there", "emoji 🚀 floor", "  -x-  "];
    for input in inputs {
      let slug = slugify(input);
      assert!(
        slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'),
        "bad char in {slug:?}"
      );
      assert!(!slug.starts_with('-') && !slug.ends_with('-'), "edge hyphen in {slug:?}");
    }
  }

  #[test]
  fn valid_slug_predicate() {
    assert!(is_valid_slug("ultimate-guide-epoxy-flooring"));
    assert!(is_valid_slug("phase_2"));
    assert!(!is_valid_slug(""));
    assert!(!is_valid_slug("-leading"));
    assert!(!is_valid_slug("trailing-"));
    assert!(!is_valid_slug("double--hyphen"));
    assert!(!is_valid_slug("Upper"));
    assert!(!is_valid_slug("with space"));
  }
}
