/* src/server/core/rust/src/resolve.rs */

//! Locale negotiation for requests that carry no locale in the path.

use epoxy_content::Locale;

pub const DEFAULT_LOCALE_COOKIE: &str = "NEXT_LOCALE";

pub struct ResolveContext<'a> {
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
  pub cookie_name: &'a str,
}

/// cookie -> Accept-Language -> default locale
pub fn negotiate_locale(ctx: &ResolveContext<'_>) -> Locale {
  if let Some(header) = ctx.cookie_header
    && let Some(locale) = parse_cookie_locale(header, ctx.cookie_name)
  {
    return locale;
  }

  if let Some(header) = ctx.accept_language
    && let Some(locale) = parse_accept_language(header)
  {
    return locale;
  }

  Locale::DEFAULT
}

fn parse_cookie_locale(header: &str, name: &str) -> Option<Locale> {
  for pair in header.split(';') {
    if let Some((k, v)) = pair.trim().split_once('=')
      && k.trim() == name
      && let Ok(locale) = v.trim().parse()
    {
      return Some(locale);
    }
  }
  None
}

fn parse_accept_language(header: &str) -> Option<Locale> {
  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    let mut q = 1.0_f64;
    for s in segments {
      if let Some(val) = s.trim().strip_prefix("q=")
        && let Ok(v) = val.parse::<f64>()
      {
        q = v;
      }
    }
    entries.push((lang, q));
  }

  // Stable sort keeps header order among equal weights.
  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

  for (lang, q) in entries {
    if q <= 0.0 {
      continue;
    }
    if let Ok(locale) = lang.parse() {
      return Some(locale);
    }
    // Prefix match: ar-SA -> ar
    if let Some((prefix, _)) = lang.split_once('-')
      && let Ok(locale) = prefix.parse()
    {
      return Some(locale);
    }
  }

  None
}

#[cfg(test)]
mod tests {
  use super::*;

  fn negotiate(cookie: Option<&str>, accept_language: Option<&str>) -> Locale {
    negotiate_locale(&ResolveContext {
      cookie_header: cookie,
      accept_language,
      cookie_name: DEFAULT_LOCALE_COOKIE,
    })
  }

  #[test]
  fn cookie_resolves() {
    assert_eq!(negotiate(Some("NEXT_LOCALE=ar"), None), Locale::Ar);
  }

  #[test]
  fn cookie_beats_accept_language() {
    assert_eq!(negotiate(Some("NEXT_LOCALE=en"), Some("ar")), Locale::En);
  }

  #[test]
  fn cookie_with_multiple_pairs() {
    assert_eq!(negotiate(Some("theme=dark; NEXT_LOCALE=ar; foo=bar"), None), Locale::Ar);
  }

  #[test]
  fn unknown_cookie_falls_through() {
    assert_eq!(negotiate(Some("NEXT_LOCALE=fr"), Some("ar")), Locale::Ar);
    assert_eq!(negotiate(Some("lang=ar"), None), Locale::En);
  }

  #[test]
  fn accept_language_q_value_priority() {
    assert_eq!(negotiate(None, Some("en;q=0.5,ar;q=0.9")), Locale::Ar);
    assert_eq!(negotiate(None, Some("ar,en;q=0.5")), Locale::Ar);
  }

  #[test]
  fn accept_language_prefix_match() {
    assert_eq!(negotiate(None, Some("fr-FR,ar-SA;q=0.8,en;q=0.5")), Locale::Ar);
  }

  #[test]
  fn zero_weight_is_ignored() {
    assert_eq!(negotiate(None, Some("ar;q=0")), Locale::En);
  }

  #[test]
  fn falls_back_to_default() {
    assert_eq!(negotiate(None, None), Locale::En);
    assert_eq!(negotiate(None, Some("")), Locale::En);
    assert_eq!(negotiate(None, Some("fr,de")), Locale::En);
  }

  #[test]
  fn custom_cookie_name() {
    let ctx = ResolveContext { cookie_header: Some("site-locale=ar"), accept_language: None, cookie_name: "site-locale" };
    assert_eq!(negotiate_locale(&ctx), Locale::Ar);
  }
}
