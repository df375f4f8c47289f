// core/src/checkout/link.rs
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use std::fmt;

/// Everything `encodeURIComponent` escapes: all but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'!')
  .remove(b'~')
  .remove(b'*')
  .remove(b'\'')
  .remove(b'(')
  .remove(b')');

const MOBILE_MARKERS: &[&str] = &[
  "mobi",
  "android",
  "webos",
  "iphone",
  "ipad",
  "ipod",
  "blackberry",
  "iemobile",
  "opera mini",
];

/// Which messaging entry point the shopper's browser can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
  Mobile,
  Web,
}

impl Platform {
  /// Sniffs a `User-Agent` header. A missing header counts as desktop.
  pub fn from_user_agent(user_agent: Option<&str>) -> Self {
    let Some(agent) = user_agent else {
      return Platform::Web;
    };
    let agent = agent.to_lowercase();
    if MOBILE_MARKERS.iter().any(|marker| agent.contains(marker)) {
      Platform::Mobile
    } else {
      Platform::Web
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeepLink {
  pub platform: Platform,
  pub url: String,
}

impl DeepLink {
  pub fn compose(platform: Platform, merchant_phone: &str, message: &str) -> Self {
    let phone = digits_only(merchant_phone);
    let text = utf8_percent_encode(message, URI_COMPONENT);
    let url = match platform {
      Platform::Mobile => format!("whatsapp://send?phone={}&text={}", phone, text),
      Platform::Web => format!("https://wa.me/{}?text={}", phone, text),
    };
    Self { platform, url }
  }
}

impl fmt::Display for DeepLink {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.url)
  }
}

pub fn digits_only(phone: &str) -> String {
  phone.chars().filter(char::is_ascii_digit).collect()
}
