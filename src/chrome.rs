//! Page behaviors that are independent of form validation.
//!
//! These are the pure decisions behind the page's cosmetic effects; the
//! caller applies the results to whatever renders the page.

use crate::config::WhatsAppConfig;
use url::Url;

/// Scroll offset, in pixels, past which the header uses the raised shadow.
pub const HEADER_SCROLL_THRESHOLD: f64 = 10.0;
pub const HEADER_SHADOW_RAISED: &str = "0 2px 12px rgba(0, 0, 0, 0.1)";
pub const HEADER_SHADOW_RESTING: &str = "0 2px 8px rgba(0, 0, 0, 0.05)";

/// Elements that fade in when they scroll into view.
pub const FADE_IN_SELECTORS: [&str; 4] = [
    ".spec-card",
    ".benefit-item",
    ".process-step",
    ".trust-item",
];
pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const FADE_IN_TRANSITION: &str = "opacity 0.5s ease, transform 0.5s ease";

/// Header box shadow for a vertical scroll offset.
pub fn header_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > HEADER_SCROLL_THRESHOLD {
        HEADER_SHADOW_RAISED
    } else {
        HEADER_SHADOW_RESTING
    }
}

/// Element id an in-page link should smooth-scroll to.
///
/// Returns `None` for a bare `#` and for links that leave the page. The
/// caller still checks that an element with the id exists.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Inline style of a fade-in element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

/// Visibility-triggered fade-in of one element.
///
/// Starts hidden and shifted down. Once revealed it stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FadeIn {
    revealed: bool,
}

impl FadeIn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection ratio. Returns whether the element is revealed.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if intersection_ratio >= FADE_IN_THRESHOLD {
            self.revealed = true;
        }
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn style(&self) -> FadeStyle {
        if self.revealed {
            FadeStyle {
                opacity: "1",
                transform: "translateY(0)",
            }
        } else {
            FadeStyle {
                opacity: "0",
                transform: "translateY(20px)",
            }
        }
    }
}

/// WhatsApp deep link with a pre-filled greeting.
///
/// Non-digits are dropped from the phone number and the greeting is
/// form-urlencoded into the `text` query parameter.
///
/// # Example
///
/// ```rust
/// use formguard::chrome::whatsapp_link;
/// use formguard::config::WhatsAppConfig;
///
/// let link = whatsapp_link(&WhatsAppConfig {
///     phone_number: "+972 50-123-4567".to_string(),
///     greeting: "Hi there".to_string(),
/// })
/// .unwrap();
///
/// assert_eq!(link.as_str(), "https://wa.me/972501234567?text=Hi+there");
/// ```
pub fn whatsapp_link(config: &WhatsAppConfig) -> Result<Url, url::ParseError> {
    let number: String = config
        .phone_number
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    Url::parse_with_params(
        &format!("https://wa.me/{}", number),
        &[("text", config.greeting.as_str())],
    )
}
