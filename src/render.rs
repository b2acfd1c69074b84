use crate::catalog::TOPIC_MARKER;
use rand::Rng;

const ROAST_SUFFIX: &str = " Also: your tabs… close a few.";
const ENCOURAGE_SUFFIX: &str = " Keep going—you’re closer than you think.";
const JOKE_SUFFIX: &str = " P.S. hydrate before you debug.";

/// Recognized tone tags. Anything else leaves the fortune untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vibe {
    Savage,
    Motivational,
    Funny,
}

impl Vibe {
    /// Parse a vibe from a caller-supplied string, case-insensitive and trimmed.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "savage" | "roast" => Some(Self::Savage),
            "motivational" | "wholesome" => Some(Self::Motivational),
            "funny" | "joke" | "lol" => Some(Self::Funny),
            _ => None,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::Savage => ROAST_SUFFIX,
            Self::Motivational => ENCOURAGE_SUFFIX,
            Self::Funny => JOKE_SUFFIX,
        }
    }
}

/// Optional personalization inputs for a single render.
///
/// Empty strings count as absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct Personalization<'a> {
    pub name: Option<&'a str>,
    pub vibe: Option<&'a str>,
    pub topic: Option<&'a str>,
}

/// Transform one template into final display text.
///
/// Steps run in fixed order: topic substitution, name personalization,
/// tone suffix. Total over all inputs; never fails.
pub fn render<R: Rng>(template: &str, p: Personalization<'_>, rng: &mut R) -> String {
    let mut text = apply_topic(template, p.topic, rng);

    if let Some(name) = p.name.filter(|n| !n.is_empty()) {
        text = personalize(&text, name);
    }

    match p.vibe.and_then(Vibe::parse) {
        Some(vibe) => text + vibe.suffix(),
        None => text,
    }
}

/// Insert the topic if the marker is present, else prefix with `[topic]` sometimes.
///
/// The 50% prefix roll is intentional: identical inputs may differ across
/// calls. Callers wanting determinism pass a seeded rng.
fn apply_topic<R: Rng>(base: &str, topic: Option<&str>, rng: &mut R) -> String {
    let Some(topic) = topic.filter(|t| !t.is_empty()) else {
        return base.to_string();
    };
    let t = topic.trim();

    if base.contains(TOPIC_MARKER) {
        return base.replace(TOPIC_MARKER, t);
    }
    if rng.random_bool(0.5) {
        return format!("[{t}] {base}");
    }
    base.to_string()
}

/// Prepend `"<name>, "` and lower-case the first character of the rest.
fn personalize(base: &str, name: &str) -> String {
    let mut chars = base.chars();
    match chars.next() {
        Some(first) => format!("{name}, {}{}", first.to_lowercase(), chars.as_str()),
        None => format!("{name}, "),
    }
}
