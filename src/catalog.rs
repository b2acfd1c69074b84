use rand::Rng;

/// Substitution marker recognized inside fortune templates.
pub const TOPIC_MARKER: &str = "{topic}";

/// The fixed fortune list. Some entries carry a `{topic}` marker.
const FORTUNES: &[&str] = &[
    "Your Wi-Fi will reconnect right before the Zoom ends.",
    "A bug you fear is just a semicolon you missed.",
    "Ship today. Future-you will thank present-you.",
    "Beware of meetings disguised as 'quick syncs'.",
    "Your next idea is already in your drafts.",
    "The deploy will pass when someone is watching.",
    "Coffee is temporary; shipped code is forever.",
    "A stranger will star your repo at 3 AM.",
    "New opportunity: check your spam folder 👀",
    "Your keyboard knows the answer. Trust your fingers.",
    "Dark mode won’t fix your sleep schedule—but it helps.",
    "Your side project will outgrow your day job when you least expect it.",
    "The best A/B test is shipping it.",
    "Your {topic} hot take will go viral if you’re nice about it.",
    "A clean desk invites messy ideas. That’s good.",
    "Your TypeScript will compile on the first try today.",
    "Someone important is lurking your profile right now.",
    "A tiny feature will make a huge user happy.",
    "You’re one README away from more stars.",
    "Your tests will pass after you hydrate.",
    "The {topic} thread you’re avoiding is the one to write.",
    "Close 3 tabs, unlock 3 IQ points.",
    "Your next DM changes the trajectory.",
    "The algorithm secretly loves kindness (and consistency).",
    "Your morning walk is worth a new feature.",
    "Tweet it, then do the work. In that order.",
    "Your {topic} meme is funnier than you think.",
    "Documentation is a love letter to your future self.",
    "Ka-ching: your Stripe dashboard will blink this week.",
    "The best growth hack is a helpful product.",
    "You’ll find the bug in a log you didn’t read yet.",
    "Stop perfecting the logo. Ship the link.",
    "Your PR will get merged with a smiley comment.",
    "Today’s ‘no’ makes room for tomorrow’s ‘yes’.",
    "The right collaborator is two replies away.",
    "Your {topic} idea needs a 10-second demo, not a 10-page plan.",
    "Five lines of code will beat your 50-line anxiety.",
    "Your laptop battery lasts longer when you’re excited.",
    "Friday deploy? Bold. Monday you will still be fine.",
    "A quiet hour beats a noisy day.",
    "Your best insight is hiding in user #7’s feedback.",
    "Say 'no' to one thing; say 'yes' to momentum.",
    "Your Notion will never be perfect. That’s okay.",
    "The right emoji doubles engagement :)",
    "Start with ugly; end with shipped.",
    "Your next commit message will be poetry.",
    "You’re closer than you think—keep going.",
    "Touch grass; ship faster.",
    "Your {topic} post will help the exact person you wanted to meet.",
    "Refactor later; delight now.",
    "Your curiosity is the roadmap.",
    "An uncomfortable message will unlock a comfortable future.",
    "You’ll sleep better after clicking 'Publish'.",
    "Your API rate limit will hold—believe.",
    "Take the screenshot. Post the demo.",
    "Luck = shipped × shared.",
    "[{topic}] A boring solution will win hearts.",
    "Your next feature request is already in your inbox.",
    "The comment you’re afraid to write is the one they need.",
    "Build the tiny thing people use every day.",
    "Cold outreach works when it’s warm-hearted.",
    "Your roadmap is hiding in your support tickets.",
    "Write the docs as if your best friend will read them.",
    "Your {topic} side quest becomes the main story.",
    "Small audience, big impact.",
    "People love tidy URLs and tidy ideas.",
    "The first draft is allowed to be terrible.",
    "Caffeine helps; clarity helps more.",
];

/// Read-only catalog of fortune templates, shared across handlers.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: &'static [&'static str],
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            templates: FORTUNES,
        }
    }

    /// Pick one template uniformly at random, with replacement.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &'static str {
        self.templates[rng.random_range(0..self.templates.len())]
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn contains(&self, template: &str) -> bool {
        self.templates.contains(&template)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
