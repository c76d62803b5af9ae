/// Substrings that cost a URL 10 points each, in evaluation order.
pub const SUSPICIOUS_KEYWORDS: [&str; 10] = [
    "login", "verify", "update", "secure", "account", "bank", "paypal", "password", "bonus",
    "free",
];

const STARTING_SCORE: i32 = 100;
const HTTP_PENALTY: i32 = 30;
const KEYWORD_PENALTY: i32 = 10;
const SUBDOMAIN_PENALTY: i32 = 10;
const MAX_DOTS: usize = 3;

/// Coarse three-level classification derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Risky,
    Dangerous,
}

impl Verdict {
    pub fn from_score(score: i32) -> Self {
        if score >= 80 {
            Verdict::Safe
        } else if score >= 50 {
            Verdict::Risky
        } else {
            Verdict::Dangerous
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Safe => "SAFE",
            Verdict::Risky => "RISKY",
            Verdict::Dangerous => "DANGEROUS",
        }
    }

    /// Display color for the verdict heading, fixed per label.
    pub fn color(&self) -> &'static str {
        match self {
            Verdict::Safe => "green",
            Verdict::Risky => "orange",
            Verdict::Dangerous => "red",
        }
    }
}

/// Outcome of scoring a single URL. Owned by the caller, one per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: i32,
    pub verdict: Verdict,
    pub reasons: Vec<String>,
}

/// Scores a URL against the fixed rule list.
///
/// Total over arbitrary strings: empty input and non-URL text are scored
/// like any other string. Penalties stack without a floor, so a URL hitting
/// every rule goes negative and stays `Dangerous`. Reason order follows
/// rule order.
pub fn evaluate(url: &str) -> ScoreResult {
    let mut score = STARTING_SCORE;
    let mut reasons = Vec::new();

    if url.starts_with("http://") {
        score -= HTTP_PENALTY;
        reasons.push("uses HTTP instead of HTTPS".to_string());
    }

    let lowered = url.to_lowercase();
    for keyword in SUSPICIOUS_KEYWORDS {
        if lowered.contains(keyword) {
            score -= KEYWORD_PENALTY;
            reasons.push(format!("suspicious keyword in URL: {keyword}"));
        }
    }

    if url.matches('.').count() > MAX_DOTS {
        score -= SUBDOMAIN_PENALTY;
        reasons.push("many subdomains".to_string());
    }

    ScoreResult {
        score,
        verdict: Verdict::from_score(score),
        reasons,
    }
}
