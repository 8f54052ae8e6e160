//! Per-locale cue patterns and keyword tables.

use once_cell::sync::Lazy;
use regex::Regex;

/// A companion pattern and the canonical label it maps to.
#[derive(Debug, Clone)]
pub struct CompanionRule {
    pattern: Regex,
    label: &'static str,
}

impl CompanionRule {
    fn new(pattern: &str, label: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid companion regex pattern"),
            label,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub(crate) fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Everything locale-specific the transcript extractor matches against.
///
/// Regexes are compiled once per process; cloning a lexicon only bumps
/// reference counts.
///
/// Capture group names are part of the contract: `place` for the
/// destination, `y`/`m`/`d` for dates, `n` for durations, `amount` and
/// `scale` for budgets, `items` for stated likes.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub(crate) locale: &'static str,
    pub(crate) destination: Regex,
    pub(crate) segment_separators: Regex,
    pub(crate) date: Regex,
    pub(crate) duration: Regex,
    /// Words that turn a duration match into an ordinal (`第一天`).
    pub(crate) ordinal_markers: &'static [&'static str],
    pub(crate) budget: Regex,
    pub(crate) budget_scales: &'static [(&'static str, f64)],
    pub(crate) companions: Vec<CompanionRule>,
    pub(crate) likes: Regex,
    pub(crate) like_separators: Regex,
    pub(crate) themes: &'static [&'static str],
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid lexicon regex pattern")
}

static ZH_CN: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    locale: "zh-CN",
    destination: compile(
        r"去(?P<place>[\p{Han}A-Za-z]{1,20}?)(?:玩|旅游|旅行|游玩|度假|看看|逛逛|[^\p{Han}A-Za-z]|$)",
    ),
    segment_separators: compile(r"[,。、!?;\s]+"),
    date: compile(
        r"(?P<y>\d{4})\s*[年/\-.]\s*(?P<m>\d{1,2})\s*[月/\-.]\s*(?P<d>\d{1,2})\s*[日号]?",
    ),
    duration: compile(r"(?P<n>\d+|[零一二两三四五六七八九十]+)\s*个?\s*天"),
    ordinal_markers: &["第"],
    budget: compile(
        r"(?i)预算\s*(?:是|为|大概|大约|约|在|:)?\s*(?P<amount>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)\s*(?P<scale>万)?\s*(?:元|块|人民币|rmb)?",
    ),
    budget_scales: &[("万", 10_000.0)],
    companions: vec![
        CompanionRule::new(r"带(?:孩子|小孩|宝宝|娃)|孩子|小孩|宝宝", "带孩子"),
        CompanionRule::new(r"夫妻|情侣|爱人|伴侣|老婆|老公|对象", "情侣同行"),
        CompanionRule::new(r"朋友|闺蜜|兄弟|同学", "朋友同行"),
        CompanionRule::new(r"父母|家人|全家|家庭|爸妈", "家庭出行"),
        CompanionRule::new(r"同事|团建|公司", "同事出行"),
    ],
    likes: compile(r"喜欢(?P<items>[^。;,!?\n]+)"),
    like_separators: compile(r"和|及|与|、|,"),
    themes: &[
        "美食", "购物", "亲子", "动漫", "文化", "海岛", "自然", "雪景", "摄影", "历史", "徒步",
    ],
});

static EN: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    locale: "en",
    destination: compile(
        r"(?i)\b(?:go\s+to|visit(?:ing)?|trip\s+to|travel(?:ling)?\s+to|fly\s+to|head(?:ing)?\s+to)\s+(?P<place>[A-Za-z][A-Za-z ]{0,30}?)(?:\s+(?:for|with|in|on|from|and|next|this|during|around)\b|[,.;!?]|$)",
    ),
    segment_separators: compile(r"[,.;!?]+"),
    date: compile(r"(?P<y>\d{4})[-/.](?P<m>\d{1,2})[-/.](?P<d>\d{1,2})"),
    duration: compile(
        r"(?i)\b(?P<n>\d+|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|fourteen)[\s-]*days?\b",
    ),
    ordinal_markers: &[],
    budget: compile(
        r"(?i)\bbudget\s*(?:of|is|:)?\s*(?:around|about)?\s*[$€£¥]?\s*(?P<amount>\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)\s*(?P<scale>k\b)?",
    ),
    budget_scales: &[("k", 1_000.0)],
    companions: vec![
        CompanionRule::new(
            r"(?i)\b(?:kids?|children|child|son|daughter|baby|toddler)\b",
            "with kids",
        ),
        CompanionRule::new(
            r"(?i)\b(?:partner|wife|husband|girlfriend|boyfriend|spouse|honeymoon)\b",
            "couple",
        ),
        CompanionRule::new(r"(?i)\b(?:friends?|buddies)\b", "friends"),
        CompanionRule::new(r"(?i)\b(?:family|parents)\b", "family"),
        CompanionRule::new(r"(?i)\b(?:colleagues?|coworkers?|team)\b", "colleagues"),
    ],
    likes: compile(r"(?i)\b(?:i\s+(?:really\s+)?(?:like|love|enjoy)|interested\s+in)\s+(?P<items>[^.;!?\n]+)"),
    like_separators: compile(r"(?i)\s*(?:,|&|\band\b|\bor\b)\s*"),
    themes: &[
        "food",
        "shopping",
        "family-friendly",
        "anime",
        "culture",
        "beach",
        "nature",
        "snow",
        "photography",
        "history",
        "hiking",
    ],
});

impl Lexicon {
    /// Simplified Chinese cues (`去…玩`, `预算…万`, `喜欢…`).
    pub fn zh_cn() -> Self {
        ZH_CN.clone()
    }

    /// English cues (`go to`, `budget of`, `I love …`).
    pub fn en() -> Self {
        EN.clone()
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    pub fn companions(&self) -> &[CompanionRule] {
        &self.companions
    }

    /// The fixed theme vocabulary scanned for in every transcript.
    pub fn themes(&self) -> &'static [&'static str] {
        self.themes
    }

    /// Multiplier for a budget scale word such as `万`; 1 when absent.
    pub(crate) fn scale_factor(&self, scale: Option<&str>) -> Option<f64> {
        let Some(scale) = scale.map(str::to_lowercase) else {
            return Some(1.0);
        };
        self.budget_scales
            .iter()
            .find(|(word, _)| *word == scale)
            .map(|(_, factor)| *factor)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::zh_cn()
    }
}
