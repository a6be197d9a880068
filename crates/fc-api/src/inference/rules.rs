//! Built-in regex recognizers for the five supported functions.
//!
//! Each rule is one row of (intent, pattern, extractor). Patterns run
//! against the lower-cased query, are not anchored, and allow arbitrary
//! text (excluding newlines) between their parts.
//!
//! Character classes follow the clients' original matcher: `\d` is any
//! Unicode decimal digit, a word character is a letter, a number or `_`
//! (combining marks end a word), and whitespace also covers the
//! `\x1c`-`\x1f` separators.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Number;

use super::Recognizer;
use fc_protocol::{
    ExpenseBalanceArgs, FunctionCall, FunctionName, OfficeIssueArgs, PerformanceBonusArgs,
    ScheduleMeetingArgs, TicketStatusArgs,
};

// "what is the status of ticket 83742?", "ticket 83742"
static RE_TICKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ticket[\s\x1c-\x1f]+(\d+)").unwrap());

// "schedule a meeting on 2025-02-15 at 14:00 in room a."
static RE_MEETING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"meeting.*?(\d{4}-\d{2}-\d{2}).*?(\d{2}:\d{2}).*?(room[\s\x1c-\x1f]+[\p{L}\p{N}_]+)",
    )
    .unwrap()
});

// "show my expense balance for employee 10056.", "expense emp 10056"
static RE_EXPENSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"expense.*?(?:employee|emp)[\s\x1c-\x1f]+(\d+)").unwrap()
});

// "calculate performance bonus for employee 10056 for 2025."
static RE_BONUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"bonus.*?(?:employee|emp)[\s\x1c-\x1f]+(\d+).*?(?:for|in)[\s\x1c-\x1f]+(\d{4})",
    )
    .unwrap()
});

// "issue 45321 facilities", "report office issue 45321 for the facilities department."
static RE_ISSUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:office[\s\x1c-\x1f]+)?issue[\s\x1c-\x1f]+(\d+).*?(?:for.*?)?([\p{L}\p{N}_]+)(?:[\s\x1c-\x1f]+department)?",
    )
    .unwrap()
});

// Unicode general category Nd, the same set `\d` matches above.
static RE_DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d$").unwrap());

/// Filler words that are never accepted as a department name.
const DEPARTMENT_STOP_WORDS: [&str; 5] = ["for", "the", "in", "at", "to"];

type Extractor = fn(&Captures<'_>) -> Option<FunctionCall>;

/// Regex-backed recognizer: a pattern plus a capture extractor.
pub struct PatternRecognizer {
    intent: FunctionName,
    pattern: &'static LazyLock<Regex>,
    extract: Extractor,
}

impl PatternRecognizer {
    pub fn new(intent: FunctionName, pattern: &'static LazyLock<Regex>, extract: Extractor) -> Self {
        Self {
            intent,
            pattern,
            extract,
        }
    }
}

impl Recognizer for PatternRecognizer {
    fn intent(&self) -> FunctionName {
        self.intent
    }

    fn try_match(&self, text: &str) -> Option<FunctionCall> {
        let caps = self.pattern.captures(text)?;
        (self.extract)(&caps)
    }
}

/// Default recognizers in priority order.
pub fn default_recognizers() -> Vec<Box<dyn Recognizer>> {
    vec![
        Box::new(PatternRecognizer::new(
            FunctionName::GetTicketStatus,
            &RE_TICKET,
            extract_ticket,
        )),
        Box::new(PatternRecognizer::new(
            FunctionName::ScheduleMeeting,
            &RE_MEETING,
            extract_meeting,
        )),
        Box::new(PatternRecognizer::new(
            FunctionName::GetExpenseBalance,
            &RE_EXPENSE,
            extract_expense,
        )),
        Box::new(PatternRecognizer::new(
            FunctionName::CalculatePerformanceBonus,
            &RE_BONUS,
            extract_bonus,
        )),
        Box::new(PatternRecognizer::new(
            FunctionName::ReportOfficeIssue,
            &RE_ISSUE,
            extract_issue,
        )),
    ]
}

fn extract_ticket(caps: &Captures<'_>) -> Option<FunctionCall> {
    Some(FunctionCall::TicketStatus(TicketStatusArgs {
        ticket_id: parse_number(&caps[1])?,
    }))
}

fn extract_meeting(caps: &Captures<'_>) -> Option<FunctionCall> {
    Some(FunctionCall::ScheduleMeeting(ScheduleMeetingArgs {
        date: caps[1].to_string(),
        time: caps[2].to_string(),
        meeting_room: title_case(&caps[3]),
    }))
}

fn extract_expense(caps: &Captures<'_>) -> Option<FunctionCall> {
    Some(FunctionCall::ExpenseBalance(ExpenseBalanceArgs {
        employee_id: parse_number(&caps[1])?,
    }))
}

fn extract_bonus(caps: &Captures<'_>) -> Option<FunctionCall> {
    Some(FunctionCall::PerformanceBonus(PerformanceBonusArgs {
        employee_id: parse_number(&caps[1])?,
        current_year: parse_number(&caps[2])?,
    }))
}

fn extract_issue(caps: &Captures<'_>) -> Option<FunctionCall> {
    let issue_code = parse_number(&caps[1])?;
    let department = capitalize(&caps[2]);

    if DEPARTMENT_STOP_WORDS.contains(&department.to_lowercase().as_str()) {
        tracing::debug!(word = %department, "rejected stop-word as department");
        return None;
    }

    Some(FunctionCall::OfficeIssue(OfficeIssueArgs {
        issue_code,
        department,
    }))
}

/// Turn a run of decimal digits (any script) into an unbounded JSON
/// number with leading zeros removed.
fn parse_number(digits: &str) -> Option<Number> {
    let mut normalized = String::with_capacity(digits.len());
    for ch in digits.chars() {
        let value = decimal_value(ch)?;
        if normalized.is_empty() && value == 0 {
            continue;
        }
        normalized.push(char::from(b'0' + value));
    }
    if normalized.is_empty() {
        normalized.push('0');
    }

    match normalized.parse() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::debug!(digits, error = %e, "unparsable numeric argument");
            None
        }
    }
}

/// Value of a decimal digit from any script.
///
/// Decimal digits are encoded as contiguous 0..9 runs, so a digit's value
/// is its distance from the start of its block of digits, modulo 10.
fn decimal_value(ch: char) -> Option<u8> {
    if let Some(d) = ch.to_digit(10) {
        return u8::try_from(d).ok();
    }
    if !is_decimal(ch) {
        return None;
    }

    let mut offset: u32 = 0;
    let mut code = u32::from(ch);
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    u8::try_from(offset % 10).ok()
}

fn is_decimal(ch: char) -> bool {
    let mut buf = [0u8; 4];
    RE_DECIMAL.is_match(ch.encode_utf8(&mut buf))
}

/// Titlecase the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            push_titlecase(&mut out, first);
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Append the titlecase form of `ch`.
///
/// Titlecase equals uppercase except for digraphs, ligatures, Greek
/// letters with ypogegrammeni and Georgian Mkhedruli.
fn push_titlecase(out: &mut String, ch: char) {
    let title: &str = match ch {
        '\u{01C4}'..='\u{01C6}' => "\u{01C5}",
        '\u{01C7}'..='\u{01C9}' => "\u{01C8}",
        '\u{01CA}'..='\u{01CC}' => "\u{01CB}",
        '\u{01F1}'..='\u{01F3}' => "\u{01F2}",
        'ß' => "Ss",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        '\u{0587}' => "\u{0535}\u{0582}",
        '\u{FB13}' => "\u{0544}\u{0576}",
        '\u{FB14}' => "\u{0544}\u{0565}",
        '\u{FB15}' => "\u{0544}\u{056B}",
        '\u{FB16}' => "\u{054E}\u{0576}",
        '\u{FB17}' => "\u{0544}\u{056D}",
        '\u{1FB2}' => "\u{1FBA}\u{0345}",
        '\u{1FB4}' => "\u{0386}\u{0345}",
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}",
        '\u{1FC2}' => "\u{1FCA}\u{0345}",
        '\u{1FC4}' => "\u{0389}\u{0345}",
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}",
        '\u{1FF2}' => "\u{1FFA}\u{0345}",
        '\u{1FF4}' => "\u{038F}\u{0345}",
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}",
        '\u{1F80}'..='\u{1F87}'
        | '\u{1F90}'..='\u{1F97}'
        | '\u{1FA0}'..='\u{1FA7}' => {
            out.push(char::from_u32(u32::from(ch) + 8).unwrap_or(ch));
            return;
        }
        '\u{1FB3}' => "\u{1FBC}",
        '\u{1FC3}' => "\u{1FCC}",
        '\u{1FF3}' => "\u{1FFC}",
        '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => {
            out.push(ch);
            return;
        }
        _ => {
            out.extend(ch.to_uppercase());
            return;
        }
    };
    out.push_str(title);
}

/// Capitalize each whitespace-separated word and join with single spaces.
fn title_case(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
