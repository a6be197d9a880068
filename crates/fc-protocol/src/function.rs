use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::encoding::encode_arguments;
use crate::error::{ProtocolError, ProtocolResult};

/// Closed set of callable function names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionName {
    GetTicketStatus,
    ScheduleMeeting,
    GetExpenseBalance,
    CalculatePerformanceBonus,
    ReportOfficeIssue,
    Unknown,
}

impl FunctionName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GetTicketStatus => "get_ticket_status",
            Self::ScheduleMeeting => "schedule_meeting",
            Self::GetExpenseBalance => "get_expense_balance",
            Self::CalculatePerformanceBonus => "calculate_performance_bonus",
            Self::ReportOfficeIssue => "report_office_issue",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FunctionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Numeric arguments are `Number`s so digit runs of any length survive
// unchanged; values are never range-checked.

/// Arguments for `get_ticket_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketStatusArgs {
    pub ticket_id: Number,
}

/// Arguments for `schedule_meeting`.
///
/// `date` and `time` are passed through as matched (`YYYY-MM-DD`, `HH:MM`);
/// no calendar validation happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMeetingArgs {
    pub date: String,
    pub time: String,
    pub meeting_room: String,
}

/// Arguments for `get_expense_balance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBalanceArgs {
    pub employee_id: Number,
}

/// Arguments for `calculate_performance_bonus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceBonusArgs {
    pub employee_id: Number,
    pub current_year: Number,
}

/// Arguments for `report_office_issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeIssueArgs {
    pub issue_code: Number,
    pub department: String,
}

/// A resolved function call: one variant per function, each carrying
/// its typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionCall {
    TicketStatus(TicketStatusArgs),
    ScheduleMeeting(ScheduleMeetingArgs),
    ExpenseBalance(ExpenseBalanceArgs),
    PerformanceBonus(PerformanceBonusArgs),
    OfficeIssue(OfficeIssueArgs),
    Unknown,
}

impl FunctionCall {
    pub fn name(&self) -> FunctionName {
        match self {
            Self::TicketStatus(_) => FunctionName::GetTicketStatus,
            Self::ScheduleMeeting(_) => FunctionName::ScheduleMeeting,
            Self::ExpenseBalance(_) => FunctionName::GetExpenseBalance,
            Self::PerformanceBonus(_) => FunctionName::CalculatePerformanceBonus,
            Self::OfficeIssue(_) => FunctionName::ReportOfficeIssue,
            Self::Unknown => FunctionName::Unknown,
        }
    }

    /// Encode the arguments as a JSON object string (`{}` for `Unknown`).
    pub fn arguments_json(&self) -> ProtocolResult<String> {
        match self {
            Self::TicketStatus(args) => encode_arguments(args),
            Self::ScheduleMeeting(args) => encode_arguments(args),
            Self::ExpenseBalance(args) => encode_arguments(args),
            Self::PerformanceBonus(args) => encode_arguments(args),
            Self::OfficeIssue(args) => encode_arguments(args),
            Self::Unknown => encode_arguments(&serde_json::Map::new()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// Wire body returned by `/execute`.
///
/// `arguments` is a JSON document serialized into a string, not a nested
/// object. Clients decode it a second time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCallResponse {
    pub name: String,
    pub arguments: String,
}

impl TryFrom<&FunctionCall> for FunctionCallResponse {
    type Error = ProtocolError;

    fn try_from(call: &FunctionCall) -> Result<Self, Self::Error> {
        Ok(Self {
            name: call.name().to_string(),
            arguments: call.arguments_json()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_name_serialization() {
        let json = serde_json::to_string(&FunctionName::CalculatePerformanceBonus).unwrap();
        assert_eq!(json, r#""calculate_performance_bonus""#);
        assert_eq!(FunctionName::Unknown.to_string(), "unknown");
    }

    #[test]
    fn function_name_display_matches_serde() {
        for name in [
            FunctionName::GetTicketStatus,
            FunctionName::ScheduleMeeting,
            FunctionName::GetExpenseBalance,
            FunctionName::CalculatePerformanceBonus,
            FunctionName::ReportOfficeIssue,
            FunctionName::Unknown,
        ] {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{name}\""));
        }
    }

    #[test]
    fn meeting_arguments_keep_field_order() {
        let call = FunctionCall::ScheduleMeeting(ScheduleMeetingArgs {
            date: "2025-02-15".into(),
            time: "14:00".into(),
            meeting_room: "Room A".into(),
        });
        assert_eq!(
            call.arguments_json().unwrap(),
            r#"{"date": "2025-02-15", "time": "14:00", "meeting_room": "Room A"}"#
        );
    }

    #[test]
    fn bonus_arguments() {
        let call = FunctionCall::PerformanceBonus(PerformanceBonusArgs {
            employee_id: Number::from(10056u64),
            current_year: Number::from(2025u64),
        });
        assert_eq!(call.name(), FunctionName::CalculatePerformanceBonus);
        assert_eq!(
            call.arguments_json().unwrap(),
            r#"{"employee_id": 10056, "current_year": 2025}"#
        );
    }

    #[test]
    fn ids_beyond_u64_are_written_verbatim() {
        let id: Number = "99999999999999999999999".parse().unwrap();
        let call = FunctionCall::TicketStatus(TicketStatusArgs { ticket_id: id });
        assert_eq!(
            call.arguments_json().unwrap(),
            r#"{"ticket_id": 99999999999999999999999}"#
        );
    }

    #[test]
    fn unknown_has_empty_arguments() {
        assert!(FunctionCall::Unknown.is_unknown());
        assert_eq!(FunctionCall::Unknown.arguments_json().unwrap(), "{}");
    }

    #[test]
    fn response_double_encodes_arguments() {
        let call = FunctionCall::TicketStatus(TicketStatusArgs {
            ticket_id: Number::from(83742u64),
        });
        let response = FunctionCallResponse::try_from(&call).unwrap();
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"name":"get_ticket_status","arguments":"{\"ticket_id\": 83742}"}"#
        );

        let decoded: FunctionCallResponse = serde_json::from_str(&json).unwrap();
        let inner: TicketStatusArgs = serde_json::from_str(&decoded.arguments).unwrap();
        assert_eq!(inner.ticket_id, Number::from(83742u64));
    }
}
