use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Student summary row used by the admin student report and the lecturer
/// student list. Everything beyond the identity columns is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StudentReportRow {
    pub student_id: String,
    pub student_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub batch_no: Option<String>,
    pub module: Option<String>,
    pub results: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LecturerReportRow {
    pub lecturer_id: String,
    pub lecturer_name: String,
    pub department: Option<String>,
    /// Modules the lecturer teaches, comma separated.
    pub module: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StudentListQuery {
    pub module: Option<String>,
    pub batch: Option<String>,
}

impl StudentListQuery {
    /// Empty query values are treated as "no filter".
    pub fn normalized(&self) -> (Option<&str>, Option<&str>) {
        fn clean(value: &Option<String>) -> Option<&str> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
        }
        (clean(&self.module), clean(&self.batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_query_drops_blank_values() {
        let query = StudentListQuery {
            module: Some("  ".into()),
            batch: Some(" COM12 ".into()),
        };
        assert_eq!(query.normalized(), (None, Some("COM12")));
        assert_eq!(StudentListQuery::default().normalized(), (None, None));
    }

    #[test]
    fn student_row_serializes_report_keys() {
        let row = StudentReportRow {
            student_id: "s-1".into(),
            student_name: "Amal Perera".into(),
            first_name: "Amal".into(),
            last_name: "Perera".into(),
            email: None,
            batch_no: Some("COM12".into()),
            module: Some("Networking".into()),
            results: Some("Pass".into()),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["studentName"], "Amal Perera");
        assert_eq!(json["batchNo"], "COM12");
        assert_eq!(json["results"], "Pass");
    }

    #[test]
    fn lecturer_row_carries_module_column() {
        let row = LecturerReportRow {
            lecturer_id: "l-1".into(),
            lecturer_name: "Kamal Silva".into(),
            department: None,
            module: Some("Databases, Networking".into()),
            email: None,
            contact_number: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["module"], "Databases, Networking");
        assert_eq!(json["lecturerName"], "Kamal Silva");
    }
}
