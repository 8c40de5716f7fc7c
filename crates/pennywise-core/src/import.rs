//! Record import from CSV and JSON exports
//!
//! This is the boundary where malformed data is rejected: negative amounts,
//! blank categories and unparseable dates never reach the analysis code.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{ExpenseRecord, IncomeRecord};

/// Default source label for income rows without one
const DEFAULT_INCOME_SOURCE: &str = "Income";

/// Find a column by header name (case-insensitive, whitespace-trimmed)
fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn required_column(headers: &StringRecord, name: &str) -> Result<usize> {
    column(headers, name).ok_or_else(|| Error::Import(format!("Missing '{}' column", name)))
}

/// Row id from the optional `id` column, defaulting to the 1-based row number
fn parse_id(record: &StringRecord, id_col: Option<usize>, row: usize) -> Result<i64> {
    match id_col.and_then(|i| record.get(i)).map(str::trim) {
        Some(s) if !s.is_empty() => s
            .parse::<i64>()
            .map_err(|_| Error::Import(format!("Row {}: invalid id '{}'", row, s))),
        _ => Ok(row as i64),
    }
}

fn field<'r>(record: &'r StringRecord, col: usize, row: usize, name: &str) -> Result<&'r str> {
    record
        .get(col)
        .map(str::trim)
        .ok_or_else(|| Error::Import(format!("Row {}: missing {}", row, name)))
}

/// Parse expense rows with `date`, `category`, `amount` and optional `id` columns
pub fn parse_expenses_csv<R: Read>(reader: R) -> Result<Vec<ExpenseRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let id_col = column(&headers, "id");
    let date_col = required_column(&headers, "date")?;
    let category_col = required_column(&headers, "category")?;
    let amount_col = required_column(&headers, "amount")?;

    let mut expenses = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let row = index + 1;

        let expense = ExpenseRecord {
            id: parse_id(&record, id_col, row)?,
            date: parse_date(field(&record, date_col, row, "date")?)?,
            category: field(&record, category_col, row, "category")?.to_string(),
            amount: parse_amount(field(&record, amount_col, row, "amount")?)?,
        };
        validate_expense(&expense)?;
        expenses.push(expense);
    }

    debug!(count = expenses.len(), "Parsed expense CSV");
    Ok(expenses)
}

/// Parse income rows with `date`, `amount` and optional `id`, `source` columns
pub fn parse_income_csv<R: Read>(reader: R) -> Result<Vec<IncomeRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let id_col = column(&headers, "id");
    let source_col = column(&headers, "source");
    let date_col = required_column(&headers, "date")?;
    let amount_col = required_column(&headers, "amount")?;

    let mut incomes = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        let row = index + 1;

        let source = source_col
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_INCOME_SOURCE)
            .to_string();

        let income = IncomeRecord {
            id: parse_id(&record, id_col, row)?,
            date: parse_date(field(&record, date_col, row, "date")?)?,
            source,
            amount: parse_amount(field(&record, amount_col, row, "amount")?)?,
        };
        validate_income(&income)?;
        incomes.push(income);
    }

    debug!(count = incomes.len(), "Parsed income CSV");
    Ok(incomes)
}

/// Parse a JSON array of expense records
pub fn parse_expenses_json<R: Read>(reader: R) -> Result<Vec<ExpenseRecord>> {
    let expenses: Vec<ExpenseRecord> = serde_json::from_reader(reader)?;
    for expense in &expenses {
        validate_expense(expense)?;
    }
    Ok(expenses)
}

/// Parse a JSON array of income records
pub fn parse_income_json<R: Read>(reader: R) -> Result<Vec<IncomeRecord>> {
    let incomes: Vec<IncomeRecord> = serde_json::from_reader(reader)?;
    for income in &incomes {
        validate_income(income)?;
    }
    Ok(incomes)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Load expenses from a `.json` file or a CSV file (any other extension)
pub fn load_expenses(path: &Path) -> Result<Vec<ExpenseRecord>> {
    let reader = BufReader::new(File::open(path)?);
    if is_json(path) {
        parse_expenses_json(reader)
    } else {
        parse_expenses_csv(reader)
    }
}

/// Load income from a `.json` file or a CSV file (any other extension)
pub fn load_income(path: &Path) -> Result<Vec<IncomeRecord>> {
    let reader = BufReader::new(File::open(path)?);
    if is_json(path) {
        parse_income_json(reader)
    } else {
        parse_income_csv(reader)
    }
}

fn validate_expense(expense: &ExpenseRecord) -> Result<()> {
    if !expense.amount.is_finite() || expense.amount < 0.0 {
        warn!(id = expense.id, amount = expense.amount, "Rejected expense amount");
        return Err(Error::InvalidData(format!(
            "Expense {} has invalid amount {}",
            expense.id, expense.amount
        )));
    }
    if expense.category.trim().is_empty() {
        warn!(id = expense.id, "Rejected expense without category");
        return Err(Error::InvalidData(format!(
            "Expense {} has no category",
            expense.id
        )));
    }
    Ok(())
}

fn validate_income(income: &IncomeRecord) -> Result<()> {
    if !income.amount.is_finite() || income.amount < 0.0 {
        warn!(id = income.id, amount = income.amount, "Rejected income amount");
        return Err(Error::InvalidData(format!(
            "Income {} has invalid amount {}",
            income.id, income.amount
        )));
    }
    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    // Try common date formats
    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%m/%d/%Y", // 01/15/2024
        "%m/%d/%y", // 01/15/24
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::Import(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s.trim().replace(['$', ',', ' '], "");

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::Import(format!("Unable to parse amount: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("01/15/2024").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("15.01.2024").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_amount(" 12 ").unwrap(), 12.0);
        assert!(parse_amount("twelve").is_err());
    }

    #[test]
    fn test_parse_expenses_csv() {
        let csv = r#"id,date,category,amount
7,2026-03-02,Food & Drinks,42.10
8,03/05/2026,Transport,"$1,200.00""#;

        let expenses = parse_expenses_csv(csv.as_bytes()).unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].id, 7);
        assert_eq!(expenses[0].category, "Food & Drinks");
        assert_eq!(expenses[1].amount, 1200.0);
        assert_eq!(
            expenses[1].date,
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
        );
    }

    #[test]
    fn test_expense_ids_default_to_row_number() {
        let csv = "Date,Category,Amount\n2026-03-02,Shopping,10\n2026-03-03,Shopping,20";

        let expenses = parse_expenses_csv(csv.as_bytes()).unwrap();
        assert_eq!(expenses[0].id, 1);
        assert_eq!(expenses[1].id, 2);
    }

    #[test]
    fn test_negative_expense_rejected() {
        let csv = "date,category,amount\n2026-03-02,Shopping,-10";
        assert!(matches!(
            parse_expenses_csv(csv.as_bytes()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_blank_category_rejected() {
        let csv = "date,category,amount\n2026-03-02,  ,10";
        assert!(matches!(
            parse_expenses_csv(csv.as_bytes()),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_missing_column_rejected() {
        let csv = "date,amount\n2026-03-02,10";
        assert!(matches!(
            parse_expenses_csv(csv.as_bytes()),
            Err(Error::Import(_))
        ));
    }

    #[test]
    fn test_parse_income_csv_default_source() {
        let csv = "date,amount,source\n2026-03-01,3000,Salary\n2026-03-15,150,";

        let incomes = parse_income_csv(csv.as_bytes()).unwrap();
        assert_eq!(incomes[0].source, "Salary");
        assert_eq!(incomes[1].source, DEFAULT_INCOME_SOURCE);
    }

    #[test]
    fn test_parse_expenses_json() {
        let json = r#"[
            {"id": 1, "amount": 25.5, "category": "Healthcare", "date": "2026-02-11"}
        ]"#;

        let expenses = parse_expenses_json(json.as_bytes()).unwrap();
        assert_eq!(expenses[0].category, "Healthcare");

        let negative = r#"[{"id": 1, "amount": -3, "category": "X", "date": "2026-02-11"}]"#;
        assert!(parse_expenses_json(negative.as_bytes()).is_err());
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("expenses.csv");
        std::fs::write(&csv_path, "date,category,amount\n2026-01-01,Utilities,80\n").unwrap();
        assert_eq!(load_expenses(&csv_path).unwrap().len(), 1);

        let json_path = dir.path().join("income.JSON");
        std::fs::write(
            &json_path,
            r#"[{"id": 1, "amount": 900, "source": "Salary", "date": "2026-01-01"}]"#,
        )
        .unwrap();
        assert_eq!(load_income(&json_path).unwrap()[0].amount, 900.0);
    }
}
